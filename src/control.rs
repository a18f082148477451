use crate::{Direction, GpioResult, PinId, SysfsGpio, Value};

/// The four pin operations `BlinkSequence` is built from.
///
/// `SysfsGpio` is the implementation used on a board. Any other backend (a character-device one,
/// or a recording fake) can drive the same sequence.
pub trait GpioControl {
    fn export(&self, pin_id: PinId) -> GpioResult<()>;
    fn unexport(&self, pin_id: PinId) -> GpioResult<()>;
    fn set_direction(&self, pin_id: PinId, direction: Direction) -> GpioResult<()>;
    fn set_value(&self, pin_id: PinId, value: Value) -> GpioResult<()>;
}

impl GpioControl for SysfsGpio {
    fn export(&self, pin_id: PinId) -> GpioResult<()> {
        SysfsGpio::export(self, pin_id)
    }

    fn unexport(&self, pin_id: PinId) -> GpioResult<()> {
        SysfsGpio::unexport(self, pin_id)
    }

    fn set_direction(&self, pin_id: PinId, direction: Direction) -> GpioResult<()> {
        SysfsGpio::set_direction(self, pin_id, direction)
    }

    fn set_value(&self, pin_id: PinId, value: Value) -> GpioResult<()> {
        SysfsGpio::set_value(self, pin_id, value)
    }
}
