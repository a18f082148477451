use super::SysfsGpio;
use crate::{pin_map::PinId, GpioError, GpioResult};
use derive_try_from_primitive::TryFromPrimitive;
use embedded_hal::digital::v2 as eh;
use std::convert::TryFrom;
use std::fmt;
use std::ops::Not;

/// Enum representing the level of a given pin.
///
/// Written to and read from the pin's `value` control file as a single ASCII digit.
/// Keep in mind that `active_low` in sysfs inverts the mapping between these and electrical levels.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum Value {
    High = 1,
    Low = 0,
}

/// Signal direction of a pin, as written to its `direction` control file.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

impl Value {
    pub(crate) fn from_control(content: &str) -> Option<Self> {
        content.parse::<u8>().ok().and_then(|v| Value::try_from(v).ok())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

impl Not for Value {
    type Output = Value;

    fn not(self) -> Self::Output {
        match self {
            Value::High => Value::Low,
            Value::Low => Value::High,
        }
    }
}

impl Direction {
    pub(crate) fn from_control(content: &str) -> Option<Self> {
        /* The kernel reports "in" or "out" only, but also accepts "high"/"low" on write
         * which means output with an initial level. We never write those.
         */
        match content {
            "in" => Some(Direction::Input),
            "out" => Some(Direction::Output),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Input => "in",
            Direction::Output => "out",
        })
    }
}

/// Reserved GPIO pin set to input (reading) direction.
///
/// This is obtainable by using `input_pin` method of `SysfsGpio` struct.
/// The handle doesn't own the reservation: dropping it leaves the pin exported.
#[derive(Clone, Debug)]
pub struct InputPin<'gpio> {
    pub(crate) gpio: &'gpio SysfsGpio,
    pub(crate) pin_id: PinId,
}

/// Reserved GPIO pin set to output (writing) direction.
///
/// This is obtainable by using `output_pin` method of `SysfsGpio` struct.
/// The handle doesn't own the reservation: dropping it leaves the pin exported.
#[derive(Clone, Debug)]
pub struct OutputPin<'gpio> {
    pub(crate) gpio: &'gpio SysfsGpio,
    pub(crate) pin_id: PinId,
}

impl<'gpio> InputPin<'gpio> {
    pub fn id(&self) -> PinId {
        self.pin_id
    }

    pub fn into_output(self) -> GpioResult<OutputPin<'gpio>> {
        self.gpio.set_direction(self.pin_id, Direction::Output)?;
        Ok(OutputPin {
            gpio: self.gpio,
            pin_id: self.pin_id,
        })
    }

    pub fn get_value(&self) -> GpioResult<Value> {
        self.gpio.get_value(self.pin_id)
    }
}

impl<'gpio> OutputPin<'gpio> {
    pub fn id(&self) -> PinId {
        self.pin_id
    }

    pub fn into_input(self) -> GpioResult<InputPin<'gpio>> {
        self.gpio.set_direction(self.pin_id, Direction::Input)?;
        Ok(InputPin {
            gpio: self.gpio,
            pin_id: self.pin_id,
        })
    }

    pub fn set_value(&mut self, value: Value) -> GpioResult<()> {
        self.gpio.set_value(self.pin_id, value)
    }

    /// Reads back the level currently latched on the pin.
    pub fn get_value(&self) -> GpioResult<Value> {
        self.gpio.get_value(self.pin_id)
    }
}

impl<'gpio> eh::InputPin for InputPin<'gpio> {
    type Error = GpioError;

    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(self.get_value()? == Value::High)
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        self.is_high().map(|v| !v)
    }
}

impl<'gpio> eh::OutputPin for OutputPin<'gpio> {
    type Error = GpioError;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_value(Value::Low)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_value(Value::High)
    }
}

impl<'gpio> eh::StatefulOutputPin for OutputPin<'gpio> {
    fn is_set_high(&self) -> Result<bool, GpioError> {
        Ok(self.get_value()? == Value::High)
    }

    fn is_set_low(&self) -> Result<bool, GpioError> {
        self.is_set_high().map(|v| !v)
    }
}

impl<'gpio> eh::ToggleableOutputPin for OutputPin<'gpio> {
    type Error = GpioError;

    fn toggle(&mut self) -> Result<(), Self::Error> {
        let current = self.get_value()?;
        self.set_value(!current)
    }
}
