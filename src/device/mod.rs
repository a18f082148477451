use std::path::{Path, PathBuf};

mod control_file;
pub mod error;
mod pin;

use crate::{pin_map::PinId, GpioError, GpioResult};
use error::ControlFileError;

pub use pin::{Direction, InputPin, OutputPin, Value};

/// The main abstraction over the kernel's sysfs GPIO interface.
///
/// This struct only knows where the control files live. Every call is one synchronous transaction
/// against one control file with no retry, and no per-pin state is kept between calls.
///
/// It's not safe to operate on the same pin from multiple threads or processes: the kernel interface has no locking,
/// so concurrent reservation/release of one pin is a race this crate neither detects nor prevents.
#[derive(Debug, Clone)]
pub struct SysfsGpio {
    root: PathBuf,
}

impl Default for SysfsGpio {
    fn default() -> Self {
        Self::new()
    }
}

impl SysfsGpio {
    pub const SYSFS_GPIO_ROOT: &'static str = "/sys/class/gpio";

    /// Uses the control files under `/sys/class/gpio`.
    pub fn new() -> Self {
        Self::with_root(Self::SYSFS_GPIO_ROOT)
    }

    /// Uses control files under an arbitrary directory laid out like `/sys/class/gpio`.
    pub fn with_root<T: AsRef<Path>>(root: T) -> Self {
        Self {
            root: root.as_ref().to_owned(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reserves a pin by writing its number to the `export` control file.
    ///
    /// On success `gpio<N>` directory with `direction` and `value` files appears under the root.
    /// Fails when the pin is already reserved, not supported by the hardware, or when there are no permissions to export pins.
    pub fn export(&self, pin_id: PinId) -> GpioResult<()> {
        control_file::write(self.root.join("export"), &pin_id.to_string())
            .map_err(|err| GpioError::Export(pin_id, err))
    }

    /// Releases a pin by writing its number to the `unexport` control file.
    ///
    /// The pin's control files disappear and any process can reserve it again.
    pub fn unexport(&self, pin_id: PinId) -> GpioResult<()> {
        control_file::write(self.root.join("unexport"), &pin_id.to_string())
            .map_err(|err| GpioError::Unexport(pin_id, err))
    }

    /// Sets the direction of a reserved pin.
    ///
    /// Fails if the pin hasn't been reserved with `export` first.
    pub fn set_direction(&self, pin_id: PinId, direction: Direction) -> GpioResult<()> {
        control_file::write(self.pin_file(pin_id, "direction"), &direction.to_string())
            .map_err(|err| GpioError::Direction(pin_id, direction, err))
    }

    /// Writes a value to a pin set to `Output` direction.
    ///
    /// What happens when the pin is an input is decided by the kernel driver.
    pub fn set_value(&self, pin_id: PinId, value: Value) -> GpioResult<()> {
        control_file::write(self.pin_file(pin_id, "value"), &value.to_string())
            .map_err(|err| GpioError::Value(pin_id, value, err))
    }

    pub fn get_value(&self, pin_id: PinId) -> GpioResult<Value> {
        let path = self.pin_file(pin_id, "value");
        let content = control_file::read(&path).map_err(|err| GpioError::ReadValue(pin_id, err))?;

        Value::from_control(&content).ok_or_else(|| {
            GpioError::ReadValue(pin_id, ControlFileError::UnexpectedContent { path, content })
        })
    }

    pub fn get_direction(&self, pin_id: PinId) -> GpioResult<Direction> {
        let path = self.pin_file(pin_id, "direction");
        let content =
            control_file::read(&path).map_err(|err| GpioError::ReadDirection(pin_id, err))?;

        Direction::from_control(&content).ok_or_else(|| {
            GpioError::ReadDirection(pin_id, ControlFileError::UnexpectedContent { path, content })
        })
    }

    /// Whether the pin's control directory currently exists.
    pub fn is_exported(&self, pin_id: PinId) -> bool {
        self.pin_dir(pin_id).is_dir()
    }

    /// Sets a reserved pin to output direction and returns a handle for writing.
    pub fn output_pin(&self, pin_id: PinId) -> GpioResult<OutputPin<'_>> {
        self.set_direction(pin_id, Direction::Output)?;
        Ok(OutputPin { gpio: self, pin_id })
    }

    /// Sets a reserved pin to input direction and returns a handle for reading.
    pub fn input_pin(&self, pin_id: PinId) -> GpioResult<InputPin<'_>> {
        self.set_direction(pin_id, Direction::Input)?;
        Ok(InputPin { gpio: self, pin_id })
    }

    fn pin_dir(&self, pin_id: PinId) -> PathBuf {
        self.root.join(format!("gpio{}", pin_id))
    }

    fn pin_file(&self, pin_id: PinId, attribute: &str) -> PathBuf {
        self.pin_dir(pin_id).join(attribute)
    }
}
