//! This crate exposes GPIO pins of a Linux board through the kernel's [sysfs GPIO interface](https://www.kernel.org/doc/Documentation/gpio/sysfs.txt)
//! (`/sys/class/gpio`) for programmatic use in Rust.
//!
//! Every operation is a single open-write-close transaction against one control file. Nothing is cached in-process:
//! the kernel owns all the state and a pin is addressed purely by its number on each call.
//!
//! Abstractions for reserved pins (`InputPin`, `OutputPin`) implement relevant [`embedded_hal`](https://crates.io/crates/embedded-hal)
//! abstractions so this crate can be used with driver implementations using `embedded_hal` generic traits.
//!
//! The `galileo-blink` binary blinks the on-board LED of an Intel Galileo Gen2 using `BlinkSequence`.
//!
//! Code has been written against the legacy sysfs ABI. Newer kernels may build without it (`CONFIG_GPIO_SYSFS`),
//! in which case `/sys/class/gpio` is simply missing and every reservation fails to open its control file.

use thiserror::Error;

mod blink;
mod control;
mod device;
pub mod pin_map;

pub use blink::BlinkSequence;
pub use control::GpioControl;
pub use device::error::ControlFileError;
pub use device::{Direction, InputPin, OutputPin, SysfsGpio, Value};
pub use pin_map::PinId;

/// Main error type for this crate.
///
/// Each variant names the operation which failed and the pin it was performed on.
/// For the underlying cause, see `ControlFileError` documentation.
#[derive(Error, Debug)]
pub enum GpioError {
    #[error("failed to reserve GPIO {0}")]
    Export(PinId, #[source] ControlFileError),
    #[error("failed to release GPIO {0}")]
    Unexport(PinId, #[source] ControlFileError),
    #[error("failed to set direction of GPIO {0} to {1}")]
    Direction(PinId, Direction, #[source] ControlFileError),
    #[error("failed to set GPIO {0} to {1}")]
    Value(PinId, Value, #[source] ControlFileError),
    #[error("failed to read value of GPIO {0}")]
    ReadValue(PinId, #[source] ControlFileError),
    #[error("failed to read direction of GPIO {0}")]
    ReadDirection(PinId, #[source] ControlFileError),
}

pub type GpioResult<T> = Result<T, GpioError>;
