//! Blinks the on-board LED of an Intel Galileo Gen2.
//!
//! The LED sits on GPIO 7, which is also broken out on IO13 of the Arduino header. GPIO 30 and 46 route that line
//! to GPIO and are held low for the whole run. The LED is toggled 10 times with a 1 second delay in between,
//! then parked low and every pin is released.
//!
//! Exits with -1 when any step fails, after releasing whatever had been reserved.

use env_logger::Env;
use galileo_sysfs_gpio::{BlinkSequence, SysfsGpio};
use log::error;
use std::error::Error;
use std::fmt::Write;

fn main() {
    let env = Env::default().filter_or("LOG_LEVEL", "info");
    env_logger::init_from_env(env);

    let gpio = SysfsGpio::new();

    if let Err(err) = BlinkSequence::default().run(&gpio) {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let _ = write!(message, ": {}", cause);
            source = cause.source();
        }
        error!("{}", message);

        std::process::exit(-1);
    }
}
