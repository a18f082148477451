//! This example demonstrates the usage of embedded_hal trait usage.
//!
//! `blink_led` can be used for _any_ device with embedded-hal digital pins abstraction,
//! here it is fed a sysfs-backed output pin.
//!
//! This example assumes an LED on GPIO 7 (IO13 of the Galileo Gen2 Arduino header), with the
//! IO13 level shifter and multiplexer already driven low.

use embedded_hal::digital::v2::*;
use galileo_sysfs_gpio::{pin_map, SysfsGpio};
use std::error::Error;
use std::thread::sleep;
use std::time::Duration;

fn blink_led<T: ToggleableOutputPin<Error = impl Error + 'static>>(
    pin: &mut T,
    times: usize,
) -> Result<(), Box<dyn Error>> {
    let blink_interval = Duration::from_millis(500);

    for _ in 0..times * 2 {
        pin.toggle()?;
        sleep(blink_interval);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let gpio = SysfsGpio::new();
    gpio.export(pin_map::IO13)?;

    let result = gpio
        .output_pin(pin_map::IO13)
        .map_err(Box::<dyn Error>::from)
        .and_then(|mut led_pin| {
            led_pin.set_low()?;
            blink_led(&mut led_pin, 5)?;
            led_pin.set_low()?;
            Ok(())
        });

    gpio.unexport(pin_map::IO13)?;
    result
}
