//! LED blink driver composed from the four `GpioControl` operations.
use log::{debug, error, info};
use std::thread::sleep;
use std::time::Duration;

use crate::{pin_map, Direction, GpioControl, GpioResult, PinId, Value};

/// A fixed, linear blink sequence.
///
/// Pins in `held_low` are reserved first and driven low before the LED pin is touched. On the Galileo Gen2
/// these are the level shifter and multiplexer which route IO13 to GPIO, so the defaults blink the on-board LED.
///
/// The delay between toggles is a plain blocking sleep. Signals are not intercepted: killing the process mid-sequence
/// leaves the pins reserved.
#[derive(Clone, Debug, PartialEq)]
pub struct BlinkSequence {
    pub held_low: Vec<PinId>,
    pub led: PinId,
    pub blinks: usize,
    pub interval: Duration,
}

impl Default for BlinkSequence {
    fn default() -> Self {
        Self {
            held_low: vec![pin_map::IO13_LEVEL_SHIFTER, pin_map::IO13_MUX],
            led: pin_map::IO13,
            blinks: 10,
            interval: Duration::from_secs(1),
        }
    }
}

impl BlinkSequence {
    /// Runs the whole sequence, stopping at the first failed operation.
    ///
    /// When something fails every pin reserved so far is released (errors during that cleanup are discarded)
    /// and the original error is returned.
    pub fn run<G: GpioControl>(&self, gpio: &G) -> GpioResult<()> {
        let mut reserved = Vec::with_capacity(self.held_low.len() + 1);

        let result = self.drive(gpio, &mut reserved);
        if let Err(err) = &result {
            error!("Blink sequence aborted: {}", err);
            Self::release_quietly(gpio, &reserved);
        }

        result
    }

    fn drive<G: GpioControl>(&self, gpio: &G, reserved: &mut Vec<PinId>) -> GpioResult<()> {
        for &pin_id in self.pins() {
            gpio.export(pin_id)?;
            reserved.push(pin_id);
        }

        for &pin_id in &self.held_low {
            gpio.set_direction(pin_id, Direction::Output)?;
            gpio.set_value(pin_id, Value::Low)?;
        }

        gpio.set_direction(self.led, Direction::Output)?;

        info!(
            "Blinking GPIO {} {} times every {:?}",
            self.led, self.blinks, self.interval
        );
        for _ in 0..self.blinks {
            gpio.set_value(self.led, Value::Low)?;
            sleep(self.interval);
            gpio.set_value(self.led, Value::High)?;
            sleep(self.interval);
        }

        gpio.set_value(self.led, Value::Low)?;

        // A pin stays in `reserved` until its release succeeded, so a failure here is retried by the cleanup.
        while let Some(&pin_id) = reserved.first() {
            gpio.unexport(pin_id)?;
            reserved.remove(0);
        }

        info!("Blink sequence finished");
        Ok(())
    }

    fn pins(&self) -> impl Iterator<Item = &PinId> {
        self.held_low.iter().chain(std::iter::once(&self.led))
    }

    fn release_quietly<G: GpioControl>(gpio: &G, reserved: &[PinId]) {
        for &pin_id in reserved {
            if let Err(err) = gpio.unexport(pin_id) {
                debug!("Ignoring failed release of GPIO {} during cleanup: {}", pin_id, err);
            }
        }
    }
}
