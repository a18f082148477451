//! Pin identifiers and the Galileo Gen2 lines used by the blink driver.
//!
//! Which physical pin a number refers to is decided by the board's pin-mux documentation, not by this crate.
use std::fmt;

/// Kernel GPIO line number.
///
/// No range validation is performed. An identifier the hardware doesn't support surfaces
/// as a failed write to the `export` control file.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct PinId(pub u32);

impl PinId {
    pub fn number(self) -> u32 {
        self.0
    }
}

impl From<u32> for PinId {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

/// Plain decimal, which is exactly the payload the `export`/`unexport` files accept.
impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// GPIO line driving Arduino header IO13. The on-board LED sits on the same line.
pub const IO13: PinId = PinId(7);

/// Level shifter in front of IO13. Driven low to let IO13 act as an output.
pub const IO13_LEVEL_SHIFTER: PinId = PinId(30);

/// Internal multiplexer for IO13. Driven low to route the line to GPIO instead of SPI.
pub const IO13_MUX: PinId = PinId(46);
