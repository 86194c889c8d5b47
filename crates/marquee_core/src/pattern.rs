//! The 4-bit LED output value.

use std::fmt;

/// Number of LED lanes driven by the controller.
pub const LANE_COUNT: u32 = 4;

/// A 4-bit LED output pattern.
///
/// Bit 0 is the first lane. Values are masked to the low nibble on
/// construction, so a `Pattern` always holds a valid 4-bit value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All lanes off.
    pub const OFF: Pattern = Pattern(0b0000);
    /// All lanes on.
    pub const ALL_ON: Pattern = Pattern(0b1111);

    /// Creates a pattern from raw bits, masking to the low 4 bits.
    pub fn new(bits: u8) -> Self {
        Self(bits & 0x0f)
    }

    /// Creates a one-hot pattern with only the given lane lit.
    ///
    /// Lanes outside `0..4` produce the all-off pattern.
    pub fn one_hot(lane: u32) -> Self {
        if lane < LANE_COUNT {
            Self(1 << lane)
        } else {
            Self::OFF
        }
    }

    /// Returns the raw 4-bit value.
    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Returns whether the given lane is lit. Lanes outside `0..4` are
    /// reported as unlit.
    pub fn lane(&self, lane: u32) -> bool {
        lane < LANE_COUNT && (self.0 >> lane) & 1 == 1
    }

    /// Returns the number of lit lanes.
    pub fn lit_count(&self) -> u32 {
        self.0.count_ones()
    }
}

impl fmt::Display for Pattern {
    /// Formats as a 4-character binary string, most significant lane first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04b}", self.0)
    }
}
