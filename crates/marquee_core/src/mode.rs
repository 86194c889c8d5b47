//! Display mode selection.

use std::fmt;

/// The LED display mode driven by the controller.
///
/// The three recognized modes use the raw selector encoding 0/1/2. Any other
/// selector value is carried as [`DisplayMode::Other`] and drives the all-off
/// pattern; it is accepted rather than rejected, matching the default arm of
/// the hardware's mode dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// Sequential one-hot scan across the four lanes.
    Scan,
    /// All lanes toggle together once per interval.
    Blink,
    /// All lanes on for the first half of each interval, off for the second.
    Breathe,
    /// An unrecognized selector value. All lanes stay off.
    Other(u8),
}

impl DisplayMode {
    /// Decodes a raw mode selector.
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => DisplayMode::Scan,
            1 => DisplayMode::Blink,
            2 => DisplayMode::Breathe,
            n => DisplayMode::Other(n),
        }
    }

    /// Returns the raw mode selector encoding.
    pub fn as_raw(&self) -> u8 {
        match self {
            DisplayMode::Scan => 0,
            DisplayMode::Blink => 1,
            DisplayMode::Breathe => 2,
            DisplayMode::Other(n) => *n,
        }
    }

    /// Parses a lowercase mode name. Unknown names are not accepted; only
    /// raw selector values get the permissive fallback.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "scan" => Some(DisplayMode::Scan),
            "blink" => Some(DisplayMode::Blink),
            "breathe" => Some(DisplayMode::Breathe),
            _ => None,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayMode::Scan => write!(f, "scan"),
            DisplayMode::Blink => write!(f, "blink"),
            DisplayMode::Breathe => write!(f, "breathe"),
            DisplayMode::Other(n) => write!(f, "other({n})"),
        }
    }
}
