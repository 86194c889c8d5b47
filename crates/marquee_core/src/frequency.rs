//! Clock frequency values with unit parsing and display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const HZ_PER_KHZ: u64 = 1_000;
const HZ_PER_MHZ: u64 = 1_000_000;
const HZ_PER_GHZ: u64 = 1_000_000_000;

/// A clock frequency stored in integer Hertz.
///
/// Supports parsing from strings like "12MHz", "100KHz", "1GHz", "4Hz",
/// bare integers (interpreted as Hz), and fractional scaled values such as
/// "4.5MHz". Displays using the largest unit that divides the value exactly.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Frequency(u64);

impl Frequency {
    /// Creates a new frequency from a value in Hertz.
    pub fn new(hz: u64) -> Self {
        Self(hz)
    }

    /// Returns the frequency in Hertz.
    pub fn hz(&self) -> u64 {
        self.0
    }

    /// Returns the nominal clock period in nanoseconds, rounded to the
    /// nearest integer. Returns `None` for a zero frequency.
    pub fn period_ns(&self) -> Option<u64> {
        if self.0 == 0 {
            return None;
        }
        Some(((HZ_PER_GHZ as f64) / (self.0 as f64)).round() as u64)
    }
}

impl fmt::Debug for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frequency({self})")
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hz = self.0;
        if hz >= HZ_PER_GHZ && hz % HZ_PER_GHZ == 0 {
            write!(f, "{}GHz", hz / HZ_PER_GHZ)
        } else if hz >= HZ_PER_MHZ && hz % HZ_PER_MHZ == 0 {
            write!(f, "{}MHz", hz / HZ_PER_MHZ)
        } else if hz >= HZ_PER_KHZ && hz % HZ_PER_KHZ == 0 {
            write!(f, "{}KHz", hz / HZ_PER_KHZ)
        } else {
            write!(f, "{hz}Hz")
        }
    }
}

/// Error type for parsing frequency strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFrequencyError {
    /// The input string that failed to parse.
    pub input: String,
}

impl fmt::Display for ParseFrequencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid frequency: '{}'", self.input)
    }
}

impl std::error::Error for ParseFrequencyError {}

impl FromStr for Frequency {
    type Err = ParseFrequencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ParseFrequencyError {
            input: s.to_string(),
        };

        let lower = s.to_ascii_lowercase();
        let (num, scale) = if let Some(num) = lower.strip_suffix("ghz") {
            (num, HZ_PER_GHZ)
        } else if let Some(num) = lower.strip_suffix("mhz") {
            (num, HZ_PER_MHZ)
        } else if let Some(num) = lower.strip_suffix("khz") {
            (num, HZ_PER_KHZ)
        } else if let Some(num) = lower.strip_suffix("hz") {
            (num, 1)
        } else {
            (lower.as_str(), 1)
        };

        let val: f64 = num.trim().parse().map_err(|_| err())?;
        if !val.is_finite() || val < 0.0 {
            return Err(err());
        }
        let hz = (val * scale as f64).round();
        if hz > u64::MAX as f64 {
            return Err(err());
        }
        Ok(Frequency(hz as u64))
    }
}
