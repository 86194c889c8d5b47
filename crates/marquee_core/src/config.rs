//! Construction-time configuration and validation.

use crate::error::MarqueeError;
use crate::frequency::Frequency;
use crate::mode::DisplayMode;

/// Immutable controller configuration, fixed at construction.
///
/// The derived quantity `interval_ticks = round(hz * interval_seconds)` must
/// be at least 1; [`interval_ticks`](MarqueeConfig::interval_ticks) rejects
/// anything else. That is the only error the core can produce.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarqueeConfig {
    /// The tick frequency delivered by the clock conditioner.
    pub clock_frequency: Frequency,
    /// The duration of one pattern interval, in seconds.
    pub interval_seconds: f64,
    /// The display mode.
    pub mode: DisplayMode,
}

impl MarqueeConfig {
    /// Derives the number of ticks per pattern interval.
    ///
    /// Fails with [`MarqueeError::InvalidConfiguration`] when either
    /// parameter is non-positive or the product rounds below one tick.
    pub fn interval_ticks(&self) -> Result<u64, MarqueeError> {
        let hz = self.clock_frequency.hz();
        if hz == 0 {
            return Err(MarqueeError::invalid("clock frequency must be positive"));
        }
        if !self.interval_seconds.is_finite() || self.interval_seconds <= 0.0 {
            return Err(MarqueeError::invalid(format!(
                "interval must be a positive duration, got {}s",
                self.interval_seconds
            )));
        }
        let ticks = (hz as f64 * self.interval_seconds).round();
        if ticks < 1.0 {
            return Err(MarqueeError::invalid(format!(
                "interval of {}s rounds to zero ticks at {}",
                self.interval_seconds, self.clock_frequency
            )));
        }
        Ok(ticks as u64)
    }
}
