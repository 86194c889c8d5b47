//! The counter/state-machine at the heart of the marquee.
//!
//! [`MarqueeController`] advances one step per delivered clock tick: an
//! interval counter counts up to the configured tick threshold, and each
//! wrap advances a 2-bit phase. The 4-bit output pattern is recomputed on
//! every stable tick, not only at phase transitions, because the breathe
//! mode keys off the counter position within the interval. Ticks delivered
//! while the clock-stable flag is low leave the state untouched, modeling
//! the wait for the external clock conditioner to report lock.

use crate::config::MarqueeConfig;
use crate::error::MarqueeError;
use crate::mode::DisplayMode;
use crate::pattern::Pattern;

/// Number of phase values the controller cycles through.
pub const PHASE_COUNT: u8 = 4;

/// Selects the output pattern for a given machine state.
///
/// This is the combinational half of the design: a pure function of the
/// mode, the phase, and the counter position within the interval. The
/// scan arm keeps a defensive default for phase values outside `0..4`,
/// unreachable under the modulo-4 wrap but handled anyway.
pub fn pattern_for(mode: DisplayMode, phase: u8, tick_counter: u64, interval_ticks: u64) -> Pattern {
    match mode {
        DisplayMode::Scan => match phase {
            0 => Pattern::new(0b0001),
            1 => Pattern::new(0b0010),
            2 => Pattern::new(0b0100),
            3 => Pattern::new(0b1000),
            _ => Pattern::OFF,
        },
        DisplayMode::Blink => {
            if phase % 2 == 1 {
                Pattern::ALL_ON
            } else {
                Pattern::OFF
            }
        }
        DisplayMode::Breathe => {
            if tick_counter < interval_ticks / 2 {
                Pattern::ALL_ON
            } else {
                Pattern::OFF
            }
        }
        DisplayMode::Other(_) => Pattern::OFF,
    }
}

/// The marquee controller: one interval counter, one 2-bit phase register,
/// and a 4-bit output register.
///
/// State is owned exclusively by the controller; external observers read the
/// output via [`current_pattern`](MarqueeController::current_pattern) and the
/// internal registers via the read-only accessors.
#[derive(Clone, Debug)]
pub struct MarqueeController {
    interval_ticks: u64,
    mode: DisplayMode,
    tick_counter: u64,
    phase: u8,
    output_pattern: Pattern,
}

impl MarqueeController {
    /// Creates a controller from a configuration, validating it.
    ///
    /// The controller starts in the post-reset state: counter and phase at
    /// zero, all lanes off.
    pub fn new(config: &MarqueeConfig) -> Result<Self, MarqueeError> {
        let interval_ticks = config.interval_ticks()?;
        Self::with_interval_ticks(interval_ticks, config.mode)
    }

    /// Creates a controller directly from a tick count, bypassing the
    /// frequency/duration derivation. Rejects `interval_ticks == 0`.
    pub fn with_interval_ticks(
        interval_ticks: u64,
        mode: DisplayMode,
    ) -> Result<Self, MarqueeError> {
        if interval_ticks == 0 {
            return Err(MarqueeError::invalid("interval must be at least one tick"));
        }
        Ok(Self {
            interval_ticks,
            mode,
            tick_counter: 0,
            phase: 0,
            output_pattern: Pattern::OFF,
        })
    }

    /// Returns to the post-reset state: counter and phase at zero, all
    /// lanes off. Callable at any time and idempotent.
    pub fn reset(&mut self) {
        self.tick_counter = 0;
        self.phase = 0;
        self.output_pattern = Pattern::OFF;
    }

    /// Advances the machine by exactly one clock period.
    ///
    /// A tick with `clock_stable == false` is a no-op. A stable tick either
    /// increments the interval counter or, at the interval boundary, wraps
    /// it and advances the phase; the output pattern is then recomputed.
    pub fn on_tick(&mut self, clock_stable: bool) {
        if !clock_stable {
            return;
        }
        if self.tick_counter == self.interval_ticks - 1 {
            self.tick_counter = 0;
            self.phase = (self.phase + 1) % PHASE_COUNT;
        } else {
            self.tick_counter += 1;
        }
        self.output_pattern =
            pattern_for(self.mode, self.phase, self.tick_counter, self.interval_ticks);
    }

    /// Returns the current 4-bit output pattern. Pure read.
    pub fn current_pattern(&self) -> Pattern {
        self.output_pattern
    }

    /// Returns the current phase value, always in `0..4`.
    pub fn phase(&self) -> u8 {
        self.phase
    }

    /// Returns the current position within the interval, always below
    /// [`interval_ticks`](MarqueeController::interval_ticks).
    pub fn tick_counter(&self) -> u64 {
        self.tick_counter
    }

    /// Returns the configured ticks per interval.
    pub fn interval_ticks(&self) -> u64 {
        self.interval_ticks
    }

    /// Returns the configured display mode.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }
}
