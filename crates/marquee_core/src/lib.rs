//! Tick-accurate software model of the marquee LED pattern controller.
//!
//! The hardware this models is a single synchronous counter feeding a small
//! state machine: every clock tick advances an interval counter, and each
//! time the counter wraps a 2-bit phase advances and a 4-bit LED pattern is
//! reselected according to the configured display mode. A clock-stability
//! flag gates tick processing so the controller idles until the external
//! clock conditioner reports lock.
//!
//! # Usage
//!
//! ```
//! use marquee_core::{DisplayMode, Frequency, MarqueeConfig, MarqueeController};
//!
//! let config = MarqueeConfig {
//!     clock_frequency: Frequency::new(4),
//!     interval_seconds: 1.0,
//!     mode: DisplayMode::Scan,
//! };
//! let mut ctrl = MarqueeController::new(&config)?;
//! ctrl.on_tick(true);
//! assert_eq!(ctrl.current_pattern().bits(), 0b0001);
//! for _ in 0..3 {
//!     ctrl.on_tick(true);
//! }
//! // Interval boundary: the phase advances and the next lane lights
//! assert_eq!(ctrl.current_pattern().bits(), 0b0010);
//! # Ok::<(), marquee_core::MarqueeError>(())
//! ```
//!
//! # Modules
//!
//! - `frequency` — Clock frequency values with unit parsing
//! - `pattern` — The 4-bit LED output value
//! - `mode` — Display mode selection
//! - `config` — Construction-time configuration and validation
//! - `controller` — The counter/state-machine itself
//! - `error` — The single configuration error kind

#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod frequency;
pub mod mode;
pub mod pattern;

pub use config::MarqueeConfig;
pub use controller::{pattern_for, MarqueeController, PHASE_COUNT};
pub use error::MarqueeError;
pub use frequency::{Frequency, ParseFrequencyError};
pub use mode::DisplayMode;
pub use pattern::{Pattern, LANE_COUNT};
