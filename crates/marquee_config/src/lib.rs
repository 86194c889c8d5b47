//! `marquee.toml` project configuration.
//!
//! Declares the clock source (frequency, optional PLL conditioning) and the
//! pattern settings (interval duration, display mode), and bridges them to
//! the core controller configuration.
//!
//! ```toml
//! [clock]
//! frequency = "12MHz"
//! use_pll = true
//! lock_cycles = 3
//!
//! [pattern]
//! interval_seconds = 0.5
//! mode = "scan"
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::{ClockConfig, PatternConfig, ProjectConfig};
