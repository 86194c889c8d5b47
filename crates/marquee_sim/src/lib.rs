//! Software test-bench for the marquee controller.
//!
//! The physical design surrounds the controller with a differential clock
//! buffer and, in the advanced board variant, a PLL. This crate models that
//! surrounding machinery: a clock-conditioner model supplies one tick per
//! edge together with a lock flag, a tick harness delivers those ticks to
//! the controller in order, and an optional recorder writes a VCD trace of
//! the observable signals.
//!
//! # Usage
//!
//! ```
//! use marquee_core::{DisplayMode, Frequency, MarqueeConfig};
//! use marquee_sim::{simulate, ClockConditioner, SimConfig};
//!
//! let config = MarqueeConfig {
//!     clock_frequency: Frequency::new(4),
//!     interval_seconds: 1.0,
//!     mode: DisplayMode::Blink,
//! };
//! let result = simulate(&config, ClockConditioner::Bypass, &SimConfig::with_ticks(8))?;
//! assert_eq!(result.final_pattern.bits(), 0b0000);
//! # Ok::<(), marquee_sim::SimError>(())
//! ```
//!
//! # Modules
//!
//! - `error` — Simulation error types
//! - `conditioner` — Clock-conditioner models (bypass and PLL)
//! - `harness` — The tick harness and run summaries
//! - `trace` — Trace recording (VCD format)

#![warn(missing_docs)]

pub mod conditioner;
pub mod error;
pub mod harness;
pub mod trace;

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use marquee_core::{MarqueeConfig, MarqueeController};

pub use conditioner::ClockConditioner;
pub use error::SimError;
pub use harness::{HarnessResult, TickHarness, Transition};
pub use trace::{TraceRecorder, TraceSample, VcdRecorder};

/// Configuration for a harness run.
#[derive(Debug, Clone, Default)]
pub struct SimConfig {
    /// Number of clock edges to deliver.
    pub ticks: u64,
    /// Optional path for VCD trace output.
    pub trace_path: Option<PathBuf>,
}

impl SimConfig {
    /// Creates a run configuration for the given number of edges, with no
    /// trace output.
    pub fn with_ticks(ticks: u64) -> Self {
        Self {
            ticks,
            trace_path: None,
        }
    }
}

/// High-level entry point: constructs a controller and runs it through the
/// tick harness.
///
/// Validates the controller configuration, attaches a VCD recorder when a
/// trace path is configured, delivers the requested number of edges, and
/// returns the run summary.
pub fn simulate(
    config: &MarqueeConfig,
    conditioner: ClockConditioner,
    sim: &SimConfig,
) -> Result<HarnessResult, SimError> {
    let controller = MarqueeController::new(config)?;
    let mut harness = TickHarness::new(controller, conditioner, config.clock_frequency);

    if let Some(path) = &sim.trace_path {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        harness.set_recorder(Box::new(VcdRecorder::new(writer)))?;
    }

    harness.run(sim.ticks)?;
    harness.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::{DisplayMode, Frequency};

    fn config(mode: DisplayMode) -> MarqueeConfig {
        MarqueeConfig {
            clock_frequency: Frequency::new(4),
            interval_seconds: 1.0,
            mode,
        }
    }

    #[test]
    fn simulate_scan_full_cycle() {
        let result = simulate(
            &config(DisplayMode::Scan),
            ClockConditioner::Bypass,
            &SimConfig::with_ticks(16),
        )
        .unwrap();
        assert_eq!(result.edges_delivered, 16);
        // Lane lights at edge 0, then at each interval boundary (3, 7, 11, 15)
        assert_eq!(result.transitions.len(), 5);
        assert_eq!(result.final_pattern.bits(), 0b0001);
        assert_eq!(result.final_phase, 0);
    }

    #[test]
    fn simulate_rejects_invalid_config() {
        let bad = MarqueeConfig {
            clock_frequency: Frequency::new(1),
            interval_seconds: 0.1,
            mode: DisplayMode::Scan,
        };
        let err = simulate(&bad, ClockConditioner::Bypass, &SimConfig::with_ticks(1)).unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn simulate_with_pll_delays_first_transition() {
        let result = simulate(
            &config(DisplayMode::Scan),
            ClockConditioner::Pll { lock_cycles: 5 },
            &SimConfig::with_ticks(10),
        )
        .unwrap();
        assert_eq!(result.edges_gated, 5);
        // First stable tick is edge 5
        assert_eq!(result.transitions[0].edge, 5);
        assert_eq!(result.transitions[0].pattern.bits(), 0b0001);
    }

    #[test]
    fn simulate_writes_trace_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("marquee.vcd");
        let sim = SimConfig {
            ticks: 8,
            trace_path: Some(path.clone()),
        };
        let _ = simulate(&config(DisplayMode::Blink), ClockConditioner::Bypass, &sim).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("$timescale"));
        assert!(contents.contains("b1111 $"));
    }

    #[test]
    fn simulate_is_deterministic() {
        let run = || {
            simulate(
                &config(DisplayMode::Breathe),
                ClockConditioner::Pll { lock_cycles: 2 },
                &SimConfig::with_ticks(33),
            )
            .unwrap()
        };
        let (a, b) = (run(), run());
        assert_eq!(a.final_pattern, b.final_pattern);
        assert_eq!(a.transitions, b.transitions);
        assert_eq!(a.edges_gated, b.edges_gated);
    }
}
