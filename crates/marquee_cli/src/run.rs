//! `marquee run` — execute the tick-level simulation.
//!
//! Loads the project configuration, builds the clock conditioner, runs the
//! harness for the requested number of edges, and prints each pattern
//! transition as a frame. Optionally records a VCD trace.

use std::path::PathBuf;

use marquee_core::{MarqueeConfig, Pattern, LANE_COUNT, PHASE_COUNT};
use marquee_sim::{ClockConditioner, SimConfig};

use crate::pipeline::{parse_duration, resolve_project_root};
use crate::{GlobalArgs, RunArgs};

/// Runs the `marquee run` command.
///
/// Returns exit code 0 on success. Configuration problems surface as errors.
pub fn run(args: &RunArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project_dir = resolve_project_root(global)?;
    let config = marquee_config::load_config(&project_dir)?;
    let core = config.to_marquee_config();

    let conditioner = if config.clock.use_pll {
        ClockConditioner::Pll {
            lock_cycles: config.clock.lock_cycles,
        }
    } else {
        ClockConditioner::Bypass
    };

    let ticks = resolve_tick_count(args, &core)?;

    let mut sim_config = SimConfig::with_ticks(ticks);
    sim_config.trace_path = args.vcd.as_ref().map(PathBuf::from);

    if !global.quiet {
        eprintln!("   Running {} for {ticks} ticks at {}", core.mode, core.clock_frequency);
    }

    let result = marquee_sim::simulate(&core, conditioner, &sim_config)?;

    if !args.no_frames && !global.quiet {
        for transition in &result.transitions {
            println!("{}", render_frame(transition.edge, transition.pattern));
        }
    }

    if !global.quiet {
        eprintln!(
            "   Finished: {} edges delivered, {} gated, {} transitions",
            result.edges_delivered,
            result.edges_gated,
            result.transitions.len()
        );
        eprintln!(
            "   Final state: phase {} pattern {}",
            result.final_phase, result.final_pattern
        );
        if let Some(ref path) = sim_config.trace_path {
            eprintln!("   Trace: {}", path.display());
        }
    }

    Ok(0)
}

/// Resolves the number of edges to simulate from the CLI arguments.
///
/// `--ticks` wins; `--time` converts through the clock frequency. With
/// neither, runs one full phase sweep (four intervals).
fn resolve_tick_count(
    args: &RunArgs,
    core: &MarqueeConfig,
) -> Result<u64, Box<dyn std::error::Error>> {
    if let Some(ticks) = args.ticks {
        return Ok(ticks);
    }
    if let Some(ref time) = args.time {
        let seconds = parse_duration(time)?;
        let ticks = (core.clock_frequency.hz() as f64 * seconds).round() as u64;
        if ticks == 0 {
            return Err(format!("--time {time} is shorter than one clock period").into());
        }
        return Ok(ticks);
    }
    Ok(core.interval_ticks()? * u64::from(PHASE_COUNT))
}

/// Renders a pattern transition as a single output line.
///
/// The lane glyphs read left to right from the highest lane, matching the
/// bit order of the pattern display.
fn render_frame(edge: u64, pattern: Pattern) -> String {
    let mut lanes = String::new();
    for lane in (0..LANE_COUNT).rev() {
        if (pattern.bits() >> lane) & 1 == 1 {
            lanes.push_str(" \u{25cf}");
        } else {
            lanes.push_str(" \u{00b7}");
        }
    }
    format!("#{edge:<6} {pattern}  [{lanes} ]")
}
