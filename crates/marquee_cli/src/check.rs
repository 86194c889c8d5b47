//! `marquee check` — validate a project configuration.
//!
//! Loads `marquee.toml`, bridges it to the controller configuration, and
//! reports the derived timing. Exits non-zero if the configuration cannot
//! drive the controller (e.g., the interval rounds to zero ticks).

use crate::pipeline::resolve_project_root;
use crate::GlobalArgs;

/// Runs the `marquee check` command.
///
/// Returns exit code 0 if the configuration is valid, 1 otherwise.
pub fn run(global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project_dir = resolve_project_root(global)?;
    let config = marquee_config::load_config(&project_dir)?;
    let core = config.to_marquee_config();

    let interval_ticks = match core.interval_ticks() {
        Ok(n) => n,
        Err(e) => {
            eprintln!("error: {e}");
            return Ok(1);
        }
    };

    if !global.quiet {
        println!("clock      {}", core.clock_frequency);
        println!("interval   {} s ({interval_ticks} ticks)", core.interval_seconds);
        println!("mode       {}", core.mode);
        if config.clock.use_pll {
            println!("pll        locked after {} edges", config.clock.lock_cycles);
        } else {
            println!("pll        bypassed");
        }
    }

    Ok(0)
}
