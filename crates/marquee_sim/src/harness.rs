//! The tick harness: drives a controller one tick per clock edge.
//!
//! The harness plays the role of the clock network and reset distribution
//! that surround the controller on the board: it asks the conditioner model
//! whether each edge is stable, honors the level-sensitive reset input, and
//! samples the observable signals for trace recording. Reset always takes
//! precedence over tick processing; while asserted, every delivered edge
//! resolves to a reset and the counter does not advance.

use marquee_core::{Frequency, MarqueeController, Pattern};

use crate::conditioner::ClockConditioner;
use crate::error::SimError;
use crate::trace::{TraceRecorder, TraceSample};

/// A pattern transition observed during a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// The edge index (counting from zero) at which the output changed.
    pub edge: u64,
    /// The new output pattern.
    pub pattern: Pattern,
}

/// Summary of a completed harness run.
#[derive(Debug, Clone)]
pub struct HarnessResult {
    /// Total clock edges delivered.
    pub edges_delivered: u64,
    /// Edges ignored because the conditioner had not locked.
    pub edges_gated: u64,
    /// Every output pattern change, in order.
    pub transitions: Vec<Transition>,
    /// The output pattern after the final edge.
    pub final_pattern: Pattern,
    /// The phase register after the final edge.
    pub final_phase: u8,
}

/// Drives a [`MarqueeController`] one tick per conditioner clock edge.
pub struct TickHarness {
    controller: MarqueeController,
    conditioner: ClockConditioner,
    period_ns: u64,
    reset_asserted: bool,
    edge_index: u64,
    edges_gated: u64,
    transitions: Vec<Transition>,
    recorder: Option<Box<dyn TraceRecorder>>,
}

impl TickHarness {
    /// Creates a harness around a freshly constructed controller.
    ///
    /// The clock frequency is used only to timestamp trace samples; it has
    /// no effect on tick semantics.
    pub fn new(
        controller: MarqueeController,
        conditioner: ClockConditioner,
        clock_frequency: Frequency,
    ) -> Self {
        Self {
            controller,
            conditioner,
            period_ns: clock_frequency.period_ns().unwrap_or(1),
            reset_asserted: false,
            edge_index: 0,
            edges_gated: 0,
            transitions: Vec::new(),
            recorder: None,
        }
    }

    /// Attaches a trace recorder. Writes the trace header immediately.
    pub fn set_recorder(&mut self, mut recorder: Box<dyn TraceRecorder>) -> Result<(), SimError> {
        recorder.begin("marquee")?;
        self.recorder = Some(recorder);
        Ok(())
    }

    /// Drives the level-sensitive reset input.
    ///
    /// Asserting it forces the controller into the reset state right away
    /// and holds it there for as long as the level stays active.
    pub fn set_reset(&mut self, asserted: bool) -> Result<(), SimError> {
        self.reset_asserted = asserted;
        if asserted {
            self.controller.reset();
        }
        let locked = self.conditioner.is_locked(self.edge_index);
        self.record_sample(self.edge_index * self.period_ns, locked)
    }

    /// Delivers one clock edge.
    ///
    /// A reset held active supersedes tick processing for the edge. An edge
    /// arriving before conditioner lock is delivered with the stability
    /// flag low and leaves the controller untouched.
    pub fn step(&mut self) -> Result<(), SimError> {
        let locked = self.conditioner.is_locked(self.edge_index);
        let before = self.controller.current_pattern();

        if self.reset_asserted {
            self.controller.reset();
        } else {
            self.controller.on_tick(locked);
            if !locked {
                self.edges_gated += 1;
            }
        }

        let after = self.controller.current_pattern();
        if after != before {
            self.transitions.push(Transition {
                edge: self.edge_index,
                pattern: after,
            });
        }

        let time_ns = self.edge_index * self.period_ns;
        self.edge_index += 1;
        self.record_sample(time_ns, locked)
    }

    /// Delivers `ticks` clock edges.
    pub fn run(&mut self, ticks: u64) -> Result<(), SimError> {
        for _ in 0..ticks {
            self.step()?;
        }
        Ok(())
    }

    /// Finalizes any attached recorder and summarizes the run.
    pub fn finish(mut self) -> Result<HarnessResult, SimError> {
        if let Some(rec) = &mut self.recorder {
            rec.finalize()?;
        }
        Ok(HarnessResult {
            edges_delivered: self.edge_index,
            edges_gated: self.edges_gated,
            final_pattern: self.controller.current_pattern(),
            final_phase: self.controller.phase(),
            transitions: self.transitions,
        })
    }

    /// Read access to the controller under test.
    pub fn controller(&self) -> &MarqueeController {
        &self.controller
    }

    fn record_sample(&mut self, time_ns: u64, locked: bool) -> Result<(), SimError> {
        let sample = TraceSample {
            reset: self.reset_asserted,
            locked,
            phase: self.controller.phase(),
            pattern: self.controller.current_pattern(),
        };
        if let Some(rec) = &mut self.recorder {
            rec.record(time_ns, &sample)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::VcdRecorder;
    use marquee_core::DisplayMode;

    fn harness(mode: DisplayMode, conditioner: ClockConditioner) -> TickHarness {
        let controller = MarqueeController::with_interval_ticks(4, mode).unwrap();
        TickHarness::new(controller, conditioner, Frequency::new(4))
    }

    #[test]
    fn bypass_run_advances_normally() {
        let mut h = harness(DisplayMode::Scan, ClockConditioner::Bypass);
        h.run(8).unwrap();
        let result = h.finish().unwrap();
        assert_eq!(result.edges_delivered, 8);
        assert_eq!(result.edges_gated, 0);
        assert_eq!(result.final_phase, 2);
        assert_eq!(result.final_pattern.bits(), 0b0100);
    }

    #[test]
    fn pll_gates_early_edges() {
        let mut h = harness(
            DisplayMode::Scan,
            ClockConditioner::Pll { lock_cycles: 3 },
        );
        h.run(3).unwrap();
        assert_eq!(h.controller().tick_counter(), 0);
        assert_eq!(h.controller().current_pattern(), Pattern::OFF);

        // Locked from edge 3 on: the run proceeds as if freshly started
        h.run(4).unwrap();
        let result = h.finish().unwrap();
        assert_eq!(result.edges_gated, 3);
        assert_eq!(result.final_phase, 1);
    }

    #[test]
    fn reset_level_holds_controller() {
        let mut h = harness(DisplayMode::Blink, ClockConditioner::Bypass);
        h.run(5).unwrap();
        assert_ne!(h.controller().tick_counter(), 0);

        h.set_reset(true).unwrap();
        assert_eq!(h.controller().tick_counter(), 0);
        assert_eq!(h.controller().current_pattern(), Pattern::OFF);

        // Edges delivered during reset do not advance the machine
        h.run(10).unwrap();
        assert_eq!(h.controller().tick_counter(), 0);
        assert_eq!(h.controller().phase(), 0);

        // Releasing reset resumes counting from zero
        h.set_reset(false).unwrap();
        h.run(4).unwrap();
        assert_eq!(h.controller().phase(), 1);
        assert_eq!(h.controller().current_pattern(), Pattern::ALL_ON);
    }

    #[test]
    fn transitions_are_recorded_in_order() {
        let mut h = harness(DisplayMode::Scan, ClockConditioner::Bypass);
        h.run(9).unwrap();
        let result = h.finish().unwrap();
        // Edge 0 lights lane 0, edges 3 and 7 are interval boundaries
        let edges: Vec<u64> = result.transitions.iter().map(|t| t.edge).collect();
        assert_eq!(edges, vec![0, 3, 7]);
        assert_eq!(result.transitions[0].pattern.bits(), 0b0001);
        assert_eq!(result.transitions[1].pattern.bits(), 0b0010);
        assert_eq!(result.transitions[2].pattern.bits(), 0b0100);
    }

    #[test]
    fn gated_edges_produce_no_transitions() {
        let mut h = harness(
            DisplayMode::Blink,
            ClockConditioner::Pll { lock_cycles: 100 },
        );
        h.run(50).unwrap();
        let result = h.finish().unwrap();
        assert_eq!(result.edges_gated, 50);
        assert!(result.transitions.is_empty());
        assert_eq!(result.final_pattern, Pattern::OFF);
    }

    #[test]
    fn trace_records_lock_and_pattern_changes() {
        let controller =
            MarqueeController::with_interval_ticks(2, DisplayMode::Blink).unwrap();
        let mut h = TickHarness::new(
            controller,
            ClockConditioner::Pll { lock_cycles: 2 },
            Frequency::new(1_000_000),
        );
        let buf: Vec<u8> = Vec::new();
        h.set_recorder(Box::new(VcdRecorder::new(buf))).unwrap();
        h.run(6).unwrap();
        let _ = h.finish().unwrap();
    }

    #[test]
    fn trace_file_contents_via_shared_buffer() {
        use std::io::Write;
        use std::sync::{Arc, Mutex};

        #[derive(Clone)]
        struct SharedBuf(Arc<Mutex<Vec<u8>>>);
        impl Write for SharedBuf {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().write(buf)
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let shared = SharedBuf(Arc::new(Mutex::new(Vec::new())));
        let controller =
            MarqueeController::with_interval_ticks(2, DisplayMode::Blink).unwrap();
        let mut h = TickHarness::new(
            controller,
            ClockConditioner::Bypass,
            Frequency::new(1_000_000),
        );
        h.set_recorder(Box::new(VcdRecorder::new(shared.clone())))
            .unwrap();
        h.run(4).unwrap();
        let _ = h.finish().unwrap();

        let output = String::from_utf8(shared.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("$var wire 4 $ pattern $end"));
        // 1 MHz clock: edges land on microsecond boundaries
        assert!(output.contains("#1000"));
        // Blink turns all lanes on at the first interval boundary
        assert!(output.contains("b1111 $"));
    }
}
