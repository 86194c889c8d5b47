//! Trace recording for harness runs.
//!
//! The [`TraceRecorder`] trait abstracts trace output. [`VcdRecorder`]
//! implements the IEEE 1364 Value Change Dump (VCD) format, producing text
//! files viewable in GTKWave, Surfer, or other waveform viewers.

use std::io::Write;

use marquee_core::Pattern;

use crate::error::SimError;

/// One observation of the harness signals at a point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceSample {
    /// Whether the reset input is asserted.
    pub reset: bool,
    /// Whether the clock conditioner reports lock.
    pub locked: bool,
    /// The controller's 2-bit phase register.
    pub phase: u8,
    /// The controller's 4-bit output pattern.
    pub pattern: Pattern,
}

/// Trait for recording harness traces.
///
/// Implementations write signal changes to a particular format.
pub trait TraceRecorder {
    /// Writes any header material and declares the traced signals under the
    /// given scope name. Called once before the first sample.
    fn begin(&mut self, scope: &str) -> Result<(), SimError>;

    /// Records a sample at the given time in nanoseconds. Implementations
    /// may elide samples in which no signal changed.
    fn record(&mut self, time_ns: u64, sample: &TraceSample) -> Result<(), SimError>;

    /// Finalizes the output (flush, write trailer, etc.).
    fn finalize(&mut self) -> Result<(), SimError>;
}

// VCD identifier codes for the four traced signals.
const ID_RESET: char = '!';
const ID_LOCKED: char = '"';
const ID_PHASE: char = '#';
const ID_PATTERN: char = '$';

/// VCD (Value Change Dump) format recorder following IEEE 1364.
///
/// Traces four signals: `rst` (1 bit), `locked` (1 bit), `phase` (2 bits),
/// and `pattern` (4 bits). Timestamps are in nanoseconds. Only changed
/// signals are emitted after the initial dump.
pub struct VcdRecorder<W: Write> {
    writer: W,
    current_time: Option<u64>,
    last: Option<TraceSample>,
}

impl<W: Write> VcdRecorder<W> {
    /// Creates a new VCD recorder writing to the given output.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            current_time: None,
            last: None,
        }
    }

    fn emit_time(&mut self, time_ns: u64) -> Result<(), SimError> {
        if self.current_time != Some(time_ns) {
            writeln!(self.writer, "#{time_ns}")?;
            self.current_time = Some(time_ns);
        }
        Ok(())
    }

    fn emit_bit(&mut self, value: bool, id: char) -> Result<(), SimError> {
        writeln!(self.writer, "{}{id}", if value { '1' } else { '0' })?;
        Ok(())
    }

    fn emit_vector(&mut self, value: u8, width: u32, id: char) -> Result<(), SimError> {
        write!(self.writer, "b")?;
        for bit in (0..width).rev() {
            write!(self.writer, "{}", (value >> bit) & 1)?;
        }
        writeln!(self.writer, " {id}")?;
        Ok(())
    }
}

impl<W: Write> TraceRecorder for VcdRecorder<W> {
    fn begin(&mut self, scope: &str) -> Result<(), SimError> {
        writeln!(self.writer, "$date")?;
        writeln!(self.writer, "  Harness trace")?;
        writeln!(self.writer, "$end")?;
        writeln!(self.writer, "$version")?;
        writeln!(self.writer, "  Marquee tick harness")?;
        writeln!(self.writer, "$end")?;
        writeln!(self.writer, "$timescale")?;
        writeln!(self.writer, "  1ns")?;
        writeln!(self.writer, "$end")?;
        writeln!(self.writer, "$scope module {scope} $end")?;
        writeln!(self.writer, "$var wire 1 {ID_RESET} rst $end")?;
        writeln!(self.writer, "$var wire 1 {ID_LOCKED} locked $end")?;
        writeln!(self.writer, "$var wire 2 {ID_PHASE} phase $end")?;
        writeln!(self.writer, "$var wire 4 {ID_PATTERN} pattern $end")?;
        writeln!(self.writer, "$upscope $end")?;
        writeln!(self.writer, "$enddefinitions $end")?;
        writeln!(self.writer, "$dumpvars")?;
        Ok(())
    }

    fn record(&mut self, time_ns: u64, sample: &TraceSample) -> Result<(), SimError> {
        let last = self.last;
        if last == Some(*sample) {
            return Ok(());
        }

        self.emit_time(time_ns)?;
        if last.map(|l| l.reset) != Some(sample.reset) {
            self.emit_bit(sample.reset, ID_RESET)?;
        }
        if last.map(|l| l.locked) != Some(sample.locked) {
            self.emit_bit(sample.locked, ID_LOCKED)?;
        }
        if last.map(|l| l.phase) != Some(sample.phase) {
            self.emit_vector(sample.phase, 2, ID_PHASE)?;
        }
        if last.map(|l| l.pattern) != Some(sample.pattern) {
            self.emit_vector(sample.pattern.bits(), 4, ID_PATTERN)?;
        }
        self.last = Some(*sample);
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), SimError> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(locked: bool, phase: u8, pattern: u8) -> TraceSample {
        TraceSample {
            reset: false,
            locked,
            phase,
            pattern: Pattern::new(pattern),
        }
    }

    fn make_recorder() -> VcdRecorder<Vec<u8>> {
        VcdRecorder::new(Vec::new())
    }

    #[test]
    fn header_declares_all_signals() {
        let mut rec = make_recorder();
        rec.begin("marquee").unwrap();
        rec.finalize().unwrap();

        let output = String::from_utf8(rec.writer).unwrap();
        assert!(output.contains("$timescale"));
        assert!(output.contains("1ns"));
        assert!(output.contains("$scope module marquee $end"));
        assert!(output.contains("$var wire 1 ! rst $end"));
        assert!(output.contains("$var wire 1 \" locked $end"));
        assert!(output.contains("$var wire 2 # phase $end"));
        assert!(output.contains("$var wire 4 $ pattern $end"));
        assert!(output.contains("$enddefinitions $end"));
        assert!(output.contains("$dumpvars"));
    }

    #[test]
    fn first_sample_dumps_every_signal() {
        let mut rec = make_recorder();
        rec.begin("marquee").unwrap();
        rec.record(0, &sample(true, 0, 0b0001)).unwrap();
        rec.finalize().unwrap();

        let output = String::from_utf8(rec.writer).unwrap();
        assert!(output.contains("#0"));
        assert!(output.contains("0!"));
        assert!(output.contains("1\""));
        assert!(output.contains("b00 #"));
        assert!(output.contains("b0001 $"));
    }

    #[test]
    fn unchanged_samples_are_elided() {
        let mut rec = make_recorder();
        rec.begin("marquee").unwrap();
        rec.record(0, &sample(true, 0, 0b0001)).unwrap();
        let len_before = rec.writer.len();
        rec.record(250, &sample(true, 0, 0b0001)).unwrap();
        assert_eq!(rec.writer.len(), len_before);
    }

    #[test]
    fn only_changed_signals_are_emitted() {
        let mut rec = make_recorder();
        rec.begin("marquee").unwrap();
        rec.record(0, &sample(true, 0, 0b0001)).unwrap();
        rec.record(250, &sample(true, 1, 0b0010)).unwrap();
        rec.finalize().unwrap();

        let output = String::from_utf8(rec.writer).unwrap();
        let after = output.split("#250").nth(1).unwrap();
        assert!(after.contains("b01 #"));
        assert!(after.contains("b0010 $"));
        // locked did not change at 250 ns
        assert!(!after.contains('"'));
    }

    #[test]
    fn timestamps_are_monotone_in_output() {
        let mut rec = make_recorder();
        rec.begin("marquee").unwrap();
        rec.record(0, &sample(false, 0, 0)).unwrap();
        rec.record(250, &sample(true, 0, 0)).unwrap();
        rec.record(500, &sample(true, 0, 0b0001)).unwrap();
        rec.finalize().unwrap();

        let output = String::from_utf8(rec.writer).unwrap();
        let p0 = output.find("#0\n").unwrap();
        let p250 = output.find("#250").unwrap();
        let p500 = output.find("#500").unwrap();
        assert!(p0 < p250 && p250 < p500);
    }
}
