use super::hill_climber::{ProgressCallback, StepOutcome};
use crate::types::Snapshot;
use std::io::Write;

/// Prints `+` for every accepted candidate and `.` every `interval` iterations.
pub struct ConsoleProgressCallback<W: Write + Send> {
    out: W,
    interval: usize,
}

impl ConsoleProgressCallback<std::io::Stderr> {
    pub fn stderr(interval: usize) -> Self {
        Self::new(std::io::stderr(), interval)
    }
}

impl<W: Write + Send> ConsoleProgressCallback<W> {
    pub fn new(out: W, interval: usize) -> Self {
        Self {
            out,
            interval: interval.max(1),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> ProgressCallback for ConsoleProgressCallback<W> {
    fn on_start(&mut self, _first: &Snapshot) {}

    fn on_iteration(&mut self, iteration: usize, outcome: &StepOutcome) {
        // progress markers are cosmetic; a closed terminal must not stop the run
        if outcome.accepted {
            let _ = self.out.write_all(b"+");
        }
        if iteration % self.interval == 0 {
            let _ = self.out.write_all(b".");
            let _ = self.out.flush();
        }
    }

    fn on_finish(&mut self, _last: &Snapshot) {
        let _ = self.out.write_all(b"\n");
        let _ = self.out.flush();
    }
}

/// Quiet mode.
pub struct SilentProgressCallback;

impl ProgressCallback for SilentProgressCallback {
    fn on_start(&mut self, _first: &Snapshot) {}
    fn on_iteration(&mut self, _iteration: usize, _outcome: &StepOutcome) {}
    fn on_finish(&mut self, _last: &Snapshot) {}
}
