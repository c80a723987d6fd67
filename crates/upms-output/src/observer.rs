//! `EpisodeOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use upms_dispatch::DispatchRule;
use upms_sim::{EpisodeSummary, ScheduleRecord, SimObserver, StepOutcome, TraceEvent};

use crate::row::{ScheduleRow, StepRow, TraceRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes one step row per step and, at episode end,
/// the full schedule and trace.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `run_episode` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct EpisodeOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> EpisodeOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any).  `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for EpisodeOutputObserver<W> {
    fn on_step(&mut self, step: u64, rule: DispatchRule, outcome: &StepOutcome) {
        let result = self.writer.write_step(&StepRow::new(step, rule, outcome));
        self.store_err(result);
    }

    fn on_episode_end(
        &mut self,
        _summary: &EpisodeSummary,
        schedule: &[ScheduleRecord],
        trace:    &[TraceEvent],
    ) {
        let rows: Vec<ScheduleRow> = schedule.iter().map(ScheduleRow::from).collect();
        let result = self.writer.write_schedule(&rows);
        self.store_err(result);

        if !trace.is_empty() {
            let rows: Vec<TraceRow> = trace.iter().map(TraceRow::from).collect();
            let result = self.writer.write_trace(&rows);
            self.store_err(result);
        }

        let result = self.writer.finish();
        self.store_err(result);
    }
}
