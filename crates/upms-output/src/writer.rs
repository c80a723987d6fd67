//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, ScheduleRow, StepRow, TraceRow};

/// Trait implemented by output backends.
///
/// Errors are returned to the caller; [`EpisodeOutputObserver`] stores the
/// first one for retrieval with
/// [`take_error`][crate::EpisodeOutputObserver::take_error].
///
/// [`EpisodeOutputObserver`]: crate::EpisodeOutputObserver
pub trait OutputWriter {
    fn write_step(&mut self, row: &StepRow) -> OutputResult<()>;

    /// Write a batch of schedule intervals.
    fn write_schedule(&mut self, rows: &[ScheduleRow]) -> OutputResult<()>;

    /// Write a batch of trace events.
    fn write_trace(&mut self, rows: &[TraceRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
