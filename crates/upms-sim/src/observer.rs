//! Episode observer trait for progress reporting and data collection.

use upms_dispatch::DispatchRule;

use crate::{EpisodeSummary, Observation, ScheduleRecord, StepOutcome, TraceEvent};

/// Callbacks invoked by [`run_episode`][crate::run_episode] at key points of
/// an episode.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — step printer
///
/// ```rust,ignore
/// struct StepPrinter;
///
/// impl SimObserver for StepPrinter {
///     fn on_step(&mut self, step: u64, rule: DispatchRule, outcome: &StepOutcome) {
///         println!("step {step}: {rule} at t={}", outcome.observation.now);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once after `reset` with the initial observation.
    fn on_reset(&mut self, _observation: &Observation) {}

    /// Called after every step.  `step` counts from 1.
    fn on_step(&mut self, _step: u64, _rule: DispatchRule, _outcome: &StepOutcome) {}

    /// Called once when a step reports `done`, with the full records of the
    /// episode.
    fn on_episode_end(
        &mut self,
        _summary:  &EpisodeSummary,
        _schedule: &[ScheduleRecord],
        _trace:    &[TraceEvent],
    ) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
