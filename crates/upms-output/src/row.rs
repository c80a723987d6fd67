//! Plain data row types written by output backends.

use upms_dispatch::DispatchRule;
use upms_sim::{ScheduleRecord, StepOutcome, TraceEvent};

/// One Gantt interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleRow {
    pub machine_id: u32,
    /// `-1` for a setup interval.
    pub job_id:     i64,
    pub start_time: f64,
    pub duration:   f64,
    /// `-1` for a setup interval.
    pub due_date:   f64,
}

impl From<&ScheduleRecord> for ScheduleRow {
    fn from(r: &ScheduleRecord) -> Self {
        Self {
            machine_id: r.machine.0,
            job_id:     r.job_code(),
            start_time: r.start.0,
            duration:   r.duration,
            due_date:   r.due_code(),
        }
    }
}

/// One trace event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceRow {
    pub time:       f64,
    pub kind:       &'static str,
    pub job_id:     u32,
    /// `-1` for arrivals.
    pub machine_id: i64,
}

impl From<&TraceEvent> for TraceRow {
    fn from(e: &TraceEvent) -> Self {
        Self {
            time:       e.time.0,
            kind:       e.kind.as_str(),
            job_id:     e.job.0,
            machine_id: e.machine.map_or(-1, |m| i64::from(m.0)),
        }
    }
}

/// Summary of one controller step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRow {
    pub step:               u64,
    /// Action code of the applied rule (0–6).
    pub action:             u8,
    pub reward:             f64,
    pub done:               bool,
    pub incremental_reward: f64,
}

impl StepRow {
    pub fn new(step: u64, rule: DispatchRule, outcome: &StepOutcome) -> Self {
        Self {
            step,
            action:             rule.code(),
            reward:             outcome.reward,
            done:               outcome.done,
            incremental_reward: outcome.incremental_reward,
        }
    }
}
