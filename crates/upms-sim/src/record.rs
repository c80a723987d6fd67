//! Append-only records consumed by external tooling.
//!
//! - [`TraceEvent`]: the timestamped event log (arrival, setup, start,
//!   finish).  `Display` renders the human-readable line.
//! - [`ScheduleRecord`]: Gantt-chart intervals.  A record with `job = None`
//!   is a setup interval; it carries no due date.

use std::fmt;

use upms_core::{JobId, MachineId, SimTime, job_code};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TraceKind {
    Arrive,
    Setup,
    Start,
    Finish,
}

impl TraceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TraceKind::Arrive => "arrive",
            TraceKind::Setup  => "setup",
            TraceKind::Start  => "start",
            TraceKind::Finish => "finish",
        }
    }
}

impl fmt::Display for TraceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the event trace.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct TraceEvent {
    pub time:    SimTime,
    pub kind:    TraceKind,
    pub job:     JobId,
    /// `None` for arrivals.
    pub machine: Option<MachineId>,
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.machine) {
            (TraceKind::Arrive, _) | (_, None) => {
                write!(f, "{}: job {} {}.", self.time, self.job.0, self.kind)
            }
            (kind, Some(m)) => {
                write!(f, "{}: job {} {} at machine {}.", self.time, self.job.0, kind, m.0)
            }
        }
    }
}

/// One Gantt interval.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ScheduleRecord {
    pub machine:  MachineId,
    /// `None` marks a setup interval.
    pub job:      Option<JobId>,
    pub start:    SimTime,
    pub duration: f64,
    /// `None` for setup intervals.
    pub due_date: Option<f64>,
}

impl ScheduleRecord {
    pub fn is_setup(&self) -> bool {
        self.job.is_none()
    }

    /// Job id with `-1` for setup intervals, as external plotters expect.
    pub fn job_code(&self) -> i64 {
        job_code(self.job) as i64
    }

    /// Due date with `-1` for setup intervals.
    pub fn due_code(&self) -> f64 {
        self.due_date.unwrap_or(-1.0)
    }

    pub fn end(&self) -> SimTime {
        self.start.after(self.duration)
    }
}
