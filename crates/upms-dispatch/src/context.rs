//! `RuleContext` — what a rule may know besides the buffer.

use upms_core::{JobId, MachineId, SimTime};

/// Read-only snapshot for one selection on one machine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RuleContext {
    /// Current virtual time.
    pub now:            SimTime,
    /// The idle machine the job will be loaded onto.
    pub machine:        MachineId,
    /// Job most recently completed on `machine`, if any.
    pub last_completed: Option<JobId>,
}

impl RuleContext {
    pub fn new(now: SimTime, machine: MachineId, last_completed: Option<JobId>) -> Self {
        Self { now, machine, last_completed }
    }
}
