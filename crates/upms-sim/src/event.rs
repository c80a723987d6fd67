//! Continuation events resumed by the engine.

use upms_core::MachineId;

/// A suspended entity waking up.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SimEvent {
    /// The arrival source reached its next arrival timestamp.
    ArrivalBatch,
    /// A machine finished its setup interval.
    SetupDone(MachineId),
    /// A machine finished processing its loaded job.
    ProcessDone(MachineId),
}
