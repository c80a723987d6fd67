//! `upms-core` — foundational types for the `upms` unrelated-parallel-machine
//! scheduling simulator.
//!
//! This crate is a dependency of every other `upms-*` crate.  It has no
//! `upms-*` dependencies and minimal external ones (`thiserror`, plus `csv`
//! and `serde` for the instance loader).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `JobId`, `MachineId`                                  |
//! | [`time`]        | `SimTime`, `SimConfig`                                |
//! | [`job`]         | `Job` (runtime record), `JobSpec` (input row)         |
//! | [`instance`]    | `Instance`, `SetupMatrix`                             |
//! | [`loader`]      | `load_instance`, `load_instance_readers`              |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` derives to ids, time, config. |

pub mod error;
pub mod ids;
pub mod instance;
pub mod job;
pub mod loader;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{JobId, MachineId, job_code};
pub use instance::{Instance, SetupMatrix};
pub use job::{Job, JobSpec};
pub use loader::{load_instance, load_instance_readers};
pub use time::{SimConfig, SimTime};
