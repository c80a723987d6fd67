//! `upms-output` — episode output writers for the upms simulator.
//!
//! | File            | Columns                                               |
//! |-----------------|-------------------------------------------------------|
//! | `schedule.csv`  | `machine_id,job_id,start_time,duration,due_date`      |
//! | `trace.csv`     | `time,kind,job_id,machine_id`                         |
//! | `steps.csv`     | `step,action,reward,done,incremental_reward`          |
//!
//! In `schedule.csv` a `job_id` of `-1` marks a setup interval (its
//! `due_date` is `-1` too).  In `trace.csv` arrivals carry `machine_id = -1`.
//!
//! [`CsvWriter`] implements [`OutputWriter`] and is driven by
//! [`EpisodeOutputObserver`], which implements `upms_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use upms_output::{CsvWriter, EpisodeOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = EpisodeOutputObserver::new(writer);
//! run_episode(&mut factory, instance, &mut policy, &mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::EpisodeOutputObserver;
pub use row::{ScheduleRow, StepRow, TraceRow};
pub use writer::OutputWriter;
