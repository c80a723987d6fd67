//! `upms-sim` — the factory model and its reset/step controller.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`world`]       | `World` (shared counters, statuses, notifiers, records)    |
//! | [`queue`]       | `JobQueue` — insertion-ordered buffer of arrived jobs      |
//! | [`arrival`]     | `ArrivalSource` — releases jobs in same-time batches       |
//! | [`machine`]     | `Machine` — Idle → SettingUp → Processing → Idle           |
//! | [`coordinator`] | `Coordinator` — auto-assign or raise a decision point      |
//! | [`sink`]        | `Sink` — counts completions, raises termination            |
//! | [`episode`]     | `Episode` (engine + `Shop`), the event handler             |
//! | [`builder`]     | `EpisodeBuilder` — validation and wiring                   |
//! | [`sim`]         | `Factory` controller, `StepOutcome`, `Transition`          |
//! | [`observation`] | `Observation` views and `to_matrices`                      |
//! | [`policy`]      | `SequencingPolicy`, `FixedRule`, `run_episode`             |
//! | [`observer`]    | `SimObserver` callbacks                                    |
//! | [`record`]      | `TraceEvent`, `ScheduleRecord`                             |
//!
//! # Event flow
//!
//! ```text
//! ArrivalBatch   enqueue every job due now → schedule next batch → check_dispatch
//! SetupDone(m)   machine m starts processing
//! ProcessDone(m) machine m idles → sink → check_dispatch (unless a batch is due now)
//!
//! check_dispatch: idle machine + 1 queued job  → assign it
//!                 idle machine + ≥2 queued jobs → fire decision, stop scanning
//! ```
//!
//! The controller runs the engine until the decision or terminal signal is
//! delivered; `step(action)` then dispatches with the chosen rule and resumes.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use upms_core::{SimConfig, load_instance};
//! use upms_dispatch::DispatchRule;
//! use upms_sim::{Factory, FixedRule, NoopObserver, run_episode};
//!
//! let instance = load_instance("jobs.csv", "setup.csv")?;
//! let mut factory = Factory::new(SimConfig::default());
//! let summary = run_episode(&mut factory, instance, &mut FixedRule(DispatchRule::Spt), &mut NoopObserver)?;
//! ```

pub mod arrival;
pub mod builder;
pub mod coordinator;
pub mod episode;
pub mod error;
pub mod event;
pub mod machine;
pub mod observation;
pub mod observer;
pub mod policy;
pub mod queue;
pub mod record;
pub mod sim;
pub mod sink;
pub mod world;


pub use arrival::ArrivalSource;
pub use builder::EpisodeBuilder;
pub use coordinator::Coordinator;
pub use episode::{Episode, Shop};
pub use error::{SimError, SimResult};
pub use event::SimEvent;
pub use machine::{Machine, MachineStatus};
pub use observation::{JobView, MachineView, Matrices, Observation};
pub use observer::{NoopObserver, SimObserver};
pub use policy::{EpisodeSummary, FixedRule, SequencingPolicy, run_episode};
pub use queue::JobQueue;
pub use record::{ScheduleRecord, TraceEvent, TraceKind};
pub use sim::{Factory, StepOutcome, Transition};
pub use sink::Sink;
pub use world::{JobStatus, World};
