//! Builder for an [`Episode`].

use std::sync::Arc;

use upms_core::{Instance, MachineId};
use upms_engine::Engine;

use crate::episode::Shop;
use crate::{ArrivalSource, Coordinator, Episode, JobQueue, Machine, SimError, SimResult, Sink, World};

/// Validates an [`Instance`] against its declared dimensions and wires up
/// the world, the entities and the engine.
///
/// Only shapes are checked (job count, per-job machine count, setup matrix
/// side).  Arrival order and non-negative durations are the loader's job.
///
/// # Example
///
/// ```rust,ignore
/// let mut episode = EpisodeBuilder::new(instance).record_trace(false).build()?;
/// episode.run_to_decision();
/// ```
pub struct EpisodeBuilder {
    instance:     Instance,
    record_trace: bool,
}

impl EpisodeBuilder {
    pub fn new(instance: Instance) -> Self {
        Self {
            instance,
            record_trace: true,
        }
    }

    /// Keep the textual event trace (default `true`).
    pub fn record_trace(mut self, on: bool) -> Self {
        self.record_trace = on;
        self
    }

    /// Validate inputs and return an episode positioned at time zero with
    /// the first arrival scheduled.
    pub fn build(self) -> SimResult<Episode> {
        let instance = self.instance;
        let n = instance.job_count();
        let m = instance.machine_count;

        if n == 0 {
            return Err(SimError::Config("instance has no jobs".into()));
        }
        if m == 0 {
            return Err(SimError::Config("instance has no machines".into()));
        }
        for job in &instance.jobs {
            if job.processing.len() != m {
                return Err(SimError::DimensionMismatch {
                    expected: m,
                    got:      job.processing.len(),
                    what:     "processing-time vector",
                });
            }
        }
        if instance.setup.size() != n {
            return Err(SimError::DimensionMismatch {
                expected: n,
                got:      instance.setup.size(),
                what:     "setup matrix side",
            });
        }
        if !instance.setup.is_square() {
            return Err(SimError::Config("setup matrix is not square".into()));
        }

        let setup = Arc::new(instance.setup.clone());
        let instance = Arc::new(instance);

        let mut engine = Engine::new();
        let world = World::new(n, instance.arrival_at(0), self.record_trace, &mut engine);

        let source = ArrivalSource::new(Arc::clone(&instance));
        source.start(&mut engine);

        let machines = (0..m as u32).map(|i| Machine::new(MachineId(i))).collect();

        Ok(Episode {
            engine,
            shop: Shop {
                world,
                source,
                queue: JobQueue::new(),
                machines,
                coordinator: Coordinator::new(),
                sink: Sink::new(n),
            },
            instance,
            setup,
        })
    }
}
