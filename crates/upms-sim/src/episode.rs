//! `Episode` — one simulation run: the engine plus every entity it drives.

use std::sync::Arc;

use tracing::trace;
use upms_core::{Instance, SetupMatrix, SimTime};
use upms_dispatch::DispatchRule;
use upms_engine::{Engine, Handler, RunOutcome};

use crate::observation::{JobView, MachineView};
use crate::{ArrivalSource, Coordinator, JobQueue, Machine, Observation, SimEvent, SimResult, Sink, World};

// ── Shop ──────────────────────────────────────────────────────────────────────

/// All entity state.  Kept apart from the engine so the run loop can lend
/// `&mut Engine` and `&mut Shop` at the same time.
#[derive(Debug)]
pub struct Shop {
    pub world:       World,
    pub source:      ArrivalSource,
    pub queue:       JobQueue,
    pub machines:    Vec<Machine>,
    pub coordinator: Coordinator,
    pub sink:        Sink,
}

impl Handler<SimEvent> for Shop {
    fn handle(&mut self, engine: &mut Engine<SimEvent>, event: SimEvent) {
        trace!(now = %engine.now(), ?event, "handle");
        match event {
            SimEvent::ArrivalBatch => {
                self.source.emit_batch(engine, &mut self.world, &mut self.queue);
                self.coordinator.check_dispatch(
                    engine,
                    &mut self.world,
                    &mut self.queue,
                    &mut self.machines,
                );
            }

            SimEvent::SetupDone(m) => {
                self.machines[m.index()].finish_setup(engine, &mut self.world);
            }

            SimEvent::ProcessDone(m) => {
                if let Some(job) = self.machines[m.index()].finish_processing(engine, &mut self.world) {
                    self.sink.finish(job, engine, &mut self.world);
                }
                // An arrival batch due this instant will run its own check;
                // dispatching now would race it with half the batch missing.
                if self.world.next_arrival != engine.now() {
                    self.coordinator.check_dispatch(
                        engine,
                        &mut self.world,
                        &mut self.queue,
                        &mut self.machines,
                    );
                }
            }
        }
    }
}

// ── Episode ───────────────────────────────────────────────────────────────────

/// Create via [`EpisodeBuilder`][crate::EpisodeBuilder].
#[derive(Debug)]
pub struct Episode {
    pub engine: Engine<SimEvent>,
    pub shop:   Shop,
    pub(crate) instance: Arc<Instance>,
    pub(crate) setup:    Arc<SetupMatrix>,
}

impl Episode {
    /// Run until a decision point or the terminal signal is delivered.
    pub fn run_to_decision(&mut self) -> RunOutcome {
        let halt = [
            self.shop.world.decision.current(),
            self.shop.world.finished.current(),
        ];
        self.engine.run_until(&mut self.shop, &halt)
    }

    /// Apply `rule` to every eligible idle machine.
    pub fn dispatch(&mut self, rule: DispatchRule) -> SimResult<usize> {
        let shop = &mut self.shop;
        shop.coordinator.dispatch(
            rule,
            &mut self.engine,
            &mut shop.world,
            &mut shop.queue,
            &mut shop.machines,
        )
    }

    pub fn now(&self) -> SimTime {
        self.engine.now()
    }

    pub fn is_terminal(&self) -> bool {
        self.shop.world.terminal
    }

    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    /// Largest machine-available-time across all machines.
    pub fn max_available_at(&self) -> f64 {
        self.shop
            .machines
            .iter()
            .map(|m| m.available_at.0)
            .fold(0.0, f64::max)
    }

    pub fn observe(&self) -> Observation {
        let now = self.engine.now();
        let world = &self.shop.world;

        let jobs = self
            .instance
            .jobs
            .iter()
            .enumerate()
            .map(|(i, spec)| JobView {
                id:           upms_core::JobId(i as u32),
                arrival_time: spec.arrival_time,
                processing:   spec.processing.clone(),
                due_date:     spec.due_date,
                status:       world.job_status[i],
            })
            .collect();

        let machines = self
            .shop
            .machines
            .iter()
            .map(|m| MachineView {
                id:             m.id,
                available_at:   m.available_at.0,
                last_completed: m.last_completed,
                in_service:     m.in_service(),
                since_setup:    m.last_setup_end.map_or(0.0, |t| now.since(t)),
            })
            .collect();

        Observation {
            now,
            jobs,
            machines,
            setup:  Arc::clone(&self.setup),
            queued: self.shop.queue.ids().collect(),
        }
    }
}
