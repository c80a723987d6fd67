//! `Factory` — the reset/step controller.
//!
//! `reset` builds a fresh [`Episode`] and runs it to the first decision
//! point (or straight to termination).  `step` applies one dispatch rule to
//! every eligible idle machine and resumes until the next halt.

use std::mem;

use tracing::{debug, info, warn};
use upms_core::{Instance, JobSpec, SetupMatrix, SimConfig, SimTime};
use upms_dispatch::DispatchRule;
use upms_engine::RunOutcome;

use crate::{Episode, EpisodeBuilder, Observation, ScheduleRecord, SimError, SimResult, TraceEvent};

/// Result of one [`Factory::step`].
#[derive(Clone, Debug, PartialEq)]
pub struct StepOutcome {
    pub observation:        Observation,
    /// Zero unless this step reached termination.
    pub reward:             f64,
    pub done:               bool,
    /// Sum of per-assignment gains since the previous step.  Informational.
    pub incremental_reward: f64,
}

/// One recorded `(state, action, reward, next state)` tuple.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub before: Observation,
    pub action: DispatchRule,
    pub reward: f64,
    pub after:  Observation,
    pub done:   bool,
}

pub struct Factory {
    config:        SimConfig,
    episode:       Option<Episode>,
    steps:         u64,
    done_reported: bool,
    transitions:   Vec<Transition>,
}

impl Factory {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            episode:       None,
            steps:         0,
            done_reported: false,
            transitions:   Vec::new(),
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    // ── Control contract ─────────────────────────────────────────────────

    /// Start a new episode from raw tables.  `job_count` and `machine_count`
    /// are checked against the shapes of `jobs` and `setup`.
    pub fn reset(
        &mut self,
        job_count:     usize,
        machine_count: usize,
        jobs:          Vec<JobSpec>,
        setup:         SetupMatrix,
    ) -> SimResult<Observation> {
        if jobs.len() != job_count {
            return Err(SimError::DimensionMismatch {
                expected: job_count,
                got:      jobs.len(),
                what:     "job list",
            });
        }
        self.reset_instance(Instance::new(machine_count, jobs, setup))
    }

    pub fn reset_instance(&mut self, instance: Instance) -> SimResult<Observation> {
        info!(
            jobs = instance.job_count(),
            machines = instance.machine_count,
            "reset"
        );
        let mut episode = EpisodeBuilder::new(instance)
            .record_trace(self.config.record_trace)
            .build()?;
        let outcome = episode.run_to_decision();
        debug!(now = %episode.now(), ?outcome, "first halt");

        self.steps = 0;
        self.done_reported = false;
        self.transitions.clear();
        let observation = episode.observe();
        self.episode = Some(episode);
        Ok(observation)
    }

    /// Apply the rule with action code `action` (0–6).
    pub fn step(&mut self, action: i64) -> SimResult<StepOutcome> {
        let rule = DispatchRule::try_from(action)?;
        self.step_rule(rule)
    }

    pub fn step_rule(&mut self, rule: DispatchRule) -> SimResult<StepOutcome> {
        if self.done_reported {
            return Err(SimError::EpisodeFinished);
        }
        let scale = self.config.terminal_reward_scale;
        let record = self.config.record_transitions;
        let episode = self.episode.as_mut().ok_or(SimError::NotReset)?;

        let before = record.then(|| episode.observe());

        let assigned = episode.dispatch(rule)?;
        let outcome = episode.run_to_decision();
        if outcome == RunOutcome::Exhausted && !episode.is_terminal() {
            return Err(SimError::Stalled { now: episode.now() });
        }

        let done = episode.is_terminal();
        let reward = if done { terminal_reward(episode, scale) } else { 0.0 };
        let incremental_reward = mem::take(&mut episode.shop.world.step_reward);
        let observation = episode.observe();

        self.steps += 1;
        self.done_reported = done;
        debug!(step = self.steps, %rule, assigned, reward, done, now = %episode.now(), "step");

        if let Some(before) = before {
            self.transitions.push(Transition {
                before,
                action: rule,
                reward,
                after: observation.clone(),
                done,
            });
        }

        Ok(StepOutcome {
            observation,
            reward,
            done,
            incremental_reward,
        })
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn observe(&self) -> SimResult<Observation> {
        Ok(self.episode()?.observe())
    }

    pub fn episode(&self) -> SimResult<&Episode> {
        self.episode.as_ref().ok_or(SimError::NotReset)
    }

    /// Steps taken since the last reset.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn is_done(&self) -> bool {
        self.episode.as_ref().is_some_and(Episode::is_terminal)
    }

    /// Completion time of the last job, once the episode has terminated.
    pub fn makespan(&self) -> Option<SimTime> {
        self.episode.as_ref().and_then(|e| e.shop.world.makespan)
    }

    pub fn trace(&self) -> &[TraceEvent] {
        self.episode
            .as_ref()
            .map(|e| e.shop.world.trace.as_slice())
            .unwrap_or_default()
    }

    pub fn schedule(&self) -> &[ScheduleRecord] {
        self.episode
            .as_ref()
            .map(|e| e.shop.world.schedule.as_slice())
            .unwrap_or_default()
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }
}

fn terminal_reward(episode: &Episode, scale: f64) -> f64 {
    let latest = episode.max_available_at();
    if latest > 0.0 {
        scale / latest
    } else {
        warn!("all machines finished at t=0; terminal reward is 0");
        0.0
    }
}
