//! Sequencing policies and the episode runner.
//!
//! A [`SequencingPolicy`] is whatever picks the dispatch rule at a decision
//! point: a learning agent, a fixed heuristic, a scripted sequence.  The
//! simulator only needs `choose`.

use upms_core::{Instance, SimTime};
use upms_dispatch::DispatchRule;

use crate::{Factory, Observation, SimObserver, SimResult};

pub trait SequencingPolicy {
    fn choose(&mut self, observation: &Observation) -> DispatchRule;
}

/// Always answers with the same rule.
#[derive(Copy, Clone, Debug)]
pub struct FixedRule(pub DispatchRule);

impl SequencingPolicy for FixedRule {
    fn choose(&mut self, _observation: &Observation) -> DispatchRule {
        self.0
    }
}

impl<F> SequencingPolicy for F
where
    F: FnMut(&Observation) -> DispatchRule,
{
    fn choose(&mut self, observation: &Observation) -> DispatchRule {
        self(observation)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EpisodeSummary {
    pub makespan:     Option<SimTime>,
    pub steps:        u64,
    /// Sum of the rewards returned by every step.
    pub total_reward: f64,
}

/// Reset `factory` with `instance` and step with `policy` until done.
pub fn run_episode<P, O>(
    factory:  &mut Factory,
    instance: Instance,
    policy:   &mut P,
    observer: &mut O,
) -> SimResult<EpisodeSummary>
where
    P: SequencingPolicy + ?Sized,
    O: SimObserver + ?Sized,
{
    let mut observation = factory.reset_instance(instance)?;
    observer.on_reset(&observation);

    let mut total_reward = 0.0;
    loop {
        let rule = policy.choose(&observation);
        let outcome = factory.step_rule(rule)?;
        total_reward += outcome.reward;
        observer.on_step(factory.steps(), rule, &outcome);
        if outcome.done {
            break;
        }
        observation = outcome.observation;
    }

    let summary = EpisodeSummary {
        makespan: factory.makespan(),
        steps:    factory.steps(),
        total_reward,
    };
    observer.on_episode_end(&summary, factory.schedule(), factory.trace());
    Ok(summary)
}
