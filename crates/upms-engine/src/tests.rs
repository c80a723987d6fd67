//! Unit tests for upms-engine.

use upms_core::SimTime;

use crate::{Engine, Handler};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Records `(time, label)` for every event it receives.
#[derive(Default)]
struct Recorder {
    seen: Vec<(f64, &'static str)>,
}

impl Handler<&'static str> for Recorder {
    fn handle(&mut self, engine: &mut Engine<&'static str>, event: &'static str) {
        self.seen.push((engine.now().0, event));
    }
}

fn labels(r: &Recorder) -> Vec<&'static str> {
    r.seen.iter().map(|&(_, l)| l).collect()
}

// ── EventQueue ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod event_queue {
    use super::*;
    use crate::EventQueue;

    #[test]
    fn pops_in_time_order() {
        let mut q = EventQueue::new();
        q.push(SimTime(5.0), "late");
        q.push(SimTime(1.0), "early");
        q.push(SimTime(3.0), "middle");
        assert_eq!(q.next_time(), Some(SimTime(1.0)));
        let order: Vec<_> = std::iter::from_fn(|| q.pop()).map(|(_, v)| v).collect();
        assert_eq!(order, vec!["early", "middle", "late"]);
        assert!(q.is_empty());
    }

    #[test]
    fn equal_times_pop_in_submission_order() {
        let mut q = EventQueue::new();
        for label in ["a", "b", "c", "d"] {
            q.push(SimTime(2.0), label);
        }
        q.push(SimTime(1.0), "first");
        let order: Vec<_> = std::iter::from_fn(|| q.pop()).map(|(_, v)| v).collect();
        assert_eq!(order, vec!["first", "a", "b", "c", "d"]);
    }

    #[test]
    fn keys_carry_increasing_sequence() {
        let mut q = EventQueue::new();
        let k0 = q.push(SimTime(1.0), ());
        let k1 = q.push(SimTime(1.0), ());
        assert!(k0 < k1);
        assert_eq!(q.len(), 2);
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod engine {
    use super::*;
    use crate::{Notifier, RunOutcome};

    #[test]
    fn advance_moves_clock() {
        let mut engine = Engine::new();
        engine.advance(4.0, "b");
        engine.advance(1.5, "a");
        let mut rec = Recorder::default();
        assert_eq!(engine.run(&mut rec), RunOutcome::Exhausted);
        assert_eq!(rec.seen, vec![(1.5, "a"), (4.0, "b")]);
        assert_eq!(engine.now(), SimTime(4.0));
        assert_eq!(engine.processed(), 2);
    }

    #[test]
    fn awaiting_entity_resumes_on_fire() {
        let mut engine = Engine::new();
        let mut n = Notifier::one_shot(&mut engine);
        engine.await_signal(n.current(), "woken");
        engine.advance(2.0, "tick");
        let mut rec = Recorder::default();
        engine.run(&mut rec);
        assert_eq!(labels(&rec), vec!["tick"]);

        assert!(n.fire(&mut engine));
        engine.run(&mut rec);
        assert_eq!(rec.seen.last(), Some(&(2.0, "woken")));
        assert!(engine.is_delivered(n.current()));
    }

    #[test]
    fn await_after_delivery_resumes_immediately() {
        let mut engine: Engine<&'static str> = Engine::new();
        let mut n = Notifier::one_shot(&mut engine);
        n.fire(&mut engine);
        engine.run(&mut Recorder::default());
        engine.await_signal(n.current(), "late waiter");
        let mut rec = Recorder::default();
        engine.run(&mut rec);
        assert_eq!(labels(&rec), vec!["late waiter"]);
    }

    #[test]
    fn halt_waits_behind_same_time_entries() {
        // Entries already queued for the firing instant run before delivery.
        struct FireOnA {
            n: Notifier,
            seen: Vec<&'static str>,
        }
        impl Handler<&'static str> for FireOnA {
            fn handle(&mut self, engine: &mut Engine<&'static str>, event: &'static str) {
                self.seen.push(event);
                if event == "a" {
                    self.n.fire(engine);
                }
            }
        }

        let mut engine = Engine::new();
        let n = Notifier::rearming(&mut engine);
        let target = n.current();
        engine.advance(1.0, "a");
        engine.advance(1.0, "b");
        engine.advance(2.0, "c");
        let mut h = FireOnA { n, seen: vec![] };

        assert_eq!(engine.run_until(&mut h, &[target]), RunOutcome::Halted(target));
        assert_eq!(h.seen, vec!["a", "b"]);
        assert_eq!(engine.now(), SimTime(1.0));

        // Resuming continues where the run stopped.
        let next = h.n.current();
        assert_ne!(next, target);
        assert_eq!(engine.run_until(&mut h, &[next]), RunOutcome::Exhausted);
        assert_eq!(h.seen, vec!["a", "b", "c"]);
    }

    #[test]
    fn halted_signal_short_circuits_later_runs() {
        let mut engine: Engine<&'static str> = Engine::new();
        let mut n = Notifier::one_shot(&mut engine);
        let sig = n.current();
        n.fire(&mut engine);
        engine.advance(3.0, "after");
        let mut rec = Recorder::default();
        assert_eq!(engine.run_until(&mut rec, &[sig]), RunOutcome::Halted(sig));
        assert_eq!(engine.run_until(&mut rec, &[sig]), RunOutcome::Halted(sig));
        assert!(rec.seen.is_empty());
        assert_eq!(engine.pending(), 1);
    }

    #[test]
    fn rearming_notifier_issues_fresh_generations() {
        let mut engine: Engine<()> = Engine::new();
        let mut n = Notifier::rearming(&mut engine);
        let g0 = n.current();
        assert!(n.fire(&mut engine));
        let g1 = n.current();
        assert!(n.fire(&mut engine));
        assert_ne!(g0, g1);
        assert_eq!(g1.generation, g0.generation + 1);
        assert!(n.triggered());
    }

    #[test]
    fn one_shot_fires_once() {
        let mut engine: Engine<()> = Engine::new();
        let mut n = Notifier::one_shot(&mut engine);
        assert!(!n.triggered());
        assert!(n.fire(&mut engine));
        assert!(!n.fire(&mut engine));
        assert_eq!(engine.pending(), 1);
    }

    #[test]
    fn notifiers_get_distinct_channels() {
        let mut engine: Engine<()> = Engine::new();
        let a = Notifier::one_shot(&mut engine);
        let b = Notifier::rearming(&mut engine);
        assert_ne!(a.current().channel, b.current().channel);
    }
}
