//! Signals: named wake-up conditions delivered through the engine queue.
//!
//! A [`Signal`] is a `(channel, generation)` pair.  A [`Notifier`] owns one
//! channel and hands out the signal for its current generation.  Re-arming
//! notifiers bump the generation on every fire, so each fire is a fresh
//! single-shot signal and waiters on an old generation are never confused
//! with waiters on the next one.  One-shot notifiers fire at most once.

use crate::Engine;

/// A deliverable wake-up condition.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Signal {
    pub channel:    u32,
    pub generation: u64,
}

/// Owner of a signal channel.
#[derive(Debug)]
pub struct Notifier {
    channel:    u32,
    generation: u64,
    rearm:      bool,
    fired:      bool,
}

impl Notifier {
    /// A notifier that is replaced by a fresh signal immediately after each
    /// fire.
    pub fn rearming<E>(engine: &mut Engine<E>) -> Self {
        Self {
            channel:    engine.allocate_channel(),
            generation: 0,
            rearm:      true,
            fired:      false,
        }
    }

    /// A notifier that fires once; later fires are ignored.
    pub fn one_shot<E>(engine: &mut Engine<E>) -> Self {
        Self {
            channel:    engine.allocate_channel(),
            generation: 0,
            rearm:      false,
            fired:      false,
        }
    }

    /// The signal a waiter should await right now.
    pub fn current(&self) -> Signal {
        Signal {
            channel:    self.channel,
            generation: self.generation,
        }
    }

    /// `true` once `fire` has been called at least once.
    pub fn triggered(&self) -> bool {
        self.fired
    }

    /// Fire the current signal.  Returns `false` if a one-shot notifier had
    /// already fired.
    pub fn fire<E>(&mut self, engine: &mut Engine<E>) -> bool {
        if self.fired && !self.rearm {
            return false;
        }
        engine.fire(self.current());
        self.fired = true;
        if self.rearm {
            self.generation += 1;
        }
        true
    }
}
