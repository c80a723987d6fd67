//! The `Engine` and its run loop.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;
use upms_core::SimTime;

use crate::{EventQueue, Signal};

/// What a queue entry does when popped.
#[derive(Debug)]
enum Entry<E> {
    /// Resume an entity with its continuation event.
    Resume(E),
    /// Deliver a fired signal: wake its waiters, possibly halt the run.
    Deliver(Signal),
}

/// Why [`Engine::run_until`] returned.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RunOutcome {
    /// One of the requested halt signals was delivered.
    Halted(Signal),
    /// No pending entries remain.
    Exhausted,
}

/// Receives continuation events popped by the engine.
///
/// The handler owns all entity state; the engine only owns time and the
/// pending set.  `handle` may schedule further events, await signals and fire
/// signals through the `engine` argument.
pub trait Handler<E> {
    fn handle(&mut self, engine: &mut Engine<E>, event: E);
}

/// Single-threaded discrete-event engine.
///
/// Exactly one continuation runs at a time; the handler finishes all its
/// mutations before control returns to the run loop.
#[derive(Debug)]
pub struct Engine<E> {
    now:          SimTime,
    pending:      EventQueue<Entry<E>>,
    waiters:      FxHashMap<Signal, Vec<E>>,
    delivered:    FxHashSet<Signal>,
    next_channel: u32,
    processed:    u64,
}

impl<E> Default for Engine<E> {
    fn default() -> Self {
        Self {
            now:          SimTime::ZERO,
            pending:      EventQueue::new(),
            waiters:      FxHashMap::default(),
            delivered:    FxHashSet::default(),
            next_channel: 0,
            processed:    0,
        }
    }
}

impl<E> Engine<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Number of queue entries popped so far.
    pub fn processed(&self) -> u64 {
        self.processed
    }

    /// Number of entries still pending (continuations and undelivered signals).
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub(crate) fn allocate_channel(&mut self) -> u32 {
        let channel = self.next_channel;
        self.next_channel += 1;
        channel
    }

    // ── Suspension primitives ─────────────────────────────────────────────

    /// Resume with `event` after `delay` units of virtual time.
    pub fn advance(&mut self, delay: f64, event: E) {
        debug_assert!(delay >= 0.0, "negative delay {delay}");
        self.pending.push(self.now.after(delay), Entry::Resume(event));
    }

    /// Resume with `event` once `signal` is delivered.
    ///
    /// If `signal` has already been delivered, `event` is scheduled at the
    /// current instant.
    pub fn await_signal(&mut self, signal: Signal, event: E) {
        if self.delivered.contains(&signal) {
            self.pending.push(self.now, Entry::Resume(event));
        } else {
            self.waiters.entry(signal).or_default().push(event);
        }
    }

    /// Fire `signal`.  Delivery is queued at the current instant behind every
    /// entry already scheduled for it.
    pub fn fire(&mut self, signal: Signal) {
        self.pending.push(self.now, Entry::Deliver(signal));
    }

    /// `true` once `signal` has been delivered by the run loop.
    pub fn is_delivered(&self, signal: Signal) -> bool {
        self.delivered.contains(&signal)
    }

    // ── Run loop ──────────────────────────────────────────────────────────

    /// Pop and execute entries in `(time, seq)` order until one of `halt` is
    /// delivered or nothing remains.
    ///
    /// Returns immediately if a halt signal was delivered by an earlier run.
    pub fn run_until<H: Handler<E>>(&mut self, handler: &mut H, halt: &[Signal]) -> RunOutcome {
        if let Some(&signal) = halt.iter().find(|s| self.delivered.contains(*s)) {
            return RunOutcome::Halted(signal);
        }

        while let Some((key, entry)) = self.pending.pop() {
            debug_assert!(key.time >= self.now, "time went backwards");
            self.now = key.time;
            self.processed += 1;

            match entry {
                Entry::Resume(event) => {
                    trace!(now = %self.now, seq = key.seq, "resume");
                    handler.handle(self, event);
                }
                Entry::Deliver(signal) => {
                    trace!(now = %self.now, seq = key.seq, ?signal, "deliver");
                    self.delivered.insert(signal);
                    for event in self.waiters.remove(&signal).unwrap_or_default() {
                        self.pending.push(self.now, Entry::Resume(event));
                    }
                    if halt.contains(&signal) {
                        return RunOutcome::Halted(signal);
                    }
                }
            }
        }
        RunOutcome::Exhausted
    }

    /// Run until the queue is empty.
    pub fn run<H: Handler<E>>(&mut self, handler: &mut H) -> RunOutcome {
        self.run_until(handler, &[])
    }
}
