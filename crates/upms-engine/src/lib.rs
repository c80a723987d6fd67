//! `upms-engine` — a small, deterministic discrete-event engine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`event_queue`] | `EventQueue<T>` (`BTreeMap<(SimTime, seq), T>`)           |
//! | [`signal`]      | `Signal`, `Notifier` (re-arming or one-shot)              |
//! | [`engine`]      | `Engine<E>`, `Handler<E>`, `RunOutcome`                   |
//!
//! # Execution model
//!
//! Logically-parallel entities are written as state machines that react to
//! typed events `E`.  An entity suspends in one of two ways:
//!
//! ```text
//! engine.advance(delay, ev)        resume with `ev` at now + delay
//! engine.await_signal(signal, ev)  resume with `ev` once `signal` fires
//! ```
//!
//! `Engine::run_until` pops the earliest `(time, seq)` entry and hands it to
//! a [`Handler`], one at a time, until the queue empties or one of the halt
//! signals is delivered.  Entries at equal times run in submission order, so
//! every run is reproducible.

pub mod engine;
pub mod event_queue;
pub mod signal;

#[cfg(test)]
mod tests;

pub use engine::{Engine, Handler, RunOutcome};
pub use event_queue::{EventKey, EventQueue};
pub use signal::{Notifier, Signal};
