//! `upms-dispatch` — the dispatch rule set.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`rule`]    | `DispatchRule` enum, action-code conversion                 |
//! | [`context`] | `RuleContext` — clock and target-machine view for one pick  |
//! | [`select`]  | Pure selection functions over a job buffer                  |
//! | [`error`]   | `DispatchError`, `DispatchResult<T>`                        |
//!
//! # Design notes
//!
//! Every rule is a pure function `(&[Job], &RuleContext) -> Option<&Job>`.
//! Rules never mutate the buffer; the coordinator removes the chosen job.
//! Ties go to the earliest buffer position, i.e. the job that was enqueued
//! first.  `None` is returned only for an empty buffer.

pub mod context;
pub mod error;
pub mod rule;
pub mod select;

#[cfg(test)]
mod tests;

pub use context::RuleContext;
pub use error::{DispatchError, DispatchResult};
pub use rule::DispatchRule;
