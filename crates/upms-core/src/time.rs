//! Virtual time and run configuration.
//!
//! # Design
//!
//! Virtual time is a continuous `f64` wrapped in [`SimTime`].  Arrival times
//! and durations from the instance generator are integral, but due dates are
//! fractional (`arrival + factor * mean processing time`), so the clock must
//! be real-valued.
//!
//! `SimTime` is totally ordered through [`f64::total_cmp`], which lets it act
//! as a priority-queue key.  `SimTime::INFINITY` is the "no more arrivals"
//! sentinel.

use std::cmp::Ordering;
use std::fmt;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute point on the virtual clock.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Sentinel used once the arrival stream is exhausted.
    pub const INFINITY: SimTime = SimTime(f64::INFINITY);

    /// The time `delay` after `self`.
    #[inline]
    pub fn after(self, delay: f64) -> SimTime {
        SimTime(self.0 + delay)
    }

    /// Time elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        self.after(rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.since(rhs)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Per-run simulator configuration.
///
/// Typically loaded from JSON by the application crate (with the `serde`
/// feature) and handed to the `Factory` controller.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Numerator of the terminal reward: `scale / max(machine-available-time)`.
    pub terminal_reward_scale: f64,

    /// Keep the textual trace (arrival / setup / start / finish events).
    pub record_trace: bool,

    /// Keep `(old observation, action, reward, new observation)` per step.
    /// Off by default: every entry holds two full observations.
    pub record_transitions: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            terminal_reward_scale: 1000.0,
            record_trace:          true,
            record_transitions:    false,
        }
    }
}
