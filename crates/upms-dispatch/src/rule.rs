//! The `DispatchRule` enum — the action space exposed to sequencing policies.

use std::fmt;
use std::str::FromStr;

use upms_core::Job;

use crate::{DispatchError, RuleContext, select};

/// A job-selection strategy.  The discriminant is the external action code.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DispatchRule {
    /// First in, first out.
    Fifo = 0,
    /// Last in, first out.
    Lifo = 1,
    /// Shortest processing time on the target machine.
    Spt  = 2,
    /// Minimum setup time after the machine's last completed job.
    Mst  = 3,
    /// Earliest due date.
    Edd  = 4,
    /// Least slack: `due - now - processing`.
    Lst  = 5,
    /// Critical ratio: `(due - now) / processing`.
    Cr   = 6,
}

impl DispatchRule {
    /// All rules in action-code order.
    pub const ALL: [DispatchRule; 7] = [
        DispatchRule::Fifo,
        DispatchRule::Lifo,
        DispatchRule::Spt,
        DispatchRule::Mst,
        DispatchRule::Edd,
        DispatchRule::Lst,
        DispatchRule::Cr,
    ];

    /// The integer action code for this rule.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Short upper-case label.
    pub fn as_str(self) -> &'static str {
        match self {
            DispatchRule::Fifo => "FIFO",
            DispatchRule::Lifo => "LIFO",
            DispatchRule::Spt  => "SPT",
            DispatchRule::Mst  => "MST",
            DispatchRule::Edd  => "EDD",
            DispatchRule::Lst  => "LST",
            DispatchRule::Cr   => "CR",
        }
    }

    /// Pick one job from `buffer` for the machine described by `ctx`.
    pub fn select<'a>(self, buffer: &'a [Job], ctx: &RuleContext) -> Option<&'a Job> {
        match self {
            DispatchRule::Fifo => select::fifo(buffer),
            DispatchRule::Lifo => select::lifo(buffer),
            DispatchRule::Spt  => select::spt(buffer, ctx),
            DispatchRule::Mst  => select::mst(buffer, ctx),
            DispatchRule::Edd  => select::edd(buffer),
            DispatchRule::Lst  => select::lst(buffer, ctx),
            DispatchRule::Cr   => select::cr(buffer, ctx),
        }
    }
}

impl TryFrom<i64> for DispatchRule {
    type Error = DispatchError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(DispatchError::UnknownAction(code))
    }
}

impl FromStr for DispatchRule {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DispatchError::UnknownRule(s.to_owned()))
    }
}

impl fmt::Display for DispatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
