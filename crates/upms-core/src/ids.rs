//! Strongly typed identifier wrappers.
//!
//! Job ids are dense `0..N` and machine ids dense `0..M`, so both double as
//! `Vec` indices via `.index()`.  "No job" is expressed as `Option<JobId>`
//! inside the simulator; the `-1` sentinel only appears in numeric
//! observation tables.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a job in the instance, `0..N`.
    pub struct JobId(u32);
}

typed_id! {
    /// Index of a machine, `0..M`.
    pub struct MachineId(u32);
}

/// Encode an optional job id the way observation tables expect it.
#[inline]
pub fn job_code(id: Option<JobId>) -> f64 {
    id.map_or(-1.0, |j| j.0 as f64)
}
