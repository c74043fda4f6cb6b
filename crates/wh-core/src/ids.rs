//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` so
//! loaders can build IDs straight from parsed numbers, but callers should
//! prefer the `.index()` helpers when indexing into `Vec`s.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID", equal to `u32::MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

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
    /// Identifier of a warehouse location.  `0` is always the depot; racks use
    /// their positive rack number.
    pub struct LocationId(u32);
}

typed_id! {
    /// Position of an animated worker in the route list handed to the
    /// synthesizer.  Frame sequences are indexed by it.
    pub struct AgentId(u32);
}

impl LocationId {
    /// The depot every route starts from and returns to.
    pub const DEPOT: LocationId = LocationId(0);

    #[inline]
    pub fn is_depot(self) -> bool {
        self == Self::DEPOT
    }

    /// Parse a layout label into an id.
    ///
    /// | Label     | Id              |
    /// |-----------|-----------------|
    /// | `Start`   | `DEPOT`         |
    /// | `Rack N`  | `LocationId(N)` |
    /// | *u32*     | `LocationId(n)` |
    pub fn from_label(label: &str) -> CoreResult<LocationId> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("start") {
            return Ok(Self::DEPOT);
        }
        let number = match label.split_once(' ') {
            Some((_, n)) => n.trim(),
            None => label,
        };
        number.parse::<u32>().map(LocationId).map_err(|_| {
            CoreError::Parse(format!(
                "invalid location label {label:?}: expected \"Start\", \"Rack N\", or a number"
            ))
        })
    }
}
