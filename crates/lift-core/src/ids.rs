//! Strongly typed identifier wrappers.
//!
//! Ids are 1-based: the first elevator is `ElevatorId(1)` and the first
//! passenger `PassengerId(1)`.  Ascending id order is the canonical iteration
//! order everywhere in the simulation, so both types are `Ord`.  Rosters are
//! stored densely, which makes `slot()` (id − 1) a direct `Vec` index.

use std::fmt;

/// A floor number.  The lobby is normally floor 0.
pub type Floor = u32;

/// Generate a typed 1-based id wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The first id handed out in a fresh roster.
            pub const FIRST: $name = $name(1);

            /// Position of this id in a dense, 1-based roster `Vec`.
            ///
            /// Returns `None` for the (never assigned) id 0.
            #[inline(always)]
            pub fn slot(self) -> Option<usize> {
                (self.0 as usize).checked_sub(1)
            }

            /// The id stored at `slot` of a dense roster.
            #[inline(always)]
            pub fn from_slot(slot: usize) -> $name {
                $name(slot as $inner + 1)
            }

            /// The next id in sequence.
            #[inline(always)]
            pub fn next(self) -> $name {
                $name(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Stable elevator id, assigned 1..=N at creation.
    pub struct ElevatorId(u32);
}

typed_id! {
    /// Unique passenger id, assigned monotonically at generation.
    pub struct PassengerId(u32);
}
