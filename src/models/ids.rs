//! Typed identifiers, one per collection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Common behavior of the per-collection identifiers
pub trait EntityId: Copy + Eq + std::hash::Hash + fmt::Debug + fmt::Display {
    /// Identifier issued to the first record of an empty collection
    const FIRST: Self;

    /// Identifier following this one
    fn next(self) -> Self;
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl EntityId for $name {
            const FIRST: Self = $name(1);

            fn next(self) -> Self {
                $name(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(v: u32) -> Self {
                $name(v)
            }
        }
    };
}

entity_id!(
    /// Member identifier
    MemberId
);
entity_id!(
    /// Book identifier
    BookId
);
entity_id!(
    /// Checkout transaction identifier
    CheckoutId
);
