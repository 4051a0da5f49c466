//! Stable identifiers for animated component kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, stable identifier of a component kind.
///
/// Derived from the kind's name with 64-bit FNV-1a at compile time, so the same name
/// yields the same id in every build and process. Only equality and hashing are
/// meaningful; names are recovered through [`crate::ComponentKindNames`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentKind(pub u64);

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

impl ComponentKind {
    /// Kind id for `name`. Usable in `const` position.
    pub const fn named(name: &str) -> Self {
        let bytes = name.as_bytes();
        let mut hash = FNV_OFFSET;
        let mut i = 0;
        while i < bytes.len() {
            hash ^= bytes[i] as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
            i += 1;
        }
        ComponentKind(hash)
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentKind({:#018x})", self.0)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}
