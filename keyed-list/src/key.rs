#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

/// Key → value map used for the identity cache and per-pass key lookups.
#[cfg(feature = "std")]
pub(crate) type KeyMap<K, V> = HashMap<K, V>;
#[cfg(not(feature = "std"))]
pub(crate) type KeyMap<K, V> = BTreeMap<K, V>;

/// Bounds an item key must satisfy to index the identity cache.
///
/// With `std` this is `Hash + Eq`; without it, `Ord`. Strings and integers satisfy both.
#[cfg(feature = "std")]
pub trait ListKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq> ListKey for K {}

#[cfg(not(feature = "std"))]
pub trait ListKey: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord> ListKey for K {}
