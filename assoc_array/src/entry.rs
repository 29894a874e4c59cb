use core::{borrow::Borrow, fmt::Debug};

/// Simple entry type containing a key and a value
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssocArrayEntry<K, V> {
    /// Key
    pub key: K,

    /// Value
    pub value: V,
}

impl<K, V> AssocArrayEntry<K, V> {
    /// Create a new entry
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

impl<K, V> Borrow<K> for AssocArrayEntry<K, V> {
    fn borrow(&self) -> &K {
        &self.key
    }
}

impl<K: Debug, V: Debug> Debug for AssocArrayEntry<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("({:?}, {:?})", &self.key, &self.value))
    }
}
