use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize};

use crate::entry::AssocArrayEntry;
use crate::AssocArray;

impl<K, V> Serialize for AssocArray<K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for entry in self.entries() {
            seq.serialize_element(entry)?;
        }
        seq.end()
    }
}

struct AssocArrayDeserializer<K, V>(core::marker::PhantomData<(K, V)>);

impl<'de, K, V> Visitor<'de> for AssocArrayDeserializer<K, V>
where
    K: Deserialize<'de> + PartialEq,
    V: Deserialize<'de>,
{
    type Value = AssocArray<K, V>;

    fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
        formatter.write_str("A sequence of entries for AssocArray")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut array = AssocArray::<K, V>::new();

        while let Some(entry) = seq.next_element::<AssocArrayEntry<K, V>>()? {
            // set() collapses duplicate keys to the last occurrence
            array.set(entry.key, entry.value);
        }

        Ok(array)
    }
}

impl<'de, K, V> Deserialize<'de> for AssocArray<K, V>
where
    K: Deserialize<'de> + PartialEq,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(AssocArrayDeserializer(core::marker::PhantomData))
    }
}
