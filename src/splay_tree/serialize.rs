//! Serde support. A `SplayTree` is a map in ascending key order and a `SplaySet` is a sequence.

use crate::splay_tree::{SplaySet, SplayTree};
use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::cmp;
use std::fmt;
use std::marker::PhantomData;

// Untrusted input may claim any length, so preallocation is capped.
fn capacity_hint(size_hint: Option<usize>) -> usize {
    cmp::min(size_hint.unwrap_or(0), 4096)
}

impl<T, U> Serialize for SplayTree<T, U>
where
    T: Serialize,
    U: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct SplayTreeVisitor<T, U> {
    marker: PhantomData<(T, U)>,
}

impl<'de, T, U> Visitor<'de> for SplayTreeVisitor<T, U>
where
    T: Deserialize<'de> + Ord,
    U: Deserialize<'de>,
{
    type Value = SplayTree<T, U>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut tree = SplayTree::with_capacity(capacity_hint(access.size_hint()));
        while let Some((key, value)) = access.next_entry()? {
            tree.insert(key, value);
        }
        Ok(tree)
    }
}

impl<'de, T, U> Deserialize<'de> for SplayTree<T, U>
where
    T: Deserialize<'de> + Ord,
    U: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(SplayTreeVisitor {
            marker: PhantomData,
        })
    }
}

impl<T> Serialize for SplaySet<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for key in self {
            seq.serialize_element(key)?;
        }
        seq.end()
    }
}

struct SplaySetVisitor<T> {
    marker: PhantomData<T>,
}

impl<'de, T> Visitor<'de> for SplaySetVisitor<T>
where
    T: Deserialize<'de> + Ord,
{
    type Value = SplaySet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = SplaySet::with_capacity(capacity_hint(access.size_hint()));
        while let Some(key) = access.next_element()? {
            set.insert(key);
        }
        Ok(set)
    }
}

impl<'de, T> Deserialize<'de> for SplaySet<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SplaySetVisitor {
            marker: PhantomData,
        })
    }
}
