//! Defaultable Collection
//!
//! An ordered container that holds either its compiled-in defaults or
//! externally supplied values, never a mix. The first `push` discards the
//! entire default sequence; from then on the container behaves like a plain
//! `Vec`.

use crate::error::CollectionError;
use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Ordered, duplicate-permitting container with replace-on-first-write
/// defaults.
///
/// The overridden flag flips false to true at most once, on the first `push`,
/// and nothing re-arms the defaults afterwards, not even `clear`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultableVec<T> {
    items: Vec<T>,
    overridden: bool,
}

impl<T> DefaultableVec<T> {
    /// Create a container pre-populated with `defaults`, in order.
    ///
    /// An empty default sequence is valid and yields an empty container.
    pub fn from_defaults<I>(defaults: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        DefaultableVec {
            items: defaults.into_iter().collect(),
            overridden: false,
        }
    }

    /// Append a value.
    ///
    /// The first call after construction discards all current contents,
    /// defaults included, before appending. Later calls append in order.
    /// This is the only operation that flips the overridden flag.
    pub fn push(&mut self, value: T) {
        if !self.overridden {
            self.overridden = true;
            self.items.clear();
        }
        self.items.push(value);
    }

    /// Empty the container unconditionally.
    ///
    /// Does NOT re-arm the defaults: a `push` after `clear` appends to the
    /// empty container rather than restoring the default sequence. This
    /// asymmetry is part of the contract.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Current number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the default sequence has been discarded.
    pub fn is_overridden(&self) -> bool {
        self.overridden
    }

    /// Always false. Binders probe collections for writability before
    /// appending; this container permits mutation unconditionally.
    pub fn is_read_only(&self) -> bool {
        false
    }

    /// Iterate current elements in order.
    ///
    /// The returned iterator borrows the container, so no mutation (and in
    /// particular no default-to-override flip) can occur mid-traversal.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// View current elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: PartialEq> DefaultableVec<T> {
    /// Whether `value` is present, under `T`'s equality.
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Remove the first occurrence of `value`.
    ///
    /// Returns whether an element was removed; a non-present value is not an
    /// error. Never affects the overridden flag.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.items.iter().position(|item| item == value) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }
}

impl<T: Clone> DefaultableVec<T> {
    /// Copy current elements into `dest` starting at `offset`.
    ///
    /// Capacity is checked before any write, so a failed copy leaves `dest`
    /// untouched.
    pub fn copy_into(&self, dest: &mut [T], offset: usize) -> Result<(), CollectionError> {
        let available = dest.len().saturating_sub(offset);
        if available < self.items.len() {
            return Err(CollectionError::CapacityExceeded {
                needed: self.items.len(),
                offset,
                available,
            });
        }
        dest[offset..offset + self.items.len()].clone_from_slice(&self.items);
        Ok(())
    }
}

impl<T> Default for DefaultableVec<T> {
    /// An empty container with an empty default sequence.
    fn default() -> Self {
        DefaultableVec::from_defaults(std::iter::empty())
    }
}

/// Bulk binding path. Each element goes through `push`, so the first element
/// of the first extend discards the defaults.
impl<T> Extend<T> for DefaultableVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a DefaultableVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for DefaultableVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Serializes the current elements as a plain sequence. The overridden flag
/// is not part of the wire shape.
impl<T: Serialize> Serialize for DefaultableVec<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.items.len()))?;
        for item in &self.items {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

/// Deserialized containers carry no default sequence: every element is pushed
/// into an empty-default container. Retain-on-absent semantics therefore only
/// hold when binding onto a live instance (see [`crate::binder`]), not
/// through a derive round-trip.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for DefaultableVec<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SeqVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for SeqVisitor<T> {
            type Value = DefaultableVec<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut collection = DefaultableVec::default();
                while let Some(value) = seq.next_element()? {
                    collection.push(value);
                }
                Ok(collection)
            }
        }

        deserializer.deserialize_seq(SeqVisitor(PhantomData))
    }
}
