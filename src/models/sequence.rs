//! Ordered, optionally named sequences.
//!
//! A [`Sequence`] stores its elements in a persistent [`im::Vector`] so the
//! combinators can hand back new sequences that share structure with their
//! input instead of copying it. Names live in a parallel vector that is only
//! allocated when at least one element is named.

use std::fmt;
use std::ops::Index;

use im::Vector;

use crate::error::{SequenceError, SequenceResult};

/// How an element is addressed when handed to an indexed transform.
///
/// Named elements are addressed by name, everything else by its 1-based
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    Position(usize),
    Name(&'a str),
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Position(position) => write!(f, "{}", position),
            Key::Name(name) => f.write_str(name),
        }
    }
}

/// An ordered collection of elements with an optional name per position.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence<T: Clone> {
    values: Vector<T>,
    names: Option<Vector<Option<String>>>,
}

impl<T: Clone> Sequence<T> {
    /// Creates an empty, unnamed sequence.
    pub fn new() -> Self {
        Self {
            values: Vector::new(),
            names: None,
        }
    }

    /// Builds a sequence where every element carries a name.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqops::prelude::*;
    ///
    /// let letters = Sequence::named([("a", 1), ("b", 2)]);
    /// assert_eq!(letters.get_by_name("b"), Some(&2));
    /// ```
    pub fn named<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
    {
        Self::from_entries(
            entries
                .into_iter()
                .map(|(name, value)| (Some(name.into()), value)),
        )
    }

    /// Builds a sequence from `(name, value)` pairs where names are optional.
    ///
    /// The name vector is dropped entirely when no entry is named.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Option<String>, T)>,
    {
        let (names, values): (Vector<Option<String>>, Vector<T>) = entries.into_iter().unzip();
        Self::from_parts(values, Some(names))
    }

    pub(crate) fn from_parts(values: Vector<T>, names: Option<Vector<Option<String>>>) -> Self {
        let names = names.filter(|names| names.iter().any(Option::is_some));
        Self { values, names }
    }

    /// Attaches names to an existing sequence.
    ///
    /// Fails with `LengthMismatch` when the number of names differs from the
    /// number of elements.
    pub fn with_names<I, K>(self, names: I) -> SequenceResult<Self>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let names: Vector<Option<String>> = names.into_iter().map(|n| Some(n.into())).collect();
        if names.len() != self.values.len() {
            return Err(SequenceError::length_mismatch(self.values.len(), names.len()));
        }
        Ok(Self::from_parts(self.values, Some(names)))
    }

    /// Returns a copy of this sequence with every name removed.
    pub fn unnamed(&self) -> Self {
        Self {
            values: self.values.clone(),
            names: None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Element at a 0-based index.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    /// First element carrying `name`.
    pub fn get_by_name(&self, name: &str) -> Option<&T> {
        self.position_of_name(name).and_then(|index| self.values.get(index))
    }

    /// 0-based index of the first element carrying `name`.
    pub fn position_of_name(&self, name: &str) -> Option<usize> {
        self.names
            .as_ref()?
            .iter()
            .position(|candidate| candidate.as_deref() == Some(name))
    }

    /// Name of the element at a 0-based index, if it has one.
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.names.as_ref()?.get(index)?.as_deref()
    }

    /// Whether any element carries a name.
    pub fn has_names(&self) -> bool {
        self.names.is_some()
    }

    /// Name of every position, `None` where the element is unnamed.
    pub fn names(&self) -> Vec<Option<&str>> {
        (0..self.len()).map(|index| self.name_at(index)).collect()
    }

    /// The key an indexed transform sees for the element at a 0-based index.
    pub fn key_at(&self, index: usize) -> Key<'_> {
        match self.name_at(index) {
            Some(name) => Key::Name(name),
            None => Key::Position(index + 1),
        }
    }

    pub fn iter(&self) -> im::vector::Iter<'_, T> {
        self.values.iter()
    }

    /// Iterates over `(name, value)` pairs in order.
    pub fn entries(&self) -> impl Iterator<Item = (Option<&str>, &T)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(move |(index, value)| (self.name_at(index), value))
    }

    pub fn first(&self) -> Option<&T> {
        self.values.front()
    }

    pub fn last(&self) -> Option<&T> {
        self.values.back()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.values.iter().cloned().collect()
    }

    /// Copy of this sequence with the element at a 0-based index replaced.
    ///
    /// The caller guarantees `index < self.len()`.
    pub(crate) fn replaced(&self, index: usize, value: T) -> Self {
        Self {
            values: self.values.update(index, value),
            names: self.names.clone(),
        }
    }

    pub(crate) fn name_vector(&self) -> Option<&Vector<Option<String>>> {
        self.names.as_ref()
    }
}

impl<T: Clone> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> From<Vec<T>> for Sequence<T> {
    fn from(values: Vec<T>) -> Self {
        Self {
            values: Vector::from(values),
            names: None,
        }
    }
}

impl<T: Clone, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
            names: None,
        }
    }
}

impl<'a, T: Clone> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = im::vector::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T: Clone> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = im::vector::ConsumingIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<T: Clone> Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}
