use core::hash::Hash;
use std::collections::HashSet;
use std::collections::hash_set;

/// Unordered collection of distinct values.
///
/// Iteration order is unspecified; callers that need a stable order sort the
/// output of [`Set::to_vec`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Set<T: Eq + Hash> {
    members: HashSet<T>,
}

impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> Set<T> {
    pub fn new() -> Self {
        Self {
            members: HashSet::new(),
        }
    }

    /// Builds a set from `data`, dropping repeated elements.
    pub fn from_slice(data: &[T]) -> Self
    where
        T: Clone,
    {
        data.iter().cloned().collect()
    }

    /// Returns `true` if `entry` was not already present.
    pub fn add(&mut self, entry: T) -> bool {
        self.members.insert(entry)
    }

    pub fn add_slice(&mut self, entries: &[T])
    where
        T: Clone,
    {
        self.members.extend(entries.iter().cloned());
    }

    pub fn remove(&mut self, entry: &T) -> bool {
        self.members.remove(entry)
    }

    pub fn is_member(&self, val: &T) -> bool {
        self.members.contains(val)
    }

    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Self
    where
        T: Clone,
    {
        self.members
            .iter()
            .filter(|e| predicate(*e))
            .cloned()
            .collect()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.members.iter().cloned().collect()
    }

    pub fn sum_weighted(&self, weight: impl Fn(&T) -> i64) -> i64 {
        self.members.iter().map(weight).sum()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.members.iter()
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.members.extend(iter);
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
