// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A set that can also represent "everything".

use std::collections::HashSet;
use std::hash::Hash;

/// Either a concrete, enumerated set, or the universal set ("everything matches").
///
/// This is a tagged variant on purpose: an empty [`MaybeCompleteSet::Enumerated`] means
/// "nothing matches", the opposite of [`MaybeCompleteSet::Complete`]. Encoding "universe"
/// as a sentinel empty set would conflate the two.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MaybeCompleteSet<T: Eq + Hash> {
    /// Every value is a member.
    Complete,
    /// Only the enumerated values are members.
    Enumerated(HashSet<T>),
}

impl<T: Eq + Hash> MaybeCompleteSet<T> {
    /// The universal set: `contains` always returns true.
    pub fn complete() -> Self {
        MaybeCompleteSet::Complete
    }

    /// An enumerated set containing exactly the given values.
    pub fn of(set: HashSet<T>) -> Self {
        MaybeCompleteSet::Enumerated(set)
    }

    /// Returns true if `x` is a member of this set.
    pub fn contains(&self, x: &T) -> bool {
        match self {
            MaybeCompleteSet::Complete => true,
            MaybeCompleteSet::Enumerated(set) => set.contains(x),
        }
    }

    /// Returns true if this is the universal set.
    pub fn is_complete(&self) -> bool {
        matches!(self, MaybeCompleteSet::Complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_contains_everything() {
        let set: MaybeCompleteSet<i32> = MaybeCompleteSet::complete();
        assert!(set.contains(&0));
        assert!(set.contains(&-5));
        assert!(set.contains(&i32::MAX));
    }

    #[test]
    fn empty_enumerated_contains_nothing() {
        let set: MaybeCompleteSet<i32> = MaybeCompleteSet::of(HashSet::new());
        assert!(!set.contains(&0));
        assert!(!set.is_complete());
    }

    #[test]
    fn enumerated_membership() {
        let set = MaybeCompleteSet::of(HashSet::from([1, 2, 3]));
        assert!(set.contains(&2));
        assert!(!set.contains(&4));
    }
}
