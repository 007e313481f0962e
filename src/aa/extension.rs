use crate::aa::{AAFramework, Argument, LabelType};
use std::cmp::Ordering;

/// A set of arguments of a framework that are accepted together.
///
/// The arguments are kept sorted by increasing id, so that two extensions holding the same arguments are equal.
/// Extensions are snapshots: they borrow the arguments of the framework they were computed from and are never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension<'a, T>
where
    T: LabelType,
{
    arguments: Vec<&'a Argument<T>>,
}

impl<'a, T> Extension<'a, T>
where
    T: LabelType,
{
    /// Builds an extension from a collection of arguments.
    ///
    /// # Example
    ///
    /// ```
    /// # use transarg::aa::{AAFramework, ArgumentSet, Extension};
    /// let af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
    /// let args = af.argument_set().iter().rev().collect::<Vec<_>>();
    /// let ext = Extension::new(args);
    /// assert_eq!(vec![0, 1], ext.ids());
    /// ```
    pub fn new(mut arguments: Vec<&'a Argument<T>>) -> Self {
        arguments.sort_unstable_by_key(|a| a.id());
        arguments.dedup_by_key(|a| a.id());
        Self { arguments }
    }

    /// Builds an extension from a membership vector indexed by argument ids.
    pub fn from_membership(af: &'a AAFramework<T>, members: &[bool]) -> Self {
        let arguments = members
            .iter()
            .enumerate()
            .filter(|(_, m)| **m)
            .map(|(i, _)| af.argument_set().get_argument_by_id(i))
            .collect();
        Self { arguments }
    }

    /// Returns `true` iff the argument belongs to this extension.
    pub fn contains(&self, arg: &Argument<T>) -> bool {
        self.contains_id(arg.id())
    }

    /// Returns `true` iff the argument with the given id belongs to this extension.
    pub fn contains_id(&self, id: usize) -> bool {
        self.arguments.binary_search_by_key(&id, |a| a.id()).is_ok()
    }

    /// Returns the ids of the arguments, in increasing order.
    pub fn ids(&self) -> Vec<usize> {
        self.arguments.iter().map(|a| a.id()).collect()
    }

    /// Returns `true` iff every argument of this extension is also in the other one.
    pub fn is_subset_of(&self, other: &Extension<'_, T>) -> bool {
        self.arguments.iter().all(|a| other.contains_id(a.id()))
    }

    /// Returns the arguments of this extension.
    pub fn arguments(&self) -> &[&'a Argument<T>] {
        &self.arguments
    }

    /// Provides an iterator to the arguments, in increasing id order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Argument<T>> + '_ {
        self.arguments.iter().copied()
    }

    /// Returns the number of arguments in this extension.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Returns `true` iff this extension has no argument.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    fn lexicographic_cmp(&self, other: &Extension<'_, T>) -> Ordering {
        self.arguments
            .iter()
            .map(|a| a.id())
            .cmp(other.arguments.iter().map(|a| a.id()))
    }
}

/// The extensions of a framework under one semantics.
///
/// Extensions are sorted by the lexicographic order of their id lists, the first one being the canonical extension.
/// When the search computing the extensions was stopped before its end, the set is flagged as approximate.
#[derive(Debug, Clone)]
pub struct ExtensionSet<'a, T>
where
    T: LabelType,
{
    extensions: Vec<Extension<'a, T>>,
    approximate: bool,
}

impl<'a, T> ExtensionSet<'a, T>
where
    T: LabelType,
{
    /// Builds a new set of extensions.
    ///
    /// Duplicates are removed.
    pub fn new(mut extensions: Vec<Extension<'a, T>>, approximate: bool) -> Self {
        extensions.sort_unstable_by(|e1, e2| e1.lexicographic_cmp(e2));
        extensions.dedup();
        Self {
            extensions,
            approximate,
        }
    }

    /// Builds a set made of a single exact extension.
    pub fn singleton(extension: Extension<'a, T>) -> Self {
        Self::new(vec![extension], false)
    }

    /// Returns the canonical extension, that is the one whose sorted id list is lexicographically minimal.
    ///
    /// Returns `None` if there is no extension.
    pub fn canonical(&self) -> Option<&Extension<'a, T>> {
        self.extensions.first()
    }

    /// Returns `true` iff the set may miss some extensions or contain inexact ones.
    pub fn is_approximate(&self) -> bool {
        self.approximate
    }

    /// Provides an iterator to the extensions, in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &Extension<'a, T>> + '_ {
        self.extensions.iter()
    }

    /// Returns the number of extensions.
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Returns `true` iff there is no extension.
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Returns `true` iff the extension belongs to this set.
    pub fn contains(&self, extension: &Extension<'_, T>) -> bool {
        self.extensions
            .iter()
            .any(|e| e.lexicographic_cmp(extension) == Ordering::Equal)
    }

    /// Checks whether an argument belongs to at least one extension.
    pub fn is_credulously_accepted(&self, arg: &Argument<T>) -> bool {
        self.credulous_certificate(arg).is_some()
    }

    /// Returns the first extension containing the argument, if any.
    pub fn credulous_certificate(&self, arg: &Argument<T>) -> Option<&Extension<'a, T>> {
        self.extensions.iter().find(|e| e.contains(arg))
    }

    /// Checks whether an argument belongs to every extension.
    ///
    /// As usual, this is vacuously true when there is no extension.
    pub fn is_skeptically_accepted(&self, arg: &Argument<T>) -> bool {
        self.skeptical_counterexample(arg).is_none()
    }

    /// Returns the first extension that does not contain the argument, if any.
    pub fn skeptical_counterexample(&self, arg: &Argument<T>) -> Option<&Extension<'a, T>> {
        self.extensions.iter().find(|e| !e.contains(arg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;

    fn framework() -> AAFramework<String> {
        let labels = ["a", "b", "c"].map(|s| s.to_string());
        AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&labels))
    }

    fn ext<'a>(af: &'a AAFramework<String>, ids: &[usize]) -> Extension<'a, String> {
        Extension::new(
            ids.iter()
                .map(|i| af.argument_set().get_argument_by_id(*i))
                .collect(),
        )
    }

    #[test]
    fn test_extension_is_sorted_and_deduplicated() {
        let af = framework();
        assert_eq!(vec![0, 2], ext(&af, &[2, 0, 2]).ids());
    }

    #[test]
    fn test_from_membership() {
        let af = framework();
        let e = Extension::from_membership(&af, &[true, false, true]);
        assert_eq!(ext(&af, &[0, 2]), e);
        assert!(e.contains_id(2));
        assert!(!e.contains_id(1));
    }

    #[test]
    fn test_subset() {
        let af = framework();
        assert!(ext(&af, &[]).is_subset_of(&ext(&af, &[1])));
        assert!(ext(&af, &[1]).is_subset_of(&ext(&af, &[0, 1])));
        assert!(!ext(&af, &[2]).is_subset_of(&ext(&af, &[0, 1])));
    }

    #[test]
    fn test_canonical_is_lexicographic_minimum() {
        let af = framework();
        let set = ExtensionSet::new(vec![ext(&af, &[1, 2]), ext(&af, &[0, 2]), ext(&af, &[2])], false);
        assert_eq!(vec![0, 2], set.canonical().unwrap().ids());
        let ordered = set.iter().map(|e| e.ids()).collect::<Vec<Vec<usize>>>();
        assert_eq!(vec![vec![0, 2], vec![1, 2], vec![2]], ordered);
    }

    #[test]
    fn test_empty_set() {
        let af = framework();
        let set: ExtensionSet<String> = ExtensionSet::new(vec![], false);
        assert!(set.canonical().is_none());
        let a = af.argument_set().get_argument_by_id(0);
        assert!(!set.is_credulously_accepted(a));
        assert!(set.is_skeptically_accepted(a));
    }

    #[test]
    fn test_acceptance() {
        let af = framework();
        let set = ExtensionSet::new(vec![ext(&af, &[0, 2]), ext(&af, &[1, 2])], false);
        let args = af.argument_set();
        assert!(set.is_credulously_accepted(args.get_argument_by_id(0)));
        assert!(!set.is_skeptically_accepted(args.get_argument_by_id(0)));
        assert!(set.is_skeptically_accepted(args.get_argument_by_id(2)));
        assert_eq!(
            vec![1, 2],
            set.skeptical_counterexample(args.get_argument_by_id(0))
                .unwrap()
                .ids()
        );
        assert!(set.contains(&ext(&af, &[2, 1])));
        assert_eq!(2, set.len());
    }
}
