use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Bound shared by every type usable as an argument label.
pub trait LabelType: Clone + Debug + Display + Eq + Hash {}
impl<T: Clone + Debug + Display + Eq + Hash> LabelType for T {}

/// An argument: a label paired with the id its [`ArgumentSet`] gave it.
///
/// # Example
///
/// ```
/// # use transarg::aa::{Argument, LabelType};
/// fn describe<T: LabelType>(a: &Argument<T>) -> String {
///     format!("#{} {}", a.id(), a.label())
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Argument<T: LabelType> {
    id: usize,
    label: T,
}

impl<T> Argument<T>
where
    T: LabelType,
{
    /// Returns the label given when the argument was created.
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns the index of the argument in its set.
    pub fn id(&self) -> usize {
        self.id
    }
}

impl<T> Display for Argument<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// The arguments of a framework.
///
/// Ids are creation indexes, so they are dense and start at zero.
/// Labels are unique: a label seen twice maps to the argument created the first time.
#[derive(Debug, Default)]
pub struct ArgumentSet<T>
where
    T: LabelType,
{
    arena: Vec<Argument<T>>,
    ids: HashMap<T, usize>,
}

impl<T> ArgumentSet<T>
where
    T: LabelType,
{
    /// Creates one argument per distinct label, in the order of the slice.
    ///
    /// # Example
    ///
    /// ```
    /// # use transarg::aa::ArgumentSet;
    /// let arguments = ArgumentSet::new_with_labels(&["cheap", "slow", "cheap"]);
    /// assert_eq!(2, arguments.len());
    /// ```
    pub fn new_with_labels(labels: &[T]) -> Self {
        let mut set = ArgumentSet {
            arena: Vec::with_capacity(labels.len()),
            ids: HashMap::with_capacity(labels.len()),
        };
        for label in labels {
            set.get_or_create(label.clone());
        }
        set
    }

    /// Returns the id bound to a label, creating a new argument when the label is unknown.
    ///
    /// # Example
    ///
    /// ```
    /// # use transarg::aa::ArgumentSet;
    /// let mut arguments = ArgumentSet::new_with_labels(&["cheap", "slow"]);
    /// assert_eq!(2, arguments.get_or_create("tiring"));
    /// assert_eq!(2, arguments.get_or_create("tiring"));
    /// assert_eq!(1, arguments.get_or_create("slow"));
    /// ```
    pub fn get_or_create(&mut self, label: T) -> usize {
        if let Some(id) = self.ids.get(&label) {
            return *id;
        }
        let id = self.arena.len();
        self.ids.insert(label.clone(), id);
        self.arena.push(Argument { id, label });
        id
    }

    /// Returns the number of arguments, which is also the next id to be given.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` iff no argument was created.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Looks up the id of a label; unknown labels are errors.
    ///
    /// # Example
    ///
    /// ```
    /// # use transarg::aa::ArgumentSet;
    /// let arguments = ArgumentSet::new_with_labels(&["cheap", "slow"]);
    /// assert_eq!(1, arguments.get_argument_index(&"slow").unwrap());
    /// assert!(arguments.get_argument_index(&"fast").is_err());
    /// ```
    pub fn get_argument_index(&self, label: &T) -> Result<usize> {
        self.ids
            .get(label)
            .copied()
            .ok_or_else(|| anyhow!("no such argument: {}", label))
    }

    /// Looks up the argument with a label; unknown labels are errors.
    pub fn get_argument(&self, label: &T) -> Result<&Argument<T>> {
        let id = self.get_argument_index(label)?;
        Ok(&self.arena[id])
    }

    /// # Panics
    ///
    /// Panics if `id` is not lower than [`len`](Self::len).
    pub fn get_argument_by_id(&self, id: usize) -> &Argument<T> {
        &self.arena[id]
    }

    /// Iterates by increasing id.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Argument<T>> + ExactSizeIterator + '_ {
        self.arena.iter()
    }
}
