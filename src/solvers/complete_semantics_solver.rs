use super::ExtensionEnumerator;
use crate::{
    aa::{AAFramework, Extension, ExtensionSet, LabelType},
    utils::{AdmissibleSetSearch, SearchBudget, SearchOutcome},
};

/// A solver used to solve queries for the complete semantics.
///
/// A complete extension is an admissible set of arguments that contains every argument it defends.
/// Complete extensions are enumerated by a depth-first search rooted at the grounded extension (see [`SearchBudget`]).
///
/// If the search budget is exhausted, the complete extensions found so far are returned together with the grounded extension,
/// and the result is flagged as approximate.
pub struct CompleteSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    budget: SearchBudget,
}

impl<'a, T> CompleteSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the complete semantics, using the default search budget.
    ///
    /// # Example
    ///
    /// ```
    /// # use transarg::aa::{AAFramework, LabelType};
    /// # use transarg::solvers::{CompleteSemanticsSolver, ExtensionEnumerator};
    /// fn count_extensions<T>(af: &AAFramework<T>) -> usize where T: LabelType {
    ///     let solver = CompleteSemanticsSolver::new(af);
    ///     solver.enumerate_extensions().len()
    /// }
    /// # assert_eq!(1, count_extensions::<usize>(&AAFramework::default()));
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_budget(af, SearchBudget::default())
    }

    /// Builds a new solver dedicated to the complete semantics, using the given search budget.
    pub fn new_with_budget(af: &'a AAFramework<T>, budget: SearchBudget) -> Self {
        Self { af, budget }
    }
}

impl<'a, T> ExtensionEnumerator<'a, T> for CompleteSemanticsSolver<'a, T>
where
    T: LabelType + 'a,
{
    fn enumerate_extensions(&self) -> ExtensionSet<'a, T> {
        complete_extensions(self.af, &AdmissibleSetSearch::new(self.af, self.budget).run())
    }
}

pub(crate) fn complete_extensions<'a, T>(
    af: &'a AAFramework<T>,
    outcome: &SearchOutcome,
) -> ExtensionSet<'a, T>
where
    T: LabelType,
{
    let mut extensions = outcome
        .complete
        .iter()
        .map(|m| Extension::from_membership(af, m))
        .collect::<Vec<_>>();
    if outcome.truncated {
        extensions.push(Extension::from_membership(af, &outcome.grounded));
    }
    ExtensionSet::new(extensions, outcome.truncated)
}
