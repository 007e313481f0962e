use super::{
    complete_semantics_solver::complete_extensions,
    preferred_semantics_solver::preferred_extensions,
    stable_semantics_solver::stable_extensions,
};
use crate::{
    aa::{AAFramework, Extension, ExtensionSet, LabelType, Semantics},
    utils::{AdmissibleSetSearch, SearchBudget},
};
use log::info;

/// The extensions of a framework under the four supported semantics.
///
/// Built by [`SemanticsEngine::compute_all`].
#[derive(Debug, Clone)]
pub struct AllExtensions<'a, T>
where
    T: LabelType,
{
    grounded_extension: Extension<'a, T>,
    grounded: ExtensionSet<'a, T>,
    complete: ExtensionSet<'a, T>,
    preferred: ExtensionSet<'a, T>,
    stable: ExtensionSet<'a, T>,
    search_steps: usize,
}

impl<'a, T> AllExtensions<'a, T>
where
    T: LabelType,
{
    /// Returns the grounded extension.
    pub fn grounded_extension(&self) -> &Extension<'a, T> {
        &self.grounded_extension
    }

    /// Returns the extensions computed for the given semantics.
    ///
    /// For the grounded semantics, this is a singleton.
    pub fn extensions_for(&self, semantics: Semantics) -> &ExtensionSet<'a, T> {
        match semantics {
            Semantics::GR => &self.grounded,
            Semantics::CO => &self.complete,
            Semantics::PR => &self.preferred,
            Semantics::ST => &self.stable,
        }
    }

    /// Returns `true` iff the extensions of at least one semantics are approximate.
    pub fn is_approximate(&self) -> bool {
        [&self.complete, &self.preferred, &self.stable]
            .iter()
            .any(|e| e.is_approximate())
    }

    /// Returns the number of nodes visited by the admissible set search the extensions come from.
    pub fn search_steps(&self) -> usize {
        self.search_steps
    }
}

/// Computes the extensions of a framework under all the supported semantics.
///
/// A single admissible set search, bounded by the budget, feeds the complete, preferred and stable semantics.
/// The four extension sets are then derived from its outcome in parallel on the rayon thread pool.
pub struct SemanticsEngine<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    budget: SearchBudget,
}

impl<'a, T> SemanticsEngine<'a, T>
where
    T: LabelType + Sync,
{
    /// Builds a new engine using the default search budget.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_budget(af, SearchBudget::default())
    }

    /// Builds a new engine using the given search budget.
    pub fn new_with_budget(af: &'a AAFramework<T>, budget: SearchBudget) -> Self {
        Self { af, budget }
    }

    /// Computes the grounded, complete, preferred and stable extensions.
    ///
    /// # Example
    ///
    /// ```
    /// # use transarg::aa::{AAFramework, ArgumentSet, Semantics};
    /// # use transarg::solvers::SemanticsEngine;
    /// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
    /// af.new_attack(&"a", &"b").unwrap();
    /// let all = SemanticsEngine::new(&af).compute_all();
    /// assert_eq!(vec![0], all.grounded_extension().ids());
    /// assert_eq!(1, all.extensions_for(Semantics::ST).len());
    /// ```
    pub fn compute_all(&self) -> AllExtensions<'a, T> {
        let af = self.af;
        let outcome = AdmissibleSetSearch::new(af, self.budget).run();
        let outcome = &outcome;
        let ((grounded_extension, complete), (preferred, stable)) = rayon::join(
            || {
                rayon::join(
                    || Extension::from_membership(af, &outcome.grounded),
                    || complete_extensions(af, outcome),
                )
            },
            || {
                rayon::join(
                    || preferred_extensions(af, outcome),
                    || stable_extensions(af, outcome),
                )
            },
        );
        info!(
            "computed {} complete, {} preferred and {} stable extension(s); the grounded extension has {} argument(s)",
            complete.len(),
            preferred.len(),
            stable.len(),
            grounded_extension.len()
        );
        AllExtensions {
            grounded: ExtensionSet::singleton(grounded_extension.clone()),
            grounded_extension,
            complete,
            preferred,
            stable,
            search_steps: outcome.steps,
        }
    }
}
