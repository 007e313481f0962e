use super::ExtensionEnumerator;
use crate::{
    aa::{AAFramework, Extension, ExtensionSet, LabelType},
    utils::{AdmissibleSetSearch, SearchBudget, SearchOutcome},
};

/// A solver used to solve queries for the preferred semantics.
///
/// A preferred extension is a maximal (w.r.t. set inclusion) admissible set of arguments.
/// Since each admissible set is included in a complete one, preferred extensions are the maximal complete extensions.
///
/// If the search budget is exhausted, the largest admissible set found so far is returned as the only extension,
/// and the result is flagged as approximate.
pub struct PreferredSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    budget: SearchBudget,
}

impl<'a, T> PreferredSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the preferred semantics, using the default search budget.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_budget(af, SearchBudget::default())
    }

    /// Builds a new solver dedicated to the preferred semantics, using the given search budget.
    pub fn new_with_budget(af: &'a AAFramework<T>, budget: SearchBudget) -> Self {
        Self { af, budget }
    }
}

impl<'a, T> ExtensionEnumerator<'a, T> for PreferredSemanticsSolver<'a, T>
where
    T: LabelType + 'a,
{
    fn enumerate_extensions(&self) -> ExtensionSet<'a, T> {
        preferred_extensions(self.af, &AdmissibleSetSearch::new(self.af, self.budget).run())
    }
}

pub(crate) fn preferred_extensions<'a, T>(
    af: &'a AAFramework<T>,
    outcome: &SearchOutcome,
) -> ExtensionSet<'a, T>
where
    T: LabelType,
{
    if outcome.truncated {
        let best = Extension::from_membership(af, &outcome.best_admissible);
        return ExtensionSet::new(vec![best], true);
    }
    let complete = outcome
        .complete
        .iter()
        .map(|m| Extension::from_membership(af, m))
        .collect::<Vec<_>>();
    ExtensionSet::new(maximal_extensions(complete), false)
}

fn maximal_extensions<T>(extensions: Vec<Extension<'_, T>>) -> Vec<Extension<'_, T>>
where
    T: LabelType,
{
    let is_maximal = |e: &Extension<T>| {
        !extensions
            .iter()
            .any(|other| other.len() > e.len() && e.is_subset_of(other))
    };
    extensions
        .iter()
        .filter(|e| is_maximal(*e))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{AspartixReader, InstanceReader};
    use crate::solvers::{CredulousAcceptanceComputer, SingleExtensionComputer, SkepticalAcceptanceComputer};

    fn read(instance: &str) -> AAFramework<String> {
        AspartixReader::default()
            .read(&mut instance.as_bytes())
            .unwrap()
    }

    #[test]
    fn test_mutual_attack() {
        let af = read("arg(a).\narg(b).\natt(a,b).\natt(b,a).\n");
        let solver = PreferredSemanticsSolver::new(&af);
        let ids = solver
            .enumerate_extensions()
            .iter()
            .map(|e| e.ids())
            .collect::<Vec<Vec<usize>>>();
        assert_eq!(vec![vec![0], vec![1]], ids);
        assert_eq!(vec![0], solver.compute_one_extension().unwrap().ids());
        let a = af.argument_set().get_argument(&"a".to_string()).unwrap();
        assert!(solver.is_credulously_accepted(a));
        assert!(!solver.is_skeptically_accepted(a));
    }

    #[test]
    fn test_self_attack_and_chain() {
        let af = read("arg(a).\narg(b).\narg(c).\natt(a,a).\natt(a,b).\natt(b,c).\n");
        let extensions = PreferredSemanticsSolver::new(&af).enumerate_extensions();
        assert_eq!(1, extensions.len());
        assert!(extensions.canonical().unwrap().is_empty());
    }

    #[test]
    fn test_exhausted_budget_returns_best_admissible() {
        let af = read("arg(a).\narg(b).\narg(c).\narg(d).\natt(a,b).\natt(b,a).\natt(c,d).\natt(d,c).\n");
        let extensions = PreferredSemanticsSolver::new_with_budget(&af, SearchBudget::new(5))
            .enumerate_extensions();
        assert!(extensions.is_approximate());
        assert_eq!(1, extensions.len());
        assert_eq!(vec![0, 2], extensions.canonical().unwrap().ids());
    }
}
