use super::ExtensionEnumerator;
use crate::{
    aa::{AAFramework, Extension, ExtensionSet, LabelType},
    utils::{self, AdmissibleSetSearch, SearchBudget, SearchOutcome},
};

/// A solver used to solve queries for the stable semantics.
///
/// A stable extension is a conflict-free set of arguments attacking every argument outside of it.
/// Each stable extension is complete, so they are selected among the complete extensions.
/// A framework may admit no stable extension; in this case the result is empty.
///
/// If the search budget is exhausted, the stable extensions found so far are returned.
/// If none was found, the largest admissible set found so far is returned instead.
/// In both cases, the result is flagged as approximate.
pub struct StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    budget: SearchBudget,
}

impl<'a, T> StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the stable semantics, using the default search budget.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_budget(af, SearchBudget::default())
    }

    /// Builds a new solver dedicated to the stable semantics, using the given search budget.
    pub fn new_with_budget(af: &'a AAFramework<T>, budget: SearchBudget) -> Self {
        Self { af, budget }
    }
}

impl<'a, T> ExtensionEnumerator<'a, T> for StableSemanticsSolver<'a, T>
where
    T: LabelType + 'a,
{
    fn enumerate_extensions(&self) -> ExtensionSet<'a, T> {
        stable_extensions(self.af, &AdmissibleSetSearch::new(self.af, self.budget).run())
    }
}

pub(crate) fn stable_extensions<'a, T>(
    af: &'a AAFramework<T>,
    outcome: &SearchOutcome,
) -> ExtensionSet<'a, T>
where
    T: LabelType,
{
    let mut stable = outcome
        .complete
        .iter()
        .filter(|m| utils::is_stable(af, m))
        .map(|m| Extension::from_membership(af, m))
        .collect::<Vec<_>>();
    if outcome.truncated && stable.is_empty() {
        stable.push(Extension::from_membership(af, &outcome.best_admissible));
    }
    ExtensionSet::new(stable, outcome.truncated)
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
    fn test_no_stable_extension() {
        let af = read("arg(a).\narg(b).\narg(c).\natt(a,b).\natt(b,c).\natt(c,a).\n");
        let solver = StableSemanticsSolver::new(&af);
        let extensions = solver.enumerate_extensions();
        assert!(extensions.is_empty());
        assert!(!extensions.is_approximate());
        assert!(solver.compute_one_extension().is_none());
        let a = af.argument_set().get_argument(&"a".to_string()).unwrap();
        assert!(!solver.is_credulously_accepted(a));
        assert!(solver.is_skeptically_accepted(a));
    }

    #[test]
    fn test_mutual_attack_with_chain() {
        let af = read("arg(a).\narg(b).\narg(c).\natt(a,b).\natt(b,a).\natt(b,c).\n");
        let ids = StableSemanticsSolver::new(&af)
            .enumerate_extensions()
            .iter()
            .map(|e| e.ids())
            .collect::<Vec<Vec<usize>>>();
        assert_eq!(vec![vec![0, 2], vec![1]], ids);
    }

    #[test]
    fn test_self_attack_prevents_stability() {
        let af = read("arg(a).\narg(b).\natt(a,a).\n");
        assert!(StableSemanticsSolver::new(&af).enumerate_extensions().is_empty());
    }

    #[test]
    fn test_exhausted_budget() {
        let af = read("arg(a).\narg(b).\narg(c).\narg(d).\natt(a,b).\natt(b,a).\natt(c,d).\natt(d,c).\n");
        let extensions = StableSemanticsSolver::new_with_budget(&af, SearchBudget::new(5))
            .enumerate_extensions();
        assert!(extensions.is_approximate());
        assert_eq!(vec![0, 2], extensions.canonical().unwrap().ids());
        let extensions = StableSemanticsSolver::new_with_budget(&af, SearchBudget::new(3))
            .enumerate_extensions();
        assert!(extensions.is_approximate());
        assert!(extensions.canonical().unwrap().is_empty());
    }
}
