use super::ExtensionEnumerator;
use crate::{
    aa::{AAFramework, Extension, ExtensionSet, LabelType},
    utils,
};

/// A solver used to solve queries for the grounded semantics.
///
/// The (unique) grounded extension is the minimal complete extension (see [CompleteSemanticsSolver](crate::solvers::CompleteSemanticsSolver) for more information).
/// It is computed in time polynomial in the size of the framework, so the result is never approximate.
///
/// When a certificate is provided, the certificate is the grounded extension itself.
pub struct GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the grounded semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use transarg::aa::{AAFramework, LabelType};
    /// # use transarg::solvers::{SingleExtensionComputer, GroundedSemanticsSolver};
    /// fn search_one_extension<T>(af: &AAFramework<T>) where T: LabelType {
    ///     let solver = GroundedSemanticsSolver::new(af);
    ///     let ext = solver.compute_one_extension().unwrap();
    ///     println!("found the grounded extension: {:?}", ext);
    /// }
    /// # search_one_extension::<usize>(&AAFramework::default());
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }

    /// Computes the grounded extension.
    pub fn grounded_extension(&self) -> Extension<'a, T> {
        Extension::from_membership(self.af, &utils::grounded_membership(self.af))
    }
}

impl<'a, T> ExtensionEnumerator<'a, T> for GroundedSemanticsSolver<'a, T>
where
    T: LabelType + 'a,
{
    fn enumerate_extensions(&self) -> ExtensionSet<'a, T> {
        ExtensionSet::singleton(self.grounded_extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{AspartixReader, InstanceReader};
    use crate::solvers::{
        CredulousAcceptanceComputer, SingleExtensionComputer, SkepticalAcceptanceComputer,
    };

    const CHAIN: &str = "arg(rain).\narg(bike-fast).\narg(car-slow).\natt(rain,bike-fast).\natt(bike-fast,car-slow).\n";

    fn read(instance: &str) -> AAFramework<String> {
        AspartixReader::default()
            .read(&mut instance.as_bytes())
            .unwrap()
    }

    #[test]
    fn test_grounded_solver_on_a_chain() {
        let af = read(CHAIN);
        let solver = GroundedSemanticsSolver::new(&af);
        assert_eq!(vec![0, 2], solver.compute_one_extension().unwrap().ids());
        let accepted = af
            .argument_set()
            .iter()
            .map(|a| {
                (
                    solver.is_credulously_accepted(a),
                    solver.is_skeptically_accepted(a),
                )
            })
            .collect::<Vec<(bool, bool)>>();
        assert_eq!(vec![(true, true), (false, false), (true, true)], accepted);
    }

    #[test]
    fn test_certificates_are_the_grounded_extension() {
        let af = read(CHAIN);
        let solver = GroundedSemanticsSolver::new(&af);
        let rain = af.argument_set().get_argument_by_id(0);
        let bike = af.argument_set().get_argument_by_id(1);
        let (status, certificate) = solver.is_credulously_accepted_with_certificate(rain);
        assert!(status);
        assert_eq!(vec![0, 2], certificate.unwrap().ids());
        assert!(solver.is_credulously_accepted_with_certificate(bike).1.is_none());
        assert!(solver.is_skeptically_accepted_with_certificate(rain).1.is_none());
        let (status, certificate) = solver.is_skeptically_accepted_with_certificate(bike);
        assert!(!status);
        assert_eq!(vec![0, 2], certificate.unwrap().ids());
    }

    #[test]
    fn test_mutual_attack_gives_empty_extension() {
        let af = read("arg(car).\narg(bike).\natt(car,bike).\natt(bike,car).\n");
        let solver = GroundedSemanticsSolver::new(&af);
        assert!(solver.grounded_extension().is_empty());
        let car = af.argument_set().get_argument_by_id(0);
        assert!(!solver.is_credulously_accepted(car));
    }

    #[test]
    fn test_empty_framework() {
        let af = AAFramework::<String>::default();
        let extensions = GroundedSemanticsSolver::new(&af).enumerate_extensions();
        assert_eq!(1, extensions.len());
        assert!(extensions.canonical().unwrap().is_empty());
        assert!(!extensions.is_approximate());
    }
}
