use crate::aa::{Argument, Extension, ExtensionSet, LabelType};

/// A trait for solvers able to compute all the extensions of a framework under a semantics.
///
/// Implementing this trait gives access to [`SingleExtensionComputer`], [`CredulousAcceptanceComputer`] and [`SkepticalAcceptanceComputer`].
pub trait ExtensionEnumerator<'a, T>
where
    T: LabelType + 'a,
{
    /// Computes the extensions.
    ///
    /// If the computation could not be completed in the allowed number of steps,
    /// the result is flagged as approximate (see [`ExtensionSet::is_approximate`]).
    fn enumerate_extensions(&self) -> ExtensionSet<'a, T>;
}

/// A trait for solvers able to compute an extension.
pub trait SingleExtensionComputer<'a, T>
where
    T: LabelType + 'a,
{
    /// Computes a single extension.
    ///
    /// In case the problem admits no extension, [Option::None] is returned.
    /// Otherwise, the canonical extension is returned.
    fn compute_one_extension(&self) -> Option<Extension<'a, T>>;
}

impl<'a, T, S> SingleExtensionComputer<'a, T> for S
where
    T: LabelType + 'a,
    S: ExtensionEnumerator<'a, T>,
{
    fn compute_one_extension(&self) -> Option<Extension<'a, T>> {
        self.enumerate_extensions().canonical().cloned()
    }
}

/// A trait for solvers able to check the credulous acceptance of an argument.
pub trait CredulousAcceptanceComputer<'a, T>
where
    T: LabelType + 'a,
{
    /// Checks the credulous acceptance of an argument.
    fn is_credulously_accepted(&self, arg: &Argument<T>) -> bool {
        self.is_credulously_accepted_with_certificate(arg).0
    }

    /// Checks the credulous acceptance of an argument, and provide a certificate if it is the case.
    ///
    /// The certificate is set to `None` if the result of the test is `false`.
    /// Otherwise, the certificate is an extension containing the argument.
    fn is_credulously_accepted_with_certificate(
        &self,
        arg: &Argument<T>,
    ) -> (bool, Option<Extension<'a, T>>);
}

impl<'a, T, S> CredulousAcceptanceComputer<'a, T> for S
where
    T: LabelType + 'a,
    S: ExtensionEnumerator<'a, T>,
{
    fn is_credulously_accepted_with_certificate(
        &self,
        arg: &Argument<T>,
    ) -> (bool, Option<Extension<'a, T>>) {
        let certificate = self.enumerate_extensions().credulous_certificate(arg).cloned();
        (certificate.is_some(), certificate)
    }
}

/// A trait for solvers able to check the skeptical acceptance of an argument.
pub trait SkepticalAcceptanceComputer<'a, T>
where
    T: LabelType + 'a,
{
    /// Checks the skeptical acceptance of an argument.
    fn is_skeptically_accepted(&self, arg: &Argument<T>) -> bool {
        self.is_skeptically_accepted_with_certificate(arg).0
    }

    /// Checks the skeptical acceptance of an argument, and provide a certificate if it is not the case.
    ///
    /// The certificate is set to `None` if the result of the test is `true`.
    /// Otherwise, the certificate is an extension that does not contain the argument.
    fn is_skeptically_accepted_with_certificate(
        &self,
        arg: &Argument<T>,
    ) -> (bool, Option<Extension<'a, T>>);
}

impl<'a, T, S> SkepticalAcceptanceComputer<'a, T> for S
where
    T: LabelType + 'a,
    S: ExtensionEnumerator<'a, T>,
{
    fn is_skeptically_accepted_with_certificate(
        &self,
        arg: &Argument<T>,
    ) -> (bool, Option<Extension<'a, T>>) {
        let counterexample = self
            .enumerate_extensions()
            .skeptical_counterexample(arg)
            .cloned();
        (counterexample.is_none(), counterexample)
    }
}
