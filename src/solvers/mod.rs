//! Solvers computing the extensions of a framework under the supported semantics.

mod complete_semantics_solver;
pub use complete_semantics_solver::CompleteSemanticsSolver;

mod grounded_semantics_solver;
pub use grounded_semantics_solver::GroundedSemanticsSolver;

mod preferred_semantics_solver;
pub use preferred_semantics_solver::PreferredSemanticsSolver;

mod semantics_engine;
pub use semantics_engine::AllExtensions;
pub use semantics_engine::SemanticsEngine;

mod specs;
pub use specs::CredulousAcceptanceComputer;
pub use specs::ExtensionEnumerator;
pub use specs::SingleExtensionComputer;
pub use specs::SkepticalAcceptanceComputer;

mod stable_semantics_solver;
pub use stable_semantics_solver::StableSemanticsSolver;
