//! Travel mode choice based on argumentation.
//!
//! The reasons to choose a travel mode are arguments of a framework built from a [`Context`].
//! The extensions of this framework are then turned into a [`DecisionResult`].

mod context;
pub use context::Context;
pub use context::Position;
pub use context::Weather;

mod decision;
pub use decision::scr;
pub use decision::DecisionAggregator;
pub use decision::DecisionResult;

mod framework_builder;
pub use framework_builder::FrameworkBuilder;

mod mode;
pub use mode::Mode;
pub use mode::ModeArgumentMap;
pub use mode::ModePriors;
pub use mode::Polarity;

mod mode_chooser;
pub use mode_chooser::ModeChooser;
