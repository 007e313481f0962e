use super::{Context, DecisionAggregator, DecisionResult, FrameworkBuilder};
use crate::{
    aa::{AAFramework, Semantics},
    solvers::SemanticsEngine,
    utils::SearchBudget,
};
use anyhow::Result;
use strum::IntoEnumIterator;

/// Chooses a travel mode for a context.
///
/// This object chains the [`FrameworkBuilder`], the [`SemanticsEngine`] and the [`DecisionAggregator`].
/// Each call builds a fresh framework; nothing is kept between two calls.
///
/// # Example
///
/// ```
/// # use transarg::travel::{Context, Mode, ModeChooser, Weather};
/// let context = Context::new(10., Weather::Sunny, true, false).unwrap();
/// let result = ModeChooser::new(context).decide().unwrap();
/// assert_eq!(Mode::Car, result.selected_mode());
/// ```
pub struct ModeChooser {
    context: Context,
    builder: FrameworkBuilder,
    aggregator: DecisionAggregator,
    budget: SearchBudget,
}

impl ModeChooser {
    /// Builds a chooser for a context, using the default configuration.
    pub fn new(context: Context) -> Self {
        Self {
            context,
            builder: FrameworkBuilder::new(),
            aggregator: DecisionAggregator::new(),
            budget: SearchBudget::default(),
        }
    }

    /// Sets the budget of the extension searches.
    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Sets the aggregator turning extensions into decisions.
    pub fn with_aggregator(mut self, aggregator: DecisionAggregator) -> Self {
        self.aggregator = aggregator;
        self
    }

    /// Returns the context of the decision.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Builds the framework associated with the context.
    pub fn framework(&self) -> Result<AAFramework<String>> {
        self.builder.build(&self.context)
    }

    /// Computes the decision for the context.
    pub fn decide(&self) -> Result<DecisionResult> {
        let af = self.framework()?;
        let extensions = SemanticsEngine::new_with_budget(&af, self.budget).compute_all();
        Ok(self.aggregator.decide(&extensions))
    }

    /// Computes the representative extension of each semantics, as lists of argument labels.
    ///
    /// The representative of the grounded semantics is the grounded extension;
    /// for the other ones, it is the canonical extension, or `None` if the semantics admits no extension.
    pub fn compare_semantics(&self) -> Result<Vec<(Semantics, Option<Vec<String>>)>> {
        let af = self.framework()?;
        let extensions = SemanticsEngine::new_with_budget(&af, self.budget).compute_all();
        Ok(Semantics::iter()
            .map(|s| {
                let labels = DecisionAggregator::representative(&extensions, s)
                    .map(|e| e.iter().map(|a| a.label().clone()).collect());
                (s, labels)
            })
            .collect())
    }
}
