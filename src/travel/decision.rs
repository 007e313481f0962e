use super::{Mode, ModeArgumentMap, ModePriors, Polarity};
use crate::{
    aa::{Extension, Semantics},
    solvers::AllExtensions,
};
use log::{debug, info};
use std::{collections::BTreeMap, fmt::Display};
use strum::IntoEnumIterator;

/// Computes the score of a mode given its numbers of accepted pro and con arguments.
///
/// The score is `(p - c/2) / (p + c)`, or zero if no argument is accepted.
/// It always lies between `-0.5` and `1`.
///
/// # Example
///
/// ```
/// # use transarg::travel::scr;
/// assert_eq!(1., scr(3, 0));
/// assert_eq!(0.25, scr(1, 1));
/// assert_eq!(0., scr(0, 0));
/// ```
pub fn scr(pros: usize, cons: usize) -> f64 {
    if pros + cons == 0 {
        return 0.;
    }
    let (p, c) = (pros as f64, cons as f64);
    (p - 0.5 * c) / (p + c)
}

fn round2(value: f64) -> f64 {
    (value * 100.).round() / 100.
}

/// The outcome of a decision: the share of each mode and the selected one.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionResult {
    percentages: BTreeMap<Mode, f64>,
    selected_mode: Mode,
    approximate: bool,
}

impl DecisionResult {
    /// Returns the percentage of a mode, rounded to two decimals.
    pub fn percentage(&self, mode: Mode) -> f64 {
        self.percentages.get(&mode).copied().unwrap_or_default()
    }

    /// Returns the percentages of all the modes, in declaration order.
    ///
    /// Their sum is 100, up to rounding errors.
    pub fn percentages(&self) -> &BTreeMap<Mode, f64> {
        &self.percentages
    }

    /// Returns the mode with the highest percentage.
    pub fn selected_mode(&self) -> Mode {
        self.selected_mode
    }

    /// Returns `true` iff some of the extensions the decision relies on are approximate.
    pub fn is_approximate(&self) -> bool {
        self.approximate
    }
}

impl Display for DecisionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shares = self
            .percentages
            .iter()
            .map(|(m, p)| format!("{}={:.2}%", m, p))
            .collect::<Vec<String>>();
        write!(f, "{} ({})", self.selected_mode, shares.join(", "))
    }
}

/// Turns the extensions of a travel framework into a decision.
///
/// For each semantics, a representative extension is chosen: the grounded extension, or the canonical extension for the other semantics.
/// A semantics with no extension contributes nothing.
/// The score of each mode (see [`scr`]) is averaged over the four semantics, then added to the prior of the mode.
/// Each combined score is divided by their sum to give a percentage, so a mode with a negative combined score gets a negative percentage.
/// If the sum is not positive, the modes share 100% evenly.
/// Ties between the highest percentages are broken by the declaration order of the modes.
#[derive(Default)]
pub struct DecisionAggregator {
    mode_map: ModeArgumentMap,
    priors: ModePriors,
}

impl DecisionAggregator {
    /// Builds an aggregator using the default mode map and priors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an aggregator using the given mode map and priors.
    pub fn new_with_configuration(mode_map: ModeArgumentMap, priors: ModePriors) -> Self {
        Self { mode_map, priors }
    }

    /// Returns the representative extension of a semantics, if any.
    pub fn representative<'a, 'b>(
        extensions: &'b AllExtensions<'a, String>,
        semantics: Semantics,
    ) -> Option<&'b Extension<'a, String>> {
        match semantics {
            Semantics::GR => Some(extensions.grounded_extension()),
            _ => extensions.extensions_for(semantics).canonical(),
        }
    }

    fn count(&self, extension: &Extension<String>) -> BTreeMap<Mode, (usize, usize)> {
        let mut counts = Mode::iter()
            .map(|m| (m, (0, 0)))
            .collect::<BTreeMap<Mode, (usize, usize)>>();
        for arg in extension.iter() {
            if let Some((mode, polarity)) = self.mode_map.classify(arg.label()) {
                let entry = counts.entry(mode).or_insert((0, 0));
                match polarity {
                    Polarity::Pro => entry.0 += 1,
                    Polarity::Con => entry.1 += 1,
                }
            }
        }
        counts
    }

    /// Computes the decision associated with the extensions of a travel framework.
    pub fn decide(&self, extensions: &AllExtensions<'_, String>) -> DecisionResult {
        let mut raw_scores = Mode::iter().map(|m| (m, 0.)).collect::<BTreeMap<Mode, f64>>();
        for semantics in Semantics::iter() {
            let extension = match Self::representative(extensions, semantics) {
                Some(e) => e,
                None => {
                    debug!("no {} extension; the semantics does not contribute", semantics.as_ref());
                    continue;
                }
            };
            for (mode, (pros, cons)) in self.count(extension) {
                debug!(
                    "{}: {} has {} accepted pro(s) and {} accepted con(s)",
                    semantics.as_ref(),
                    mode,
                    pros,
                    cons
                );
                *raw_scores.entry(mode).or_default() += scr(pros, cons);
            }
        }
        let n_semantics = Semantics::iter().count() as f64;
        let combined = raw_scores
            .iter()
            .map(|(m, s)| (*m, s / n_semantics + self.priors.get(*m)))
            .collect::<BTreeMap<Mode, f64>>();
        let total = combined.values().sum::<f64>();
        let percentages = combined
            .iter()
            .map(|(m, c)| {
                let share = if total > 0. {
                    100. * c / total
                } else {
                    100. / combined.len() as f64
                };
                (*m, round2(share))
            })
            .collect::<BTreeMap<Mode, f64>>();
        let selected_mode = percentages
            .iter()
            .fold(None, |best: Option<(Mode, f64)>, (m, p)| match best {
                Some((_, best_p)) if best_p >= *p => best,
                _ => Some((*m, *p)),
            })
            .map_or(Mode::Car, |(m, _)| m);
        let result = DecisionResult {
            percentages,
            selected_mode,
            approximate: extensions.is_approximate(),
        };
        info!("decision: {}", result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{AspartixReader, InstanceReader};
    use crate::solvers::SemanticsEngine;

    #[test]
    fn test_scr_bounds() {
        for p in 0..10 {
            for c in 0..10 {
                let s = scr(p, c);
                assert!((-1. ..=1.).contains(&s));
                if p + c > 0 {
                    assert!(s >= -0.5);
                }
            }
        }
        assert_eq!(-0.5, scr(0, 4));
    }

    #[test]
    fn test_round2() {
        assert_eq!(29.53, round2(29.526));
        assert_eq!(0., round2(0.001));
    }

    #[test]
    fn test_decide_on_small_framework() {
        let instance = "arg(free).\narg(too-slow).\narg(tiring).\natt(free,too-slow).\n";
        let af = AspartixReader::default()
            .read(&mut instance.as_bytes())
            .unwrap();
        let all = SemanticsEngine::new(&af).compute_all();
        let result = DecisionAggregator::new().decide(&all);
        // WALK: 1 + 0.05; BIKE: -0.5 + 0.08; CAR: 0.40; PUBLIC_TRANSPORT: 0.20; sum 1.23
        assert_eq!(Mode::Walk, result.selected_mode());
        assert_eq!(85.37, result.percentage(Mode::Walk));
        assert_eq!(-34.15, result.percentage(Mode::Bike));
        assert_eq!(32.52, result.percentage(Mode::Car));
        assert_eq!(16.26, result.percentage(Mode::PublicTransport));
        let sum = Mode::iter().map(|m| result.percentage(m)).sum::<f64>();
        assert!((sum - 100.).abs() < 0.05);
        assert!(!result.is_approximate());
    }

    #[test]
    fn test_even_split_when_the_sum_is_not_positive() {
        let af = AspartixReader::default()
            .read(&mut "arg(tiring).\narg(wait-time).\n".as_bytes())
            .unwrap();
        let all = SemanticsEngine::new(&af).compute_all();
        let aggregator = DecisionAggregator::new_with_configuration(
            ModeArgumentMap::default(),
            ModePriors::new(0.1, 0.1, 0.1, 0.1),
        );
        let result = aggregator.decide(&all);
        for mode in Mode::iter() {
            assert_eq!(25., result.percentage(mode));
        }
        assert_eq!(Mode::Car, result.selected_mode());
    }

    #[test]
    fn test_even_split_when_all_scores_are_null() {
        let af = AspartixReader::default()
            .read(&mut "arg(x).\n".as_bytes())
            .unwrap();
        let all = SemanticsEngine::new(&af).compute_all();
        let aggregator = DecisionAggregator::new_with_configuration(
            ModeArgumentMap::empty(),
            ModePriors::new(0., 0., 0., 0.),
        );
        let result = aggregator.decide(&all);
        for mode in Mode::iter() {
            assert_eq!(25., result.percentage(mode));
        }
        assert_eq!(Mode::Car, result.selected_mode());
    }

    #[test]
    fn test_ties_follow_declaration_order() {
        let af = AspartixReader::default()
            .read(&mut "arg(x).\n".as_bytes())
            .unwrap();
        let all = SemanticsEngine::new(&af).compute_all();
        let aggregator = DecisionAggregator::new_with_configuration(
            ModeArgumentMap::empty(),
            ModePriors::new(0.1, 0.3, 0.1, 0.3),
        );
        let result = aggregator.decide(&all);
        assert_eq!(Mode::PublicTransport, result.selected_mode());
        assert_eq!(37.5, result.percentage(Mode::Bike));
    }

    #[test]
    fn test_missing_stable_extension_contributes_nothing() {
        let af = AspartixReader::default()
            .read(&mut "arg(free).\narg(tiring).\natt(tiring,tiring).\n".as_bytes())
            .unwrap();
        let all = SemanticsEngine::new(&af).compute_all();
        assert!(all.extensions_for(Semantics::ST).is_empty());
        let aggregator = DecisionAggregator::new_with_configuration(
            ModeArgumentMap::default(),
            ModePriors::new(0., 0., 0., 0.),
        );
        let result = aggregator.decide(&all);
        assert_eq!(100., result.percentage(Mode::Walk));
        assert_eq!(Mode::Walk, result.selected_mode());
    }

    #[test]
    fn test_display() {
        let af = AspartixReader::default()
            .read(&mut "arg(x).\n".as_bytes())
            .unwrap();
        let all = SemanticsEngine::new(&af).compute_all();
        let result = DecisionAggregator::new_with_configuration(
            ModeArgumentMap::empty(),
            ModePriors::new(1., 1., 1., 1.),
        )
        .decide(&all);
        assert_eq!(
            "CAR (CAR=25.00%, PUBLIC_TRANSPORT=25.00%, WALK=25.00%, BIKE=25.00%)",
            result.to_string()
        );
    }
}
