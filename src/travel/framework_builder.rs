use super::{Context, Weather};
use crate::aa::{AAFramework, ArgumentSet};
use anyhow::{Context as _, Result};
use lazy_static::lazy_static;
use log::debug;

/// The attacks present whatever the context, in creation order.
const CORE_ATTACKS: [(&str, &str); 19] = [
    ("available", "expensive"),
    ("comfort", "parking-cost"),
    ("time-saver", "parking-cost"),
    ("family-friendly", "free"),
    ("pollution", "comfort"),
    ("carries-load", "too-slow"),
    ("long-trip", "no-driving"),
    ("car-comfort", "rain-danger"),
    ("time-saver", "overcrowded"),
    ("wait-time", "no-driving"),
    ("fixed-schedule", "no-driving"),
    ("no-parking-needed", "expensive"),
    ("dense-network", "wait-time"),
    ("short-distance", "too-slow"),
    ("relaxing", "too-slow"),
    ("tiring", "fast-city"),
    ("avoids-traffic", "tiring"),
    ("eco-friendly", "tiring"),
    ("bike-lanes", "tiring"),
];

/// A group of attacks added only when a condition on the context holds.
struct ConditionalAttacks {
    description: &'static str,
    condition: fn(&Context) -> bool,
    attacks: &'static [(&'static str, &'static str)],
}

lazy_static! {
    static ref CONDITIONAL_ATTACKS: Vec<ConditionalAttacks> = vec![
        ConditionalAttacks {
            description: "traveler in poor health",
            condition: |c| !c.is_healthy(),
            attacks: &[("low-health", "free"), ("low-health", "fast-city")],
        },
        ConditionalAttacks {
            description: "distance above 50",
            condition: |c| c.distance() > 50.,
            attacks: &[("too-slow", "free")],
        },
        ConditionalAttacks {
            description: "distance above 70",
            condition: |c| c.distance() > 70.,
            attacks: &[("long-walk", "free")],
        },
        ConditionalAttacks {
            description: "rush hour",
            condition: |c| c.is_rush_hour(),
            attacks: &[
                ("traffic-jam", "time-saver"),
                ("overcrowded", "no-driving"),
                ("saturated-network", "dense-network"),
            ],
        },
        ConditionalAttacks {
            description: "rainy weather",
            condition: |c| c.weather() == Weather::Rainy,
            attacks: &[
                ("unreliable", "no-driving"),
                ("dry-car", "fast-city"),
                ("safer-than-bike", "rain-danger"),
                ("rain-danger", "fast-city"),
            ],
        },
    ];
}

/// Builds the argumentation framework describing the reasons to choose a travel mode in a given context.
///
/// The framework is made of a set of core attacks, completed by groups of attacks that depend on the context
/// (health of the traveler, distance, rush hour and weather).
/// Arguments are created on their first occurrence in an attack, so their ids follow the order of the attack tables.
///
/// Building twice a framework for the same context gives two identical frameworks.
#[derive(Default)]
pub struct FrameworkBuilder;

impl FrameworkBuilder {
    /// Builds a new framework builder.
    pub fn new() -> Self {
        Self
    }

    /// Builds the framework associated with a context.
    ///
    /// # Example
    ///
    /// ```
    /// # use transarg::travel::{Context, FrameworkBuilder, Weather};
    /// let sunny = Context::new(10., Weather::Sunny, true, false).unwrap();
    /// let rainy = Context::new(10., Weather::Rainy, true, false).unwrap();
    /// let builder = FrameworkBuilder::new();
    /// let sunny_af = builder.build(&sunny).unwrap();
    /// let rainy_af = builder.build(&rainy).unwrap();
    /// assert!(rainy_af.n_attacks() > sunny_af.n_attacks());
    /// ```
    pub fn build(&self, context: &Context) -> Result<AAFramework<String>> {
        let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&[]));
        add_attacks(&mut af, &CORE_ATTACKS)?;
        for group in CONDITIONAL_ATTACKS.iter() {
            if (group.condition)(context) {
                debug!(
                    r#"condition "{}" holds; adding {} attack(s)"#,
                    group.description,
                    group.attacks.len()
                );
                add_attacks(&mut af, group.attacks)
                    .with_context(|| format!(r#"while applying condition "{}""#, group.description))?;
            }
        }
        debug!(
            "built a framework with {} argument(s) and {} attack(s) for context {}",
            af.n_arguments(),
            af.n_attacks(),
            context
        );
        Ok(af)
    }
}

fn add_attacks(af: &mut AAFramework<String>, attacks: &[(&str, &str)]) -> Result<()> {
    attacks.iter().try_for_each(|(from, to)| {
        let attacker = af.new_argument(from.to_string());
        let attacked = af.new_argument(to.to_string());
        af.new_attack_by_ids(attacker, attacked)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(af: &AAFramework<String>) -> Vec<String> {
        af.argument_set().iter().map(|a| a.to_string()).collect()
    }

    fn attacks(af: &AAFramework<String>) -> Vec<(String, String)> {
        af.iter_attacks()
            .map(|att| (att.attacker().to_string(), att.attacked().to_string()))
            .collect()
    }

    fn has_attack(af: &AAFramework<String>, from: &str, to: &str) -> bool {
        attacks(af)
            .iter()
            .any(|(a, b)| a == from && b == to)
    }

    fn base() -> Context {
        Context::new(10., Weather::Sunny, true, false).unwrap()
    }

    #[test]
    fn test_core_only() {
        let af = FrameworkBuilder::new().build(&base()).unwrap();
        assert_eq!(CORE_ATTACKS.len(), af.n_attacks());
        assert_eq!(26, af.n_arguments());
        assert_eq!("available", af.argument_set().get_argument_by_id(0).label());
        assert_eq!("expensive", af.argument_set().get_argument_by_id(1).label());
        assert_eq!("parking-cost", af.argument_set().get_argument_by_id(3).label());
    }

    #[test]
    fn test_cloudy_is_like_sunny() {
        let cloudy = Context::new(10., Weather::Cloudy, true, false).unwrap();
        let builder = FrameworkBuilder::new();
        let af1 = builder.build(&base()).unwrap();
        let af2 = builder.build(&cloudy).unwrap();
        assert_eq!(attacks(&af1), attacks(&af2));
    }

    #[test]
    fn test_build_is_idempotent() {
        let context = Context::new(80., Weather::Rainy, false, true).unwrap();
        let builder = FrameworkBuilder::new();
        let af1 = builder.build(&context).unwrap();
        let af2 = builder.build(&context).unwrap();
        assert_eq!(labels(&af1), labels(&af2));
        assert_eq!(attacks(&af1), attacks(&af2));
    }

    #[test]
    fn test_unhealthy() {
        let context = Context::new(10., Weather::Sunny, false, false).unwrap();
        let af = FrameworkBuilder::new().build(&context).unwrap();
        assert!(has_attack(&af, "low-health", "free"));
        assert!(has_attack(&af, "low-health", "fast-city"));
        assert_eq!(CORE_ATTACKS.len() + 2, af.n_attacks());
    }

    #[test]
    fn test_distance_thresholds() {
        let builder = FrameworkBuilder::new();
        let at_50 = builder
            .build(&Context::new(50., Weather::Sunny, true, false).unwrap())
            .unwrap();
        assert!(!has_attack(&at_50, "too-slow", "free"));
        let at_60 = builder
            .build(&Context::new(60., Weather::Sunny, true, false).unwrap())
            .unwrap();
        assert!(has_attack(&at_60, "too-slow", "free"));
        assert!(!has_attack(&at_60, "long-walk", "free"));
        let at_80 = builder
            .build(&Context::new(80., Weather::Sunny, true, false).unwrap())
            .unwrap();
        assert!(has_attack(&at_80, "too-slow", "free"));
        assert!(has_attack(&at_80, "long-walk", "free"));
    }

    #[test]
    fn test_rush_hour() {
        let context = Context::new(10., Weather::Sunny, true, true).unwrap();
        let af = FrameworkBuilder::new().build(&context).unwrap();
        assert!(has_attack(&af, "traffic-jam", "time-saver"));
        assert!(has_attack(&af, "overcrowded", "no-driving"));
        assert!(has_attack(&af, "saturated-network", "dense-network"));
    }

    #[test]
    fn test_rain() {
        let context = Context::new(10., Weather::Rainy, true, false).unwrap();
        let af = FrameworkBuilder::new().build(&context).unwrap();
        assert!(has_attack(&af, "unreliable", "no-driving"));
        assert!(has_attack(&af, "dry-car", "fast-city"));
        assert!(has_attack(&af, "safer-than-bike", "rain-danger"));
        assert!(has_attack(&af, "rain-danger", "fast-city"));
        assert_eq!(CORE_ATTACKS.len() + 4, af.n_attacks());
    }
}
