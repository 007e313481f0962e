use lazy_static::lazy_static;
use std::collections::{BTreeMap, HashMap};
use strum_macros::{AsRefStr, Display, EnumIter};

/// A travel mode.
///
/// The declaration order is used to break ties between modes.
#[derive(AsRefStr, Display, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    /// Driving a car
    Car,
    /// Taking buses, trams or trains
    PublicTransport,
    /// Walking
    Walk,
    /// Cycling
    Bike,
}

/// Tells whether an argument speaks for or against a travel mode.
#[derive(AsRefStr, Display, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// The argument supports the mode
    Pro,
    /// The argument opposes the mode
    Con,
}

const DEFAULT_CLASSIFICATION: [(&str, Mode, Polarity); 32] = [
    ("available", Mode::Car, Polarity::Pro),
    ("comfort", Mode::Car, Polarity::Pro),
    ("time-saver", Mode::Car, Polarity::Pro),
    ("family-friendly", Mode::Car, Polarity::Pro),
    ("carries-load", Mode::Car, Polarity::Pro),
    ("long-trip", Mode::Car, Polarity::Pro),
    ("car-comfort", Mode::Car, Polarity::Pro),
    ("dry-car", Mode::Car, Polarity::Pro),
    ("expensive", Mode::Car, Polarity::Con),
    ("pollution", Mode::Car, Polarity::Con),
    ("traffic-jam", Mode::Car, Polarity::Con),
    ("parking-cost", Mode::Car, Polarity::Con),
    ("no-driving", Mode::PublicTransport, Polarity::Pro),
    ("no-parking-needed", Mode::PublicTransport, Polarity::Pro),
    ("dense-network", Mode::PublicTransport, Polarity::Pro),
    ("wait-time", Mode::PublicTransport, Polarity::Con),
    ("overcrowded", Mode::PublicTransport, Polarity::Con),
    ("unreliable", Mode::PublicTransport, Polarity::Con),
    ("fixed-schedule", Mode::PublicTransport, Polarity::Con),
    ("free", Mode::Walk, Polarity::Pro),
    ("short-distance", Mode::Walk, Polarity::Pro),
    ("relaxing", Mode::Walk, Polarity::Pro),
    ("too-slow", Mode::Walk, Polarity::Con),
    ("long-walk", Mode::Walk, Polarity::Con),
    ("fast-city", Mode::Bike, Polarity::Pro),
    ("avoids-traffic", Mode::Bike, Polarity::Pro),
    ("eco-friendly", Mode::Bike, Polarity::Pro),
    ("bike-lanes", Mode::Bike, Polarity::Pro),
    ("tiring", Mode::Bike, Polarity::Con),
    ("low-health", Mode::Bike, Polarity::Con),
    ("rain-danger", Mode::Bike, Polarity::Con),
    ("safer-than-bike", Mode::Bike, Polarity::Con),
];

lazy_static! {
    static ref DEFAULT_MODE_ARGUMENT_MAP: ModeArgumentMap = {
        let mut map = ModeArgumentMap::empty();
        DEFAULT_CLASSIFICATION
            .iter()
            .for_each(|(label, mode, polarity)| map.insert(label, *mode, *polarity));
        map
    };
    static ref DEFAULT_MODE_PRIORS: ModePriors = ModePriors::new(0.40, 0.20, 0.05, 0.08);
}

/// Maps argument labels to the mode they speak for or against.
///
/// Arguments with no entry in the map are not counted by the decision aggregator.
/// The default map classifies the arguments produced by the [FrameworkBuilder](crate::travel::FrameworkBuilder).
#[derive(Debug, Clone, PartialEq)]
pub struct ModeArgumentMap {
    classification: HashMap<String, (Mode, Polarity)>,
}

impl ModeArgumentMap {
    /// Builds a map with no entry.
    pub fn empty() -> Self {
        Self {
            classification: HashMap::new(),
        }
    }

    /// Sets the mode and polarity of an argument label, replacing any previous entry.
    pub fn insert(&mut self, label: &str, mode: Mode, polarity: Polarity) {
        self.classification
            .insert(label.to_string(), (mode, polarity));
    }

    /// Returns the mode and polarity of an argument label, if it is classified.
    ///
    /// # Example
    ///
    /// ```
    /// # use transarg::travel::{Mode, ModeArgumentMap, Polarity};
    /// let map = ModeArgumentMap::default();
    /// assert_eq!(Some((Mode::Walk, Polarity::Con)), map.classify("too-slow"));
    /// assert_eq!(None, map.classify("unknown"));
    /// ```
    pub fn classify(&self, label: &str) -> Option<(Mode, Polarity)> {
        self.classification.get(label).copied()
    }

    /// Returns the number of classified labels.
    pub fn len(&self) -> usize {
        self.classification.len()
    }

    /// Returns `true` iff no label is classified.
    pub fn is_empty(&self) -> bool {
        self.classification.is_empty()
    }
}

impl Default for ModeArgumentMap {
    fn default() -> Self {
        DEFAULT_MODE_ARGUMENT_MAP.clone()
    }
}

/// The prior weight of each mode, added to its averaged score.
#[derive(Debug, Clone, PartialEq)]
pub struct ModePriors {
    priors: BTreeMap<Mode, f64>,
}

impl ModePriors {
    /// Builds new priors.
    pub fn new(car: f64, public_transport: f64, walk: f64, bike: f64) -> Self {
        let priors = [
            (Mode::Car, car),
            (Mode::PublicTransport, public_transport),
            (Mode::Walk, walk),
            (Mode::Bike, bike),
        ]
        .into_iter()
        .collect();
        Self { priors }
    }

    /// Returns the prior of a mode.
    pub fn get(&self, mode: Mode) -> f64 {
        self.priors.get(&mode).copied().unwrap_or_default()
    }
}

impl Default for ModePriors {
    fn default() -> Self {
        DEFAULT_MODE_PRIORS.clone()
    }
}
