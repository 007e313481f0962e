use anyhow::{anyhow, Result};
use std::fmt::Display;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// The weather conditions of a trip.
///
/// Weather names are read regardless of the case.
#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Weather {
    /// Sunny weather
    Sunny,
    /// Cloudy weather
    Cloudy,
    /// Rainy weather
    Rainy,
}

impl Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// A point on the integer grid of the traffic environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    /// Builds a new position.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the Euclidean distance to another position.
    ///
    /// # Example
    ///
    /// ```
    /// # use transarg::travel::Position;
    /// assert_eq!(5.0, Position::new(0, 0).distance_to(&Position::new(3, 4)));
    /// ```
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The situation of a traveler for which a travel mode must be chosen.
///
/// A context is the only input of a decision; it is never modified once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Context {
    distance: f64,
    weather: Weather,
    is_healthy: bool,
    is_rush_hour: bool,
}

impl Context {
    /// Builds a new context.
    ///
    /// An error is returned if the distance is negative or is not a finite number.
    ///
    /// # Example
    ///
    /// ```
    /// # use transarg::travel::{Context, Weather};
    /// let context = Context::new(10., Weather::Sunny, true, false).unwrap();
    /// assert_eq!(10., context.distance());
    /// assert!(Context::new(-1., Weather::Sunny, true, false).is_err());
    /// ```
    pub fn new(distance: f64, weather: Weather, is_healthy: bool, is_rush_hour: bool) -> Result<Self> {
        if !distance.is_finite() || distance < 0. {
            return Err(anyhow!("invalid distance {}", distance));
        }
        Ok(Self {
            distance,
            weather,
            is_healthy,
            is_rush_hour,
        })
    }

    /// Builds a new context from the start and the destination of the trip.
    ///
    /// The distance is the Euclidean distance between the two positions.
    pub fn from_positions(
        start: &Position,
        destination: &Position,
        weather: Weather,
        is_healthy: bool,
        is_rush_hour: bool,
    ) -> Result<Self> {
        Self::new(start.distance_to(destination), weather, is_healthy, is_rush_hour)
    }

    /// Returns the distance of the trip.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns the weather.
    pub fn weather(&self) -> Weather {
        self.weather
    }

    /// Returns `true` iff the traveler is in good health.
    pub fn is_healthy(&self) -> bool {
        self.is_healthy
    }

    /// Returns `true` iff the trip occurs during rush hour.
    pub fn is_rush_hour(&self) -> bool {
        self.is_rush_hour
    }
}

impl Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "distance={}, weather={}, healthy={}, rush_hour={}",
            self.distance, self.weather, self.is_healthy, self.is_rush_hour
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_weather_from_str() {
        assert_eq!(Weather::Sunny, Weather::from_str("Sunny").unwrap());
        assert_eq!(Weather::Cloudy, Weather::from_str("cloudy").unwrap());
        assert_eq!(Weather::Rainy, Weather::from_str("RAINY").unwrap());
    }

    #[test]
    fn test_unknown_weather() {
        assert!(Weather::from_str("Snowy").is_err());
        assert!(Weather::from_str("").is_err());
    }

    #[test]
    fn test_weather_names_round_trip() {
        for w in Weather::iter() {
            assert_eq!(w, Weather::from_str(w.to_string().as_str()).unwrap());
        }
    }

    #[test]
    fn test_from_positions() {
        let context = Context::from_positions(
            &Position::new(1, 2),
            &Position::new(7, 10),
            Weather::Cloudy,
            false,
            true,
        )
        .unwrap();
        assert_eq!(10., context.distance());
        assert_eq!(Weather::Cloudy, context.weather());
        assert!(!context.is_healthy());
        assert!(context.is_rush_hour());
    }

    #[test]
    fn test_invalid_distances() {
        assert!(Context::new(f64::NAN, Weather::Sunny, true, false).is_err());
        assert!(Context::new(f64::INFINITY, Weather::Sunny, true, false).is_err());
        assert!(Context::new(0., Weather::Sunny, true, false).is_ok());
    }

    #[test]
    fn test_display() {
        let context = Context::new(12.5, Weather::Rainy, true, false).unwrap();
        assert_eq!(
            "distance=12.5, weather=Rainy, healthy=true, rush_hour=false",
            context.to_string()
        );
        assert_eq!("(3, -4)", Position::new(3, -4).to_string());
    }
}
