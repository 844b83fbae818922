//! Temperature conversion rules
//!
//! Temperature scales have no shared linear factor, so every directed pair
//! is listed explicitly, identities included.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

use TemperatureUnit::{Celsius, Fahrenheit, Kelvin};

type Rule = (TemperatureUnit, TemperatureUnit, fn(f64) -> f64);

// Use explicit parentheses to keep the (x * 9/5) + 32 order
static RULES: [Rule; 9] = [
    (Celsius, Celsius, |x| x),
    (Celsius, Fahrenheit, |x| (x * 9.0 / 5.0) + 32.0),
    (Celsius, Kelvin, |x| x + 273.15),
    (Fahrenheit, Fahrenheit, |x| x),
    (Fahrenheit, Celsius, |x| (x - 32.0) * 5.0 / 9.0),
    (Fahrenheit, Kelvin, |x| (x - 32.0) * 5.0 / 9.0 + 273.15),
    (Kelvin, Kelvin, |x| x),
    (Kelvin, Celsius, |x| x - 273.15),
    (Kelvin, Fahrenheit, |x| (x - 273.15) * 9.0 / 5.0 + 32.0),
];

/// Apply the rule for `from -> to`, or `None` if the pair has no rule
pub fn convert(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> Option<f64> {
    RULES
        .iter()
        .find(|(f, t, _)| *f == from && *t == to)
        .map(|(_, _, rule)| rule(value))
}
