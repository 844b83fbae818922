//! Static unit registry
//!
//! One table per category, in declaration order. Linear units carry a scale
//! factor relative to the category's base unit (Meter, Kilogram, Second);
//! temperature units carry no factor and are resolved pairwise.

use super::Category;
use super::temperature::TemperatureUnit;
use crate::shared::error::{ConversionError, ConversionResult};

/// How a unit relates to the rest of its category
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    /// Units of this type per one base unit
    Factor(f64),
    Temperature(TemperatureUnit),
}

/// Unit definition
#[derive(Debug, Clone, Copy)]
pub struct UnitDefinition {
    pub name: &'static str,
    pub symbol: &'static str,
    pub scale: Scale,
    aliases: &'static [&'static str],
}

impl UnitDefinition {
    const fn linear(
        name: &'static str,
        symbol: &'static str,
        factor: f64,
        aliases: &'static [&'static str],
    ) -> Self {
        Self { name, symbol, scale: Scale::Factor(factor), aliases }
    }

    const fn temperature(
        name: &'static str,
        symbol: &'static str,
        unit: TemperatureUnit,
        aliases: &'static [&'static str],
    ) -> Self {
        Self { name, symbol, scale: Scale::Temperature(unit), aliases }
    }

    fn matches(&self, input: &str) -> bool {
        self.name.eq_ignore_ascii_case(input)
            || self.symbol.eq_ignore_ascii_case(input)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(input))
    }
}

// Length (base: meter)
static LENGTH_UNITS: &[UnitDefinition] = &[
    UnitDefinition::linear("Meter", "m", 1.0, &["meters", "metre", "metres"]),
    UnitDefinition::linear("Kilometer", "km", 0.001, &["kilometers", "kilometre", "kilometres"]),
    UnitDefinition::linear("Centimeter", "cm", 100.0, &["centimeters", "centimetre", "centimetres"]),
    UnitDefinition::linear("Millimeter", "mm", 1000.0, &["millimeters", "millimetre", "millimetres"]),
    UnitDefinition::linear("Mile", "mi", 0.000621371, &["miles"]),
    UnitDefinition::linear("Yard", "yd", 1.09361, &["yards"]),
    UnitDefinition::linear("Foot", "ft", 3.28084, &["feet", "'"]),
    UnitDefinition::linear("Inch", "in", 39.3701, &["inches", "\""]),
];

// Weight (base: kilogram). Ton is the metric tonne.
static WEIGHT_UNITS: &[UnitDefinition] = &[
    UnitDefinition::linear("Kilogram", "kg", 1.0, &["kilograms", "kgs"]),
    UnitDefinition::linear("Gram", "g", 1000.0, &["grams"]),
    UnitDefinition::linear("Milligram", "mg", 1e6, &["milligrams"]),
    UnitDefinition::linear("Pound", "lb", 2.20462, &["pounds", "lbs"]),
    UnitDefinition::linear("Ounce", "oz", 35.274, &["ounces"]),
    UnitDefinition::linear("Ton", "t", 1e-3, &["tons", "tonne", "tonnes"]),
];

static TEMPERATURE_UNITS: &[UnitDefinition] = &[
    UnitDefinition::temperature("Celsius", "C", TemperatureUnit::Celsius, &["°C", "degC"]),
    UnitDefinition::temperature("Fahrenheit", "F", TemperatureUnit::Fahrenheit, &["°F", "degF"]),
    UnitDefinition::temperature("Kelvin", "K", TemperatureUnit::Kelvin, &[]),
];

// Time (base: second)
static TIME_UNITS: &[UnitDefinition] = &[
    UnitDefinition::linear("Second", "s", 1.0, &["seconds", "sec", "secs"]),
    UnitDefinition::linear("Minute", "min", 1.0 / 60.0, &["minutes", "mins"]),
    UnitDefinition::linear("Hour", "h", 1.0 / 3600.0, &["hours", "hr", "hrs"]),
    UnitDefinition::linear("Day", "d", 1.0 / 86400.0, &["days"]),
];

/// All units of a category, in declaration order
pub fn units_for(category: Category) -> &'static [UnitDefinition] {
    match category {
        Category::Length => LENGTH_UNITS,
        Category::Weight => WEIGHT_UNITS,
        Category::Temperature => TEMPERATURE_UNITS,
        Category::Time => TIME_UNITS,
    }
}

/// Resolve a unit name, symbol or alias within one category
///
/// Matching is case-insensitive; the returned definition carries the
/// canonical name.
pub fn lookup(category: Category, unit: &str) -> ConversionResult<&'static UnitDefinition> {
    let needle = unit.trim();
    units_for(category)
        .iter()
        .find(|def| def.matches(needle))
        .ok_or_else(|| ConversionError::invalid_unit(unit, category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_canonical_and_alias() {
        assert_eq!(lookup(Category::Length, "Kilometer").unwrap().name, "Kilometer");
        assert_eq!(lookup(Category::Length, "km").unwrap().name, "Kilometer");
        assert_eq!(lookup(Category::Length, "FEET").unwrap().name, "Foot");
        assert_eq!(lookup(Category::Weight, " lbs ").unwrap().name, "Pound");
        assert_eq!(lookup(Category::Temperature, "°F").unwrap().name, "Fahrenheit");
    }

    #[test]
    fn test_lookup_is_scoped_to_category() {
        let err = lookup(Category::Length, "Celsius").unwrap_err();
        assert_eq!(
            err,
            ConversionError::InvalidUnit {
                unit: "Celsius".to_string(),
                category: "Length".to_string(),
            }
        );
        assert!(lookup(Category::Time, "m").is_err());
    }

    #[test]
    fn test_aliases_do_not_collide_across_categories() {
        for category in Category::ALL {
            for def in units_for(category) {
                for other in Category::ALL.iter().filter(|c| **c != category) {
                    assert!(
                        lookup(*other, def.name).is_err() && lookup(*other, def.symbol).is_err(),
                        "{} resolves in both {} and {}",
                        def.name,
                        category,
                        other
                    );
                }
            }
        }
    }

    #[test]
    fn test_linear_factors_are_positive() {
        for category in [Category::Length, Category::Weight, Category::Time] {
            for def in units_for(category) {
                match def.scale {
                    Scale::Factor(f) => assert!(f > 0.0, "{} has factor {}", def.name, f),
                    Scale::Temperature(_) => panic!("{} should be linear", def.name),
                }
            }
        }
    }
}
