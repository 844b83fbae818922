//! Unit converter feature
//!
//! Converts values between units of one category. Length, Weight and Time
//! are linear (`value * factor(to) / factor(from)`); Temperature uses an
//! explicit table of directed rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::error::{ConversionError, ConversionResult};

pub mod parsing;
pub mod registry;
pub mod temperature;

pub use parsing::{infer_category, parse_conversion_query, ConversionQuery};
pub use registry::{Scale, UnitDefinition};
pub use temperature::TemperatureUnit;

/// Decimal places used when displaying a converted value
pub const DISPLAY_PRECISION: usize = 4;

/// Unit categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Time,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 4] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Time,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Time => "Time",
        }
    }

    /// Canonical unit names of this category, in declaration order
    pub fn units(&self) -> Vec<&'static str> {
        registry::units_for(*self).iter().map(|def| def.name).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ConversionError::InvalidCategory(s.to_string()))
    }
}

/// All categories, in display order
pub fn list_categories() -> Vec<Category> {
    Category::ALL.to_vec()
}

/// Unit names for a category given by name
pub fn list_units(category: &str) -> ConversionResult<Vec<&'static str>> {
    Ok(category.parse::<Category>()?.units())
}

/// Convert `value` from one unit to another within `category`
///
/// Unit names are resolved case-insensitively, symbols and plurals included.
/// Fails with `InvalidUnit` if either unit is outside the category and with
/// `UnsupportedConversion` if no rule connects the pair.
pub fn convert(value: f64, from_unit: &str, to_unit: &str, category: Category) -> ConversionResult<f64> {
    let from = registry::lookup(category, from_unit)?;
    let to = registry::lookup(category, to_unit)?;

    let unsupported = || ConversionError::UnsupportedConversion {
        from: from.name.to_string(),
        to: to.name.to_string(),
        category: category.to_string(),
    };

    let result = match (from.scale, to.scale) {
        (Scale::Factor(from_factor), Scale::Factor(to_factor)) => value * to_factor / from_factor,
        (Scale::Temperature(from_temp), Scale::Temperature(to_temp)) => {
            temperature::convert(value, from_temp, to_temp).ok_or_else(unsupported)?
        }
        _ => return Err(unsupported()),
    };

    tracing::debug!(
        "[convert] {} {} -> {} {} ({})",
        value, from.name, result, to.name, category
    );

    Ok(result)
}

/// Result banner text, e.g. "Converted Value: 3.1069 Mile"
pub fn format_result(result: f64, to_unit: &str) -> String {
    format!("Converted Value: {:.*} {}", DISPLAY_PRECISION, result, to_unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_list_categories_order() {
        assert_eq!(
            list_categories(),
            vec![Category::Length, Category::Weight, Category::Temperature, Category::Time]
        );
    }

    #[test]
    fn test_list_units_declaration_order() {
        assert_eq!(
            list_units("Length").unwrap(),
            vec!["Meter", "Kilometer", "Centimeter", "Millimeter", "Mile", "Yard", "Foot", "Inch"]
        );
        assert_eq!(
            list_units("weight").unwrap(),
            vec!["Kilogram", "Gram", "Milligram", "Pound", "Ounce", "Ton"]
        );
        assert_eq!(list_units("Temperature").unwrap(), vec!["Celsius", "Fahrenheit", "Kelvin"]);
        assert_eq!(list_units("Time").unwrap(), vec!["Second", "Minute", "Hour", "Day"]);
    }

    #[test]
    fn test_list_units_unknown_category() {
        assert_eq!(
            list_units("Volume"),
            Err(ConversionError::InvalidCategory("Volume".to_string()))
        );
    }

    #[test]
    fn test_kilometer_to_mile() {
        let result = convert(5.0, "Kilometer", "Mile", Category::Length).unwrap();
        assert!(approx(result, 3.106855));
        assert_eq!(format_result(result, "Mile"), "Converted Value: 3.1069 Mile");
    }

    #[test]
    fn test_linear_identity() {
        for category in [Category::Length, Category::Weight, Category::Time] {
            for unit in category.units() {
                assert!(approx(convert(12.5, unit, unit, category).unwrap(), 12.5), "{}", unit);
            }
        }
    }

    #[test]
    fn test_weight_and_time() {
        assert!(approx(convert(1.0, "Kilogram", "Pound", Category::Weight).unwrap(), 2.20462));
        assert!(approx(convert(2.0, "Ton", "Kilogram", Category::Weight).unwrap(), 2000.0));
        assert!(approx(convert(1.0, "Day", "Hour", Category::Time).unwrap(), 24.0));
        assert!(approx(convert(90.0, "Minute", "Hour", Category::Time).unwrap(), 1.5));
    }

    #[test]
    fn test_temperature_through_convert() {
        assert_eq!(convert(0.0, "Celsius", "Fahrenheit", Category::Temperature).unwrap(), 32.0);
        assert_eq!(convert(100.0, "Celsius", "Fahrenheit", Category::Temperature).unwrap(), 212.0);
        assert_eq!(convert(0.0, "Celsius", "Kelvin", Category::Temperature).unwrap(), 273.15);
        assert_eq!(convert(32.0, "Fahrenheit", "Celsius", Category::Temperature).unwrap(), 0.0);
        assert_eq!(convert(451.0, "Fahrenheit", "Fahrenheit", Category::Temperature).unwrap(), 451.0);
        assert_eq!(convert(5.0, "Kelvin", "Kelvin", Category::Temperature).unwrap(), 5.0);
    }

    #[test]
    fn test_negative_values_convert() {
        assert!(approx(convert(-2.0, "Kilometer", "Meter", Category::Length).unwrap(), -2000.0));
        assert!(approx(convert(-1.5, "Hour", "Minute", Category::Time).unwrap(), -90.0));
        assert!(approx(convert(-40.0, "Fahrenheit", "Celsius", Category::Temperature).unwrap(), -40.0));
    }

    #[test]
    fn test_unit_outside_category() {
        let err = convert(1.0, "Meter", "Celsius", Category::Length).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidUnit { ref unit, .. } if unit == "Celsius"));

        let err = convert(1.0, "Gram", "Meter", Category::Length).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidUnit { ref unit, .. } if unit == "Gram"));
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("TEMPERATURE".parse::<Category>().unwrap(), Category::Temperature);
        assert_eq!(" time ".parse::<Category>().unwrap(), Category::Time);
        assert!("Speed".parse::<Category>().is_err());
        assert_eq!(Category::Weight.to_string(), "Weight");
    }
}
