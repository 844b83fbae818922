//! Free-text conversion queries
//!
//! Parses inputs like "5 km to mi", "100 celsius in fahrenheit" or
//! "2,5 hours -> minutes time" into a fully resolved request.
//!
//! A comma is read as a decimal separator. "1,000" could be either a
//! thousands group or a decimal, so a comma followed by exactly three
//! digits is rejected.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{registry, Category};
use crate::shared::error::ConversionError;
use crate::shared::errors::{CommandError, CommandResult};

const ERR_CANNOT_PARSE_QUERY: &str = "Could not parse conversion from text";

// Using expect is safe here since the pattern is a compile-time constant
static RE_QUERY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*([+-]?\d+(?:[.,]\d+)?(?:e[+-]?\d+)?)\s*(.+?)\s+(?:to|in|into|->)\s+(.+?)(?:\s+\(?(length|weight|temperature|time)\)?)?\s*$",
    )
    .expect("Failed to compile query pattern")
});

/// A parsed query with canonical unit names
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionQuery {
    pub value: f64,
    pub from_unit: &'static str,
    pub to_unit: &'static str,
    pub category: Category,
}

/// Parse a conversion query, inferring the category when it is omitted
pub fn parse_conversion_query(text: &str) -> CommandResult<ConversionQuery> {
    let caps = RE_QUERY
        .captures(text)
        .ok_or_else(|| CommandError::InvalidInput(format!("{}: '{}'", ERR_CANNOT_PARSE_QUERY, text.trim())))?;

    let number = &caps[1];
    if number.split_once(',').is_some_and(|(_, frac)| frac.len() == 3) {
        return Err(CommandError::InvalidInput(format!(
            "Ambiguous number '{}', use '.' for decimals and no thousands separators",
            number
        )));
    }

    let value: f64 = number
        .replace(',', ".")
        .parse()
        .map_err(|_| CommandError::InvalidInput(format!("Invalid number: {}", &caps[1])))?;
    let from = caps[2].trim();
    let to = caps[3].trim();

    let category = match caps.get(4) {
        Some(m) => m.as_str().parse::<Category>()?,
        None => infer_category(from, to)?,
    };

    let from_def = registry::lookup(category, from)?;
    let to_def = registry::lookup(category, to)?;

    tracing::debug!(
        "[parse_conversion_query] {} {} -> {} ({}) from '{}'",
        value, from_def.name, to_def.name, category, text
    );

    Ok(ConversionQuery {
        value,
        from_unit: from_def.name,
        to_unit: to_def.name,
        category,
    })
}

/// The unique category holding both units
pub fn infer_category(from: &str, to: &str) -> CommandResult<Category> {
    let candidates: Vec<Category> = Category::ALL
        .into_iter()
        .filter(|c| registry::lookup(*c, from).is_ok() && registry::lookup(*c, to).is_ok())
        .collect();

    match candidates.as_slice() {
        [category] => Ok(*category),
        [] => {
            // Blame the first unit that fails to line up
            let err = match Category::ALL.into_iter().find(|c| registry::lookup(*c, from).is_ok()) {
                Some(category) => ConversionError::invalid_unit(to, category),
                None => ConversionError::invalid_unit(from, "any"),
            };
            Err(err.into())
        }
        _ => Err(CommandError::InvalidInput(format!(
            "Ambiguous units '{}' and '{}', please name a category",
            from, to
        ))),
    }
}
