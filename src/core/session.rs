//! Per-session converter state
//!
//! A session owns its history and the current selection (category, units,
//! value). Sessions share nothing, so separate users get separate sessions.

use serde::{Deserialize, Serialize};

use crate::core::features::unit_converter::{self, registry, Category};
use crate::core::history::{ConversionHistory, ConversionRecord};
use crate::shared::error::{ConversionError, ConversionResult};
use crate::shared::errors::{CommandError, CommandResult};
use crate::shared::settings::ConverterSettings;

/// What the user has picked so far; units are canonical names
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub category: Option<Category>,
    pub from_unit: Option<String>,
    pub to_unit: Option<String>,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct ConverterSession {
    history: ConversionHistory,
    selection: Selection,
    defaults: Selection,
}

impl ConverterSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the preferred category and units in `settings`
    pub fn with_settings(settings: &ConverterSettings) -> CommandResult<Self> {
        let prefs = &settings.preferences;
        let mut session = Self::new();

        if let Some(category) = &prefs.default_category {
            session.select_category(category)?;
        }
        if let Some(unit) = &prefs.default_from_unit {
            session.select_from_unit(unit)?;
        }
        if let Some(unit) = &prefs.default_to_unit {
            session.select_to_unit(unit)?;
        }

        session.defaults = session.selection.clone();
        Ok(session)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn history(&self) -> &ConversionHistory {
        &self.history
    }

    /// History display strings, most recent last
    pub fn get_history(&self) -> Vec<String> {
        self.history.entries()
    }

    /// Pick a category; switching category drops the unit picks
    pub fn select_category(&mut self, name: &str) -> ConversionResult<Category> {
        let category: Category = name.parse()?;
        if self.selection.category != Some(category) {
            self.selection.from_unit = None;
            self.selection.to_unit = None;
        }
        self.selection.category = Some(category);
        Ok(category)
    }

    /// Pick the source unit; fails with `InvalidCategory` before a category is picked
    pub fn select_from_unit(&mut self, name: &str) -> ConversionResult<&'static str> {
        let unit = resolve_unit(self.selection.category, name)?;
        self.selection.from_unit = Some(unit.to_string());
        Ok(unit)
    }

    pub fn select_to_unit(&mut self, name: &str) -> ConversionResult<&'static str> {
        let unit = resolve_unit(self.selection.category, name)?;
        self.selection.to_unit = Some(unit.to_string());
        Ok(unit)
    }

    /// Apply several picks at once, all or nothing
    ///
    /// Every provided field is validated against a copy of the selection;
    /// the session only changes when all of them are valid.
    pub fn update_selection(
        &mut self,
        category: Option<&str>,
        from_unit: Option<&str>,
        to_unit: Option<&str>,
        value: Option<f64>,
    ) -> ConversionResult<()> {
        let mut candidate = self.selection.clone();

        if let Some(name) = category {
            let category: Category = name.parse()?;
            if candidate.category != Some(category) {
                candidate.from_unit = None;
                candidate.to_unit = None;
            }
            candidate.category = Some(category);
        }
        if let Some(name) = from_unit {
            candidate.from_unit = Some(resolve_unit(candidate.category, name)?.to_string());
        }
        if let Some(name) = to_unit {
            candidate.to_unit = Some(resolve_unit(candidate.category, name)?.to_string());
        }
        if let Some(value) = value {
            candidate.value = Some(value);
        }

        self.selection = candidate;
        Ok(())
    }

    pub fn set_value(&mut self, value: f64) {
        self.selection.value = Some(value);
    }

    /// Convert the current selection and record it
    ///
    /// Fails with `IncompleteFields` unless value, category and both units
    /// have been provided.
    pub fn convert_selection(&mut self) -> CommandResult<&ConversionRecord> {
        let Selection { category, from_unit, to_unit, value } = self.selection.clone();
        match (value, category, from_unit, to_unit) {
            (Some(value), Some(category), Some(from), Some(to)) => {
                Ok(self.convert_and_record(value, &from, &to, category)?)
            }
            _ => Err(CommandError::IncompleteFields),
        }
    }

    /// Convert, remember the inputs as the current selection, and record it
    pub fn convert_and_record(
        &mut self,
        value: f64,
        from_unit: &str,
        to_unit: &str,
        category: Category,
    ) -> ConversionResult<&ConversionRecord> {
        let from = registry::lookup(category, from_unit)?.name;
        let to = registry::lookup(category, to_unit)?.name;
        let result = unit_converter::convert(value, from, to, category)?;

        self.selection = Selection {
            category: Some(category),
            from_unit: Some(from.to_string()),
            to_unit: Some(to.to_string()),
            value: Some(value),
        };

        Ok(self.history.record(value, from, to, result, category))
    }

    /// Append an already computed conversion to the history
    pub fn record_conversion(
        &mut self,
        value: f64,
        from_unit: &str,
        to_unit: &str,
        result: f64,
        category: Category,
    ) {
        self.history.record(value, from_unit, to_unit, result, category);
    }

    /// Clear history and restore the starting selection
    pub fn reset(&mut self) {
        self.history.clear();
        self.selection = self.defaults.clone();
        tracing::debug!("[ConverterSession] Reset");
    }
}

fn resolve_unit(category: Option<Category>, name: &str) -> ConversionResult<&'static str> {
    let category = category.ok_or_else(|| ConversionError::InvalidCategory("no category selected".to_string()))?;
    Ok(registry::lookup(category, name)?.name)
}
