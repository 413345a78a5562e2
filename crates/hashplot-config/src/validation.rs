//! Runtime validation using the `validator` derive macros.

use crate::schema::PlotSettings;
use hashplot_common::{PlotError, Result};
use regex::Regex;
use std::sync::LazyLock;
use validator::Validate;

/// Regex pattern for validating hex color codes (e.g., #FFFFFF, #1f77b4)
pub static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid hex color regex pattern")
});

/// Settings validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates settings, naming the first offending field in the error.
    pub fn validate(settings: &PlotSettings) -> Result<()> {
        settings.validate().map_err(|errors| {
            let field = first_field(&errors);
            match field {
                Some(field) => PlotError::validation_field(errors.to_string(), field),
                None => PlotError::validation(errors.to_string()),
            }
        })
    }
}

/// Dotted path of the first failing field, e.g. `figure.dpi`.
fn first_field(errors: &validator::ValidationErrors) -> Option<String> {
    use validator::ValidationErrorsKind;

    let (name, kind) = errors.errors().iter().min_by_key(|(name, _)| **name)?;
    match kind {
        ValidationErrorsKind::Field(_) => Some((*name).to_string()),
        ValidationErrorsKind::Struct(inner) => {
            first_field(inner).map(|sub| format!("{name}.{sub}"))
        }
        ValidationErrorsKind::List(_) => Some((*name).to_string()),
    }
}
