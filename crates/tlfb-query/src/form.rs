//! Validation of manually entered property values.
//!
//! Form input goes through the same per-parameter validators as the URL
//! before it may be merged.

use tlfb_model::{PropertiesPatch, Result, TlfbError};

use crate::params::param_for_field;

/// Check every value present in `patch`.
///
/// Returns the first failure in field order. Errors name the URL parameter
/// (`event`, not `timepoint`) so messages match the query vocabulary.
pub fn validate_patch(patch: &PropertiesPatch) -> Result<()> {
    for (field, value) in patch.iter() {
        let param = param_for_field(field);
        if value.is_empty() {
            return Err(TlfbError::MissingField { name: param.name });
        }
        if !param.validator.accepts(value) {
            return Err(TlfbError::InvalidField {
                name: param.name,
                value: value.to_string(),
            });
        }
    }
    Ok(())
}
