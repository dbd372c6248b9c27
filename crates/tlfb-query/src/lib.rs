//! URL query handling for timeline followback sessions.
//!
//! The codec is the only place untyped external input is accepted. Values
//! leave this crate as a typed [`tlfb_model::PropertiesPatch`] that has
//! already passed the per-parameter validators.

pub mod codec;
pub mod form;
pub mod issue;
pub mod params;
pub mod query;
pub mod validators;

pub use codec::{ParseOptions, ParsedQuery, parse, parse_with, write};
pub use form::validate_patch;
pub use issue::{PARTIAL_IDENTIFIERS_MESSAGE, QueryIssue};
pub use params::{QUERY_PARAMETERS, QueryParam, param_by_name, param_for_field};
pub use query::QueryString;
pub use validators::{Validator, is_date, is_integer, is_token};
