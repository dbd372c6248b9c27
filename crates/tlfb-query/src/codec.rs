//! Translation between URL query strings and session properties.

use tlfb_model::{Field, PropertiesPatch, SessionProperties};
use tracing::{debug, warn};

use crate::issue::QueryIssue;
use crate::params::{QUERY_PARAMETERS, param_by_name};
use crate::query::QueryString;

/// Options for [`parse_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Report parameters outside the recognized table.
    pub strict: bool,
}

/// Result of reading a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Validated values, keyed by session field.
    pub patch: PropertiesPatch,
    /// URL names of recognized parameters that were absent or empty.
    pub missing: Vec<&'static str>,
    /// Rejected values and cross-field problems, in detection order.
    pub issues: Vec<QueryIssue>,
}

impl ParsedQuery {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

/// Parse with default (lenient) options.
pub fn parse(query: &str) -> ParsedQuery {
    parse_with(query, ParseOptions::default())
}

/// Read recognized parameters from `query`.
///
/// Absent and empty parameters are reported as missing. Present values that
/// fail their validator are reported as [`QueryIssue::Misspecified`] and are
/// neither parsed nor missing.
pub fn parse_with(query: &str, options: ParseOptions) -> ParsedQuery {
    let query = QueryString::parse(query);
    let mut parsed = ParsedQuery::default();

    for param in &QUERY_PARAMETERS {
        match query.get(param.name) {
            None | Some("") => parsed.missing.push(param.name),
            Some(value) if !param.validator.accepts(value) => {
                warn!(
                    parameter = param.name,
                    expected = param.validator.describe(),
                    "rejected URL query parameter"
                );
                parsed.issues.push(QueryIssue::Misspecified {
                    parameter: param.name,
                });
            }
            Some(value) => parsed.patch.set(param.field, value),
        }
    }

    let present: Vec<&'static str> = QUERY_PARAMETERS
        .iter()
        .filter(|param| param.field.is_identifier() && parsed.patch.contains(param.field))
        .map(|param| param.name)
        .collect();
    if !present.is_empty() && present.len() < Field::IDENTIFIERS.len() {
        warn!(present = ?present, "partial REDCap identifier set");
        parsed.issues.push(QueryIssue::PartialIdentifiers { present });
    }

    if options.strict {
        for name in query.names() {
            let reported = parsed
                .issues
                .iter()
                .any(|issue| issue.parameter() == Some(name));
            if param_by_name(name).is_none() && !reported {
                parsed.issues.push(QueryIssue::UnknownParameter {
                    parameter: name.to_string(),
                });
            }
        }
    }

    debug!(
        accepted = parsed.patch.iter().count(),
        missing = parsed.missing.len(),
        issues = parsed.issues.len(),
        "parsed URL query"
    );
    parsed
}

/// Write every recognized parameter from `properties` onto `query`.
///
/// Unrecognized parameters and the position of existing entries are kept.
/// Returns the serialized query without a leading `?`.
pub fn write(properties: &SessionProperties, query: &str) -> String {
    let mut query = QueryString::parse(query);
    for param in &QUERY_PARAMETERS {
        query.set(param.name, properties.get(param.field));
    }
    query.to_string()
}
