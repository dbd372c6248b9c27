//! Problems detected while reading the URL query.
//!
//! Each variant carries only its needed data. None of them are fatal: the
//! session always starts, and each issue is surfaced as a user alert.

use serde::Serialize;

/// Alert text for a partial REDCap identifier set.
pub const PARTIAL_IDENTIFIERS_MESSAGE: &str =
    "Some but not all REDCap parameters received. REDCap may be misconfigured.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryIssue {
    /// A recognized parameter had a non-empty value that failed its validator.
    Misspecified { parameter: &'static str },
    /// One or two of `record`, `pid`, `event` were accepted, not all three.
    PartialIdentifiers { present: Vec<&'static str> },
    /// A parameter outside the recognized table (strict mode only).
    UnknownParameter { parameter: String },
}

impl QueryIssue {
    /// User-facing alert text.
    pub fn message(&self) -> String {
        match self {
            Self::Misspecified { parameter } => {
                format!("{parameter} misspecified in the URL query.")
            }
            Self::PartialIdentifiers { .. } => PARTIAL_IDENTIFIERS_MESSAGE.to_string(),
            Self::UnknownParameter { parameter } => {
                format!("Unknown parameter specified in URL query: {parameter}")
            }
        }
    }

    /// Parameter the issue concerns, if it concerns a single one.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::Misspecified { parameter } => Some(parameter),
            Self::UnknownParameter { parameter } => Some(parameter),
            Self::PartialIdentifiers { .. } => None,
        }
    }
}
