//! Shape validators for URL query values.
//!
//! These checks are syntactic only. `is_date` accepts anything shaped like
//! `YYYY-MM-DD`, including impossible dates such as `2022-13-40`.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static INTEGER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("Invalid integer regex"));

static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("Invalid token regex"));

static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Invalid date regex")
});

/// One or more ASCII digits with no sign or separators.
pub fn is_integer(value: &str) -> bool {
    INTEGER_REGEX.is_match(value)
}

/// One or more ASCII letters, digits, or underscores.
pub fn is_token(value: &str) -> bool {
    TOKEN_REGEX.is_match(value)
}

/// `YYYY-MM-DD` by field width only.
pub fn is_date(value: &str) -> bool {
    DATE_REGEX.is_match(value)
}

/// Validator attached to a query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validator {
    Integer,
    Token,
    Date,
}

impl Validator {
    pub fn accepts(self, value: &str) -> bool {
        match self {
            Self::Integer => is_integer(value),
            Self::Token => is_token(value),
            Self::Date => is_date(value),
        }
    }

    /// Human-readable description of the accepted shape.
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Integer => "an unsigned integer",
            Self::Token => "letters, digits, or underscores",
            Self::Date => "a date in YYYY-MM-DD form",
        }
    }
}
