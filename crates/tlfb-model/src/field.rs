//! Session property field identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the eight settable session properties.
///
/// `days` is not a field: it is derived from `start`/`end` and has no setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Subject,
    Record,
    Timepoint,
    Pid,
    Start,
    End,
    Keyfield,
    Staff,
}

impl Field {
    /// All settable fields in declaration order.
    pub const ALL: [Field; 8] = [
        Field::Subject,
        Field::Record,
        Field::Timepoint,
        Field::Pid,
        Field::Start,
        Field::End,
        Field::Keyfield,
        Field::Staff,
    ];

    /// The REDCap identifier set. All three arrive together or not at all.
    pub const IDENTIFIERS: [Field; 3] = [Field::Record, Field::Pid, Field::Timepoint];

    /// Internal property name.
    pub const fn name(self) -> &'static str {
        match self {
            Field::Subject => "subject",
            Field::Record => "record",
            Field::Timepoint => "timepoint",
            Field::Pid => "pid",
            Field::Start => "start",
            Field::End => "end",
            Field::Keyfield => "keyfield",
            Field::Staff => "staff",
        }
    }

    /// Whether this field belongs to the REDCap identifier set.
    pub const fn is_identifier(self) -> bool {
        matches!(self, Field::Record | Field::Pid | Field::Timepoint)
    }

    /// Parse an internal property name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
