//! Session properties store.
//!
//! `SessionProperties` is the canonical state of a data-entry session. It is
//! created once with empty fields and then changed only through
//! [`SessionProperties::merge`], which also recomputes the derived `days`
//! span. No validation happens here; callers hand in patches whose values
//! already passed the query or form validators.

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::span::{UNDEFINED_SPAN_DAYS, span_days};

/// Identifying metadata and reportable period of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionProperties {
    subject: String,
    record: String,
    timepoint: String,
    pid: String,
    start: String,
    end: String,
    keyfield: String,
    staff: String,
    days: i64,
}

impl SessionProperties {
    /// Empty properties with `days = 0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field. Unset fields are empty strings.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Subject => &self.subject,
            Field::Record => &self.record,
            Field::Timepoint => &self.timepoint,
            Field::Pid => &self.pid,
            Field::Start => &self.start,
            Field::End => &self.end,
            Field::Keyfield => &self.keyfield,
            Field::Staff => &self.staff,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Subject => &mut self.subject,
            Field::Record => &mut self.record,
            Field::Timepoint => &mut self.timepoint,
            Field::Pid => &mut self.pid,
            Field::Start => &mut self.start,
            Field::End => &mut self.end,
            Field::Keyfield => &mut self.keyfield,
            Field::Staff => &mut self.staff,
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn record(&self) -> &str {
        &self.record
    }

    pub fn timepoint(&self) -> &str {
        &self.timepoint
    }

    pub fn pid(&self) -> &str {
        &self.pid
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    pub fn keyfield(&self) -> &str {
        &self.keyfield
    }

    pub fn staff(&self) -> &str {
        &self.staff
    }

    /// Whole days between `start` and `end`, `0` when either is not a date.
    pub fn days(&self) -> i64 {
        self.days
    }

    /// Whether `start` and `end` currently form a computable span.
    pub fn has_span(&self) -> bool {
        span_days(&self.start, &self.end).is_some()
    }

    /// Overwrite every field present in `patch`, then recompute `days`.
    ///
    /// Fields absent from the patch keep their current value, so an empty
    /// patch only refreshes the derived span.
    pub fn merge(&mut self, patch: PropertiesPatch) {
        for (field, value) in patch.into_values() {
            *self.slot_mut(field) = value;
        }
        self.days = span_days(&self.start, &self.end).unwrap_or(UNDEFINED_SPAN_DAYS);
    }

    /// Number of REDCap identifier fields that hold a value.
    pub fn identifier_count(&self) -> usize {
        Field::IDENTIFIERS
            .into_iter()
            .filter(|field| !self.get(*field).is_empty())
            .count()
    }
}

/// Partial update of [`SessionProperties`].
///
/// Each field is optional; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertiesPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timepoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyfield: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff: Option<String>,
}

impl PropertiesPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Subject => self.subject.as_deref(),
            Field::Record => self.record.as_deref(),
            Field::Timepoint => self.timepoint.as_deref(),
            Field::Pid => self.pid.as_deref(),
            Field::Start => self.start.as_deref(),
            Field::End => self.end.as_deref(),
            Field::Keyfield => self.keyfield.as_deref(),
            Field::Staff => self.staff.as_deref(),
        }
    }

    pub fn contains(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|field| !self.contains(field))
    }

    /// Present fields in [`Field::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Subject => &mut self.subject,
            Field::Record => &mut self.record,
            Field::Timepoint => &mut self.timepoint,
            Field::Pid => &mut self.pid,
            Field::Start => &mut self.start,
            Field::End => &mut self.end,
            Field::Keyfield => &mut self.keyfield,
            Field::Staff => &mut self.staff,
        }
    }

    fn into_values(mut self) -> Vec<(Field, String)> {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.slot_mut(field).take().map(|value| (field, value)))
            .collect()
    }
}
