//! Calendar collaborator interface and construction options.

use serde::Serialize;
use tlfb_model::SessionProperties;

/// Pixels reserved above and below the calendar within the window.
pub const DEFAULT_HEIGHT_OFFSET: u32 = 130;

/// Inclusive reportable period shown by the calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidRange {
    pub start: String,
    pub end: String,
}

impl ValidRange {
    pub fn from_properties(properties: &SessionProperties) -> Self {
        Self {
            start: properties.start().to_string(),
            end: properties.end().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CalendarView {
    #[default]
    DayGridMonth,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderToolbar {
    pub left: String,
    pub right: String,
}

impl Default for HeaderToolbar {
    fn default() -> Self {
        Self {
            left: "title".to_string(),
            right: "prev,next".to_string(),
        }
    }
}

/// Options the calendar is constructed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarOptions {
    pub initial_view: CalendarView,
    pub valid_range: ValidRange,
    pub header_toolbar: HeaderToolbar,
    pub editable: bool,
    pub selectable: bool,
    pub show_non_current_dates: bool,
    pub fixed_week_count: bool,
    pub height: u32,
}

impl CalendarOptions {
    /// Month grid over the session's reportable period.
    pub fn for_session(properties: &SessionProperties, height: u32) -> Self {
        Self {
            initial_view: CalendarView::DayGridMonth,
            valid_range: ValidRange::from_properties(properties),
            header_toolbar: HeaderToolbar::default(),
            editable: false,
            selectable: true,
            show_non_current_dates: false,
            fixed_week_count: true,
            height,
        }
    }

    pub fn apply(&mut self, option: &CalendarOption) {
        match option {
            CalendarOption::Height(height) => self.height = *height,
            CalendarOption::ValidRange(range) => self.valid_range = range.clone(),
        }
    }
}

/// A single option change on a constructed calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "name", content = "value", rename_all = "camelCase")]
pub enum CalendarOption {
    Height(u32),
    ValidRange(ValidRange),
}

/// Month-grid calendar widget.
pub trait Calendar {
    fn render(&mut self);
    fn set_option(&mut self, option: CalendarOption);
}

/// Calendar height for a window of `window_height` pixels.
pub fn calendar_height(window_height: u32, offset: u32) -> u32 {
    window_height.saturating_sub(offset)
}
