//! The hosting page: address bar, text regions, alerts, window size.

use serde::Serialize;
use tlfb_model::ChecklistSection;

/// On-screen text regions the session writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TextRegion {
    /// `{pid} | {subject} / {record} at {timepoint}`
    Title,
    /// `{start} to {end} ({days} Days)`
    Subtitle,
    VersionTitle,
}

impl TextRegion {
    /// Element id of the region in the page markup.
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Title => "calendar-file-title",
            Self::Subtitle => "calendar-file-subtitle",
            Self::VersionTitle => "application-version-title",
        }
    }
}

/// Thin adapter over the browser window and document.
///
/// Every method runs synchronously; the synchronizer relies on the URL and
/// text being updated by the time a call returns.
pub trait Page {
    /// Current query string, with or without the leading `?`.
    fn query(&self) -> String;

    /// Replace the current history entry's query without navigating.
    ///
    /// Must not push a new history entry.
    fn replace_query(&mut self, query: &str);

    fn set_text(&mut self, region: TextRegion, text: &str);

    /// Blocking user-facing alert.
    fn alert(&mut self, message: &str);

    /// Inner window height in pixels.
    fn window_height(&self) -> u32;

    /// Populate the substance checklist form.
    fn show_checklist(&mut self, sections: &[ChecklistSection]);
}
