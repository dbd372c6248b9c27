//! In-memory page and collaborators.
//!
//! Used by headless hosts (the CLI) and by tests. Everything the session
//! does to them is recorded for inspection.

use std::collections::BTreeMap;

use tlfb_model::{ChecklistSection, SessionProperties};

use crate::calendar::{Calendar, CalendarOption, CalendarOptions, ValidRange};
use crate::collaborators::{Collaborators, RecordFile};
use crate::page::{Page, TextRegion};

/// A page whose address bar is a plain string.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    base: String,
    query: String,
    history: Vec<String>,
    replacements: usize,
    texts: BTreeMap<TextRegion, String>,
    alerts: Vec<String>,
    window_height: u32,
    checklist: Vec<ChecklistSection>,
}

impl MemoryPage {
    /// Open `url` in a window `window_height` pixels tall.
    ///
    /// Any fragment is discarded along with the first query replacement.
    pub fn from_url(url: &str, window_height: u32) -> Self {
        let without_fragment = url.split_once('#').map_or(url, |(head, _)| head);
        let (base, query) = match without_fragment.split_once('?') {
            Some((base, query)) => (base, format!("?{query}")),
            None => (without_fragment, String::new()),
        };
        Self {
            base: base.to_string(),
            query,
            history: vec![url.to_string()],
            window_height,
            ..Self::default()
        }
    }

    /// Current address, `{base}{query}`.
    pub fn url(&self) -> String {
        format!("{}{}", self.base, self.query)
    }

    /// Entries in the back/forward stack.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Number of in-place history replacements.
    pub fn replacements(&self) -> usize {
        self.replacements
    }

    pub fn text(&self, region: TextRegion) -> Option<&str> {
        self.texts.get(&region).map(String::as_str)
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn checklist(&self) -> &[ChecklistSection] {
        &self.checklist
    }

    /// Simulate a window resize.
    pub fn set_window_height(&mut self, height: u32) {
        self.window_height = height;
    }
}

impl Page for MemoryPage {
    fn query(&self) -> String {
        self.query.clone()
    }

    fn replace_query(&mut self, query: &str) {
        self.query = if query.is_empty() || query.starts_with('?') {
            query.to_string()
        } else {
            format!("?{query}")
        };
        let url = self.url();
        if let Some(current) = self.history.last_mut() {
            *current = url;
        } else {
            self.history.push(url);
        }
        self.replacements += 1;
    }

    fn set_text(&mut self, region: TextRegion, text: &str) {
        self.texts.insert(region, text.to_string());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn window_height(&self) -> u32 {
        self.window_height
    }

    fn show_checklist(&mut self, sections: &[ChecklistSection]) {
        self.checklist.extend_from_slice(sections);
    }
}

#[derive(Debug, Clone)]
pub struct MemoryCalendar {
    options: CalendarOptions,
    renders: usize,
    changes: Vec<CalendarOption>,
}

impl MemoryCalendar {
    pub fn new(options: CalendarOptions) -> Self {
        Self {
            options,
            renders: 0,
            changes: Vec::new(),
        }
    }

    pub fn options(&self) -> &CalendarOptions {
        &self.options
    }

    pub fn renders(&self) -> usize {
        self.renders
    }

    /// Option changes applied after construction, oldest first.
    pub fn changes(&self) -> &[CalendarOption] {
        &self.changes
    }
}

impl Calendar for MemoryCalendar {
    fn render(&mut self) {
        self.renders += 1;
    }

    fn set_option(&mut self, option: CalendarOption) {
        self.options.apply(&option);
        self.changes.push(option);
    }
}

/// Editor stand-in bound to the calendar's range at construction.
#[derive(Debug, Clone, Default)]
pub struct MemoryEditor {
    pub valid_range: ValidRange,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryFile {
    properties: SessionProperties,
    missing_warnings: Vec<Vec<String>>,
}

impl MemoryFile {
    /// Latest properties the file has seen.
    pub fn properties(&self) -> &SessionProperties {
        &self.properties
    }

    pub fn missing_warnings(&self) -> &[Vec<String>] {
        &self.missing_warnings
    }
}

impl RecordFile for MemoryFile {
    fn warn_missing_properties(&mut self, missing: &[&str]) {
        self.missing_warnings
            .push(missing.iter().map(ToString::to_string).collect());
    }

    fn properties_changed(&mut self, properties: &SessionProperties) {
        self.properties = properties.clone();
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryCollaborators;

impl Collaborators for MemoryCollaborators {
    type Calendar = MemoryCalendar;
    type Editor = MemoryEditor;
    type File = MemoryFile;

    fn calendar(&mut self, options: CalendarOptions) -> MemoryCalendar {
        MemoryCalendar::new(options)
    }

    fn editor(&mut self, calendar: &mut MemoryCalendar) -> MemoryEditor {
        MemoryEditor {
            valid_range: calendar.options().valid_range.clone(),
        }
    }

    fn file(
        &mut self,
        properties: &SessionProperties,
        _calendar: &mut MemoryCalendar,
        _editor: &mut MemoryEditor,
    ) -> MemoryFile {
        MemoryFile {
            properties: properties.clone(),
            missing_warnings: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_url_splits_base_and_query() {
        let page = MemoryPage::from_url("https://tlfb.test/app?x=1#top", 900);
        assert_eq!(page.query(), "?x=1");
        assert_eq!(page.url(), "https://tlfb.test/app?x=1");
    }

    #[test]
    fn replace_query_does_not_grow_history() {
        let mut page = MemoryPage::from_url("https://tlfb.test/app", 900);
        page.replace_query("?a=1");
        page.replace_query("b=2");
        assert_eq!(page.url(), "https://tlfb.test/app?b=2");
        assert_eq!(page.history_len(), 1);
        assert_eq!(page.replacements(), 2);
    }
}
