//! Session bootstrap and lifetime.

use tlfb_model::{PropertiesPatch, Result, SessionProperties, SubstanceCatalog};
use tlfb_query::{ParseOptions, validate_patch};
use tracing::{debug, info};

use crate::calendar::{
    Calendar, CalendarOption, CalendarOptions, DEFAULT_HEIGHT_OFFSET, ValidRange, calendar_height,
};
use crate::collaborators::{Collaborators, RecordFile};
use crate::page::{Page, TextRegion};
use crate::summary::version_title;
use crate::synchronizer::Synchronizer;

/// Startup configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub parse: ParseOptions,
    /// Pixels subtracted from the window height to size the calendar.
    pub height_offset: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            parse: ParseOptions::default(),
            height_offset: DEFAULT_HEIGHT_OFFSET,
        }
    }
}

/// A running data-entry session and the components wired to it.
pub struct Session<P, C: Collaborators> {
    sync: Synchronizer<P>,
    calendar: C::Calendar,
    editor: C::Editor,
    file: C::File,
    height_offset: u32,
    missing: Vec<&'static str>,
}

impl<P: Page, C: Collaborators> Session<P, C> {
    /// Run the one-time startup sequence.
    ///
    /// Reads the URL, applies validated values, rewrites the URL, builds and
    /// renders the calendar, builds the editor and file components, forwards
    /// any missing parameters to the file component, and fills the substance
    /// checklist. Never fails: problems in the URL become alerts.
    pub fn start(
        page: P,
        collaborators: &mut C,
        settings: SessionSettings,
        catalog: &SubstanceCatalog,
    ) -> Self {
        let mut sync = Synchronizer::new(page);
        let parsed = sync.load_from_url(settings.parse);

        let height = calendar_height(sync.page().window_height(), settings.height_offset);
        let mut calendar =
            collaborators.calendar(CalendarOptions::for_session(sync.properties(), height));
        calendar.render();

        sync.page_mut()
            .set_text(TextRegion::VersionTitle, &version_title());

        let mut editor = collaborators.editor(&mut calendar);
        let mut file = collaborators.file(sync.properties(), &mut calendar, &mut editor);

        if !parsed.missing.is_empty() {
            debug!(missing = ?parsed.missing, "requesting missing session properties");
            file.warn_missing_properties(&parsed.missing);
        }

        sync.page_mut().show_checklist(&catalog.checklist());

        info!(
            issues = parsed.issues.len(),
            missing = parsed.missing.len(),
            days = sync.properties().days(),
            "session started"
        );

        Self {
            sync,
            calendar,
            editor,
            file,
            height_offset: settings.height_offset,
            missing: parsed.missing,
        }
    }

    /// Apply an already validated patch and notify the components.
    pub fn update(&mut self, patch: PropertiesPatch) {
        self.sync.update(patch);
        self.calendar.set_option(CalendarOption::ValidRange(
            ValidRange::from_properties(self.sync.properties()),
        ));
        self.file.properties_changed(self.sync.properties());
    }

    /// Validate form-entered values, then apply them.
    ///
    /// # Errors
    ///
    /// Returns the first invalid or empty value; nothing is merged in that
    /// case.
    pub fn submit_form(&mut self, patch: PropertiesPatch) -> Result<()> {
        validate_patch(&patch)?;
        self.update(patch);
        Ok(())
    }

    /// Window resize handler.
    pub fn resize(&mut self) {
        let height = calendar_height(self.sync.page().window_height(), self.height_offset);
        self.calendar.set_option(CalendarOption::Height(height));
    }

    pub fn properties(&self) -> &SessionProperties {
        self.sync.properties()
    }

    /// URL names that were absent or empty at startup.
    pub fn missing(&self) -> &[&'static str] {
        &self.missing
    }

    pub fn page(&self) -> &P {
        self.sync.page()
    }

    pub fn page_mut(&mut self) -> &mut P {
        self.sync.page_mut()
    }

    pub fn calendar(&self) -> &C::Calendar {
        &self.calendar
    }

    pub fn editor(&self) -> &C::Editor {
        &self.editor
    }

    pub fn file(&self) -> &C::File {
        &self.file
    }
}
