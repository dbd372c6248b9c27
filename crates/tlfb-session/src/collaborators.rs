//! Factory and interfaces for the editor and file components.

use tlfb_model::SessionProperties;

use crate::calendar::{Calendar, CalendarOptions};

/// Record/file component that persists entries and owns the
/// missing-properties dialog.
pub trait RecordFile {
    /// Prompt the user to complete the named URL parameters.
    fn warn_missing_properties(&mut self, missing: &[&str]);

    /// Called after every property update with the merged state.
    fn properties_changed(&mut self, _properties: &SessionProperties) {}
}

/// Builds the components the session wires together at startup.
pub trait Collaborators {
    type Calendar: Calendar;
    type Editor;
    type File: RecordFile;

    fn calendar(&mut self, options: CalendarOptions) -> Self::Calendar;

    fn editor(&mut self, calendar: &mut Self::Calendar) -> Self::Editor;

    fn file(
        &mut self,
        properties: &SessionProperties,
        calendar: &mut Self::Calendar,
        editor: &mut Self::Editor,
    ) -> Self::File;
}
