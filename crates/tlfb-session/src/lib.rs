//! Session synchronization for the timeline followback calendar.
//!
//! A [`Session`] owns the [`tlfb_model::SessionProperties`] through a
//! [`Synchronizer`] and keeps three views consistent with it: the page URL,
//! the summary text above the calendar, and the calendar's valid range. The
//! browser, calendar widget, editor, and file components are reached only
//! through the traits in [`page`], [`calendar`], and [`collaborators`].

pub mod calendar;
pub mod collaborators;
pub mod memory;
pub mod page;
pub mod session;
pub mod summary;
pub mod synchronizer;

pub use calendar::{Calendar, CalendarOption, CalendarOptions, ValidRange, calendar_height};
pub use collaborators::{Collaborators, RecordFile};
pub use memory::{MemoryCalendar, MemoryCollaborators, MemoryEditor, MemoryFile, MemoryPage};
pub use page::{Page, TextRegion};
pub use session::{Session, SessionSettings};
pub use synchronizer::Synchronizer;
