pub mod catalog;
pub mod error;
pub mod field;
pub mod properties;
pub mod span;

pub use catalog::{ChecklistItem, ChecklistSection, Substance, SubstanceCatalog, SubstanceCategory};
pub use error::{Result, TlfbError};
pub use field::Field;
pub use properties::{PropertiesPatch, SessionProperties};
pub use span::span_days;
