//! Static substance catalog used to populate the substance checklist.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

const BUILTIN_CATALOG: &str = include_str!("../data/substances.json");

/// A checklist category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstanceCategory {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substance {
    pub label: String,
}

/// Categories in display order plus the ordered substances of each category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstanceCatalog {
    pub category: Vec<SubstanceCategory>,
    #[serde(default)]
    pub substance: BTreeMap<String, Vec<Substance>>,
}

/// One rendered checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    /// Element id and name, `{index}{category_id}`.
    pub id: String,
    /// Submitted value, `{index} {category_id}`.
    pub value: String,
    pub label: String,
}

/// A category heading followed by its checkboxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistSection {
    pub heading: String,
    pub items: Vec<ChecklistItem>,
}

impl SubstanceCatalog {
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn substances(&self, category_id: &str) -> &[Substance] {
        self.substance
            .get(category_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Checklist sections in category order.
    pub fn checklist(&self) -> Vec<ChecklistSection> {
        self.category
            .iter()
            .map(|category| ChecklistSection {
                heading: category.label.clone(),
                items: self
                    .substances(&category.id)
                    .iter()
                    .enumerate()
                    .map(|(index, substance)| ChecklistItem {
                        id: format!("{index}{}", category.id),
                        value: format!("{index} {}", category.id),
                        label: substance.label.clone(),
                    })
                    .collect(),
            })
            .collect()
    }
}
