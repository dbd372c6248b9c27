//! Keeps the URL and summary text in step with the properties store.
//!
//! The synchronizer is the only writer of [`SessionProperties`]. Each update
//! merges, recomputes the span, and reflects the result to the page before
//! returning, so readers never observe a stale URL or title.

use tlfb_model::{PropertiesPatch, SessionProperties};
use tlfb_query::{ParseOptions, ParsedQuery, codec};
use tracing::{debug, warn};

use crate::page::{Page, TextRegion};
use crate::summary::{subtitle_text, title_text};

pub struct Synchronizer<P> {
    properties: SessionProperties,
    page: P,
}

impl<P: Page> Synchronizer<P> {
    /// Empty properties bound to `page`. Nothing is written until the first
    /// update.
    pub fn new(page: P) -> Self {
        Self {
            properties: SessionProperties::new(),
            page,
        }
    }

    pub fn properties(&self) -> &SessionProperties {
        &self.properties
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn into_page(self) -> P {
        self.page
    }

    /// Read the page URL, alert on rejected values, and apply the rest.
    ///
    /// Returns the parse result so the caller can forward the missing list.
    pub fn load_from_url(&mut self, options: ParseOptions) -> ParsedQuery {
        let parsed = codec::parse_with(&self.page.query(), options);
        for issue in &parsed.issues {
            self.page.alert(&issue.message());
        }
        self.update(parsed.patch.clone());
        parsed
    }

    /// Merge `patch` and reflect the new state to the summary and the URL.
    pub fn update(&mut self, patch: PropertiesPatch) {
        debug!(fields = patch.iter().count(), "updating session properties");
        self.properties.merge(patch);

        let props = &self.properties;
        if !props.has_span() && !(props.start().is_empty() && props.end().is_empty()) {
            warn!(
                days = props.days(),
                "reportable period is not a pair of calendar dates"
            );
        }

        self.reflect();
    }

    /// Write the current state to the text regions and the address bar.
    pub fn reflect(&mut self) {
        self.page
            .set_text(TextRegion::Title, &title_text(&self.properties));
        self.page
            .set_text(TextRegion::Subtitle, &subtitle_text(&self.properties));

        let query = codec::write(&self.properties, &self.page.query());
        self.page.replace_query(&format!("?{query}"));
    }
}
