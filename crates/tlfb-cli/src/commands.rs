//! Command implementations.

use anyhow::{Context, Result};
use serde::Serialize;
use tlfb_model::{ChecklistSection, PropertiesPatch, SessionProperties};
use tlfb_session::{CalendarOptions, MemoryCollaborators, MemoryPage, Session, TextRegion};
use tracing::info;

use crate::config::Config;
use crate::logging::redact_value;

/// Everything a headless session run produced.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub url: String,
    pub title: String,
    pub subtitle: String,
    pub version_title: String,
    pub alerts: Vec<String>,
    pub missing: Vec<String>,
    pub properties: SessionProperties,
    pub calendar: CalendarOptions,
}

impl SessionReport {
    fn from_session(session: &Session<MemoryPage, MemoryCollaborators>) -> Self {
        let page = session.page();
        let text = |region: TextRegion| page.text(region).unwrap_or_default().to_string();
        Self {
            url: page.url(),
            title: text(TextRegion::Title),
            subtitle: text(TextRegion::Subtitle),
            version_title: text(TextRegion::VersionTitle),
            alerts: page.alerts().to_vec(),
            missing: session.missing().iter().map(ToString::to_string).collect(),
            properties: session.properties().clone(),
            calendar: session.calendar().options().clone(),
        }
    }
}

fn start_session(
    config: &Config,
    target: &str,
    window_height: Option<u32>,
) -> Result<Session<MemoryPage, MemoryCollaborators>> {
    let catalog = config.catalog()?;
    let url = config.resolve_url(target);
    let height = window_height.unwrap_or(config.calendar.window_height);
    let page = MemoryPage::from_url(&url, height);
    let session = Session::start(
        page,
        &mut MemoryCollaborators,
        config.session_settings(),
        &catalog,
    );
    info!(
        subject = redact_value(session.properties().subject()),
        record = redact_value(session.properties().record()),
        days = session.properties().days(),
        "headless session started"
    );
    Ok(session)
}

/// Start a session from `target` and report the resulting state.
pub fn run_start(config: &Config, target: &str, window_height: Option<u32>) -> Result<SessionReport> {
    let session = start_session(config, target, window_height)?;
    Ok(SessionReport::from_session(&session))
}

/// Start a session, then submit `patch` as a manual form entry.
///
/// # Errors
///
/// Fails if the patch contains an invalid or empty value.
pub fn run_update(
    config: &Config,
    target: &str,
    window_height: Option<u32>,
    patch: PropertiesPatch,
) -> Result<SessionReport> {
    let mut session = start_session(config, target, window_height)?;
    session.submit_form(patch).context("form update rejected")?;
    info!(
        subject = redact_value(session.properties().subject()),
        days = session.properties().days(),
        "session properties updated"
    );
    Ok(SessionReport::from_session(&session))
}

/// Checklist sections for the configured catalog.
pub fn run_substances(config: &Config) -> Result<Vec<ChecklistSection>> {
    Ok(config.catalog()?.checklist())
}
