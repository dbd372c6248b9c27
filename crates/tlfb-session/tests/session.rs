//! Integration tests for session startup and updates.

use tlfb_model::{Field, PropertiesPatch, SubstanceCatalog, TlfbError};
use tlfb_query::{PARTIAL_IDENTIFIERS_MESSAGE, ParseOptions, QUERY_PARAMETERS, QueryString};
use tlfb_session::{
    CalendarOption, MemoryCollaborators, MemoryPage, Page, Session, SessionSettings, TextRegion,
};

const REDCAP_URL: &str = "https://tlfb.test/app?subject=QO10A&start=2022-07-15&end=2022-08-09\
    &keyfield=record_id&record=66&event=pilot_v6_20wk_arm_2&pid=28955";

fn start(url: &str) -> Session<MemoryPage, MemoryCollaborators> {
    start_with(url, SessionSettings::default())
}

fn start_with(url: &str, settings: SessionSettings) -> Session<MemoryPage, MemoryCollaborators> {
    let catalog = SubstanceCatalog::builtin().expect("builtin catalog");
    Session::start(
        MemoryPage::from_url(url, 900),
        &mut MemoryCollaborators,
        settings,
        &catalog,
    )
}

#[test]
fn startup_from_redcap_link() {
    let session = start(REDCAP_URL);
    let page = session.page();

    assert!(page.alerts().is_empty());
    assert_eq!(
        page.text(TextRegion::Title),
        Some("28955 | QO10A / 66 at pilot_v6_20wk_arm_2")
    );
    assert_eq!(
        page.text(TextRegion::Subtitle),
        Some("2022-07-15 to 2022-08-09 (25 Days)")
    );
    assert!(
        page.text(TextRegion::VersionTitle)
            .is_some_and(|text| text.starts_with("Timeline-Followback v"))
    );
    assert_eq!(session.missing(), ["staff"]);
    assert_eq!(
        session.file().missing_warnings(),
        [vec!["staff".to_string()]]
    );
}

#[test]
fn startup_rewrites_all_parameters() {
    let session = start("https://tlfb.test/app?subject=QO10A&lang=en");
    let query = QueryString::parse(&session.page().query());
    for param in &QUERY_PARAMETERS {
        let expected = session.properties().get(param.field);
        assert_eq!(query.get(param.name), Some(expected), "{}", param.name);
    }
    assert_eq!(query.get("lang"), Some("en"));
    assert_eq!(session.page().history_len(), 1);
}

#[test]
fn startup_builds_calendar_over_period() {
    let session = start(REDCAP_URL);
    let calendar = session.calendar();
    assert_eq!(calendar.renders(), 1);
    assert_eq!(calendar.options().valid_range.start, "2022-07-15");
    assert_eq!(calendar.options().valid_range.end, "2022-08-09");
    assert_eq!(calendar.options().height, 770);
    assert_eq!(session.editor().valid_range.end, "2022-08-09");
    assert_eq!(session.file().properties().subject(), "QO10A");
}

#[test]
fn startup_without_parameters_is_manual_entry() {
    let session = start("https://tlfb.test/app");
    assert!(session.page().alerts().is_empty());
    assert_eq!(session.missing().len(), 8);
    assert_eq!(session.properties().days(), 0);
    assert_eq!(
        session.page().text(TextRegion::Subtitle),
        Some(" to  (0 Days)")
    );
    assert_eq!(session.calendar().renders(), 1);
}

#[test]
fn partial_identifiers_alert_once() {
    let session = start("https://tlfb.test/app?record=66&pid=28955");
    assert_eq!(session.page().alerts(), [PARTIAL_IDENTIFIERS_MESSAGE]);
    assert!(session.missing().contains(&"event"));
}

#[test]
fn rejected_start_alerts_and_keeps_default() {
    let session = start("https://tlfb.test/app?start=notadate&end=2022-08-09");
    assert_eq!(
        session.page().alerts(),
        ["start misspecified in the URL query."]
    );
    assert_eq!(session.properties().start(), "");
    assert!(!session.missing().contains(&"start"));
    let query = QueryString::parse(&session.page().query());
    assert_eq!(query.get("start"), Some(""));
}

#[test]
fn strict_mode_alerts_on_unknown_parameters() {
    let settings = SessionSettings {
        parse: ParseOptions { strict: true },
        ..SessionSettings::default()
    };
    let session = start_with("https://tlfb.test/app?utm_source=mail", settings);
    assert_eq!(
        session.page().alerts(),
        ["Unknown parameter specified in URL query: utm_source"]
    );
}

#[test]
fn no_missing_warning_when_complete() {
    let session = start(&format!("{REDCAP_URL}&staff=MP"));
    assert!(session.missing().is_empty());
    assert!(session.file().missing_warnings().is_empty());
}

#[test]
fn update_reflects_everywhere() {
    let mut session = start(REDCAP_URL);
    session.update(
        PropertiesPatch::new()
            .with(Field::End, "2022-08-14")
            .with(Field::Staff, "MP"),
    );

    let query = QueryString::parse(&session.page().query());
    assert_eq!(query.get("end"), Some("2022-08-14"));
    assert_eq!(query.get("staff"), Some("MP"));
    assert_eq!(
        session.page().text(TextRegion::Subtitle),
        Some("2022-07-15 to 2022-08-14 (30 Days)")
    );
    assert_eq!(session.calendar().options().valid_range.end, "2022-08-14");
    assert_eq!(session.file().properties().days(), 30);
    assert_eq!(session.page().history_len(), 1);
    assert_eq!(session.page().replacements(), 2);
    assert_eq!(session.calendar().renders(), 1);
}

#[test]
fn submit_form_rejects_invalid_values() {
    let mut session = start(REDCAP_URL);
    let before = session.page().url();
    let error = session
        .submit_form(
            PropertiesPatch::new()
                .with(Field::Staff, "MP")
                .with(Field::Record, "sixty-six"),
        )
        .unwrap_err();
    assert!(matches!(error, TlfbError::InvalidField { name: "record", .. }));
    assert_eq!(session.properties().staff(), "");
    assert_eq!(session.page().url(), before);
}

#[test]
fn submit_form_applies_valid_values() {
    let mut session = start("https://tlfb.test/app");
    session
        .submit_form(
            PropertiesPatch::new()
                .with(Field::Subject, "QO10A")
                .with(Field::Start, "2022-07-15")
                .with(Field::End, "2022-08-09"),
        )
        .expect("valid form");
    assert_eq!(session.properties().days(), 25);
}

#[test]
fn resize_sets_calendar_height() {
    let mut session = start(REDCAP_URL);
    session.page_mut().set_window_height(600);
    session.resize();
    assert_eq!(
        session.calendar().changes().last(),
        Some(&CalendarOption::Height(470))
    );
    assert_eq!(session.calendar().options().height, 470);
}

#[test]
fn checklist_is_populated_once() {
    let session = start(REDCAP_URL);
    let catalog = SubstanceCatalog::builtin().expect("builtin catalog");
    assert_eq!(session.page().checklist(), catalog.checklist().as_slice());
}
