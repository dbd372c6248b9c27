//! Integration tests for the URL query codec.

use proptest::prelude::*;
use tlfb_model::{Field, SessionProperties};
use tlfb_query::{QUERY_PARAMETERS, QueryIssue, QueryString, Validator, parse, write};

fn merged(query: &str) -> SessionProperties {
    let mut props = SessionProperties::new();
    props.merge(parse(query).patch);
    props
}

#[test]
fn redcap_link_populates_properties() {
    let props = merged(
        "?subject=QO10A&start=2022-07-15&end=2022-08-09&keyfield=record_id\
         &record=66&event=pilot_v6_20wk_arm_2&pid=28955",
    );
    assert_eq!(props.subject(), "QO10A");
    assert_eq!(props.record(), "66");
    assert_eq!(props.pid(), "28955");
    assert_eq!(props.days(), 25);
}

#[test]
fn partial_identifiers_warn_only_when_incomplete() {
    let partial = parse("record=66&pid=28955");
    assert!(
        partial
            .issues
            .iter()
            .any(|issue| matches!(issue, QueryIssue::PartialIdentifiers { .. }))
    );

    let complete = parse("record=66&pid=28955&event=pilot_v6_20wk_arm_2");
    assert!(complete.issues.is_empty());

    let none = parse("subject=QO10A");
    assert!(none.issues.is_empty());
}

#[test]
fn single_identifier_is_partial() {
    let parsed = parse("event=pilot_v6_20wk_arm_2");
    assert_eq!(
        parsed.issues,
        vec![QueryIssue::PartialIdentifiers {
            present: vec!["event"]
        }]
    );
}

#[test]
fn malformed_start_keeps_default() {
    let parsed = parse("start=notadate&end=2022-08-09");
    assert_eq!(
        parsed.issues,
        vec![QueryIssue::Misspecified { parameter: "start" }]
    );
    let mut props = SessionProperties::new();
    props.merge(parsed.patch);
    assert_eq!(props.start(), "");
    assert_eq!(props.end(), "2022-08-09");
    assert_eq!(props.days(), 0);
}

#[test]
fn malformed_value_keeps_previous_value() {
    let mut props = merged("start=2022-07-15");
    props.merge(parse("start=notadate").patch);
    assert_eq!(props.start(), "2022-07-15");
}

#[test]
fn empty_keyfield_matches_absent_keyfield() {
    let empty = parse("subject=QO10A&keyfield=");
    let absent = parse("subject=QO10A");
    assert_eq!(empty, absent);
    assert!(empty.missing.contains(&"keyfield"));
    assert!(empty.issues.is_empty());
}

#[test]
fn calendar_invalid_date_is_accepted() {
    let parsed = parse("start=2022-13-40");
    assert_eq!(parsed.patch.get(Field::Start), Some("2022-13-40"));
    assert!(parsed.issues.is_empty());
}

#[test]
fn encoded_values_are_decoded_before_validation() {
    let parsed = parse("subject=QO%31%30A&staff=M+P");
    assert_eq!(parsed.patch.get(Field::Subject), Some("QO10A"));
    assert_eq!(
        parsed.issues,
        vec![QueryIssue::Misspecified { parameter: "staff" }]
    );
}

#[test]
fn write_emits_all_parameters() {
    let props = merged("subject=QO10A");
    let written = QueryString::parse(&write(&props, "subject=QO10A"));
    for param in &QUERY_PARAMETERS {
        assert!(written.has(param.name), "{} missing", param.name);
    }
    assert_eq!(written.get("subject"), Some("QO10A"));
    assert_eq!(written.get("event"), Some(""));
}

fn value_strategy(validator: Validator) -> BoxedStrategy<String> {
    match validator {
        Validator::Integer => "[0-9]{1,6}".boxed(),
        Validator::Token => "[A-Za-z0-9_]{1,12}".boxed(),
        Validator::Date => "[0-9]{4}-[0-9]{2}-[0-9]{2}".boxed(),
    }
}

fn query_strategy() -> impl Strategy<Value = Vec<(&'static str, Option<String>)>> {
    let per_param: Vec<_> = QUERY_PARAMETERS
        .iter()
        .map(|param| {
            prop_oneof![
                Just(None),
                Just(Some(String::new())),
                Just(Some("bad value!".to_string())),
                value_strategy(param.validator).prop_map(Some),
            ]
            .prop_map(move |value| (param.name, value))
        })
        .collect();
    per_param
}

proptest! {
    #[test]
    fn valid_values_survive_round_trip(entries in query_strategy()) {
        let mut query = QueryString::new();
        query.set("lang", "en");
        for (name, value) in &entries {
            if let Some(value) = value {
                query.set(name, value.clone());
            }
        }
        let original = query.to_string();

        let props = merged(&original);
        let rewritten = QueryString::parse(&write(&props, &original));

        prop_assert_eq!(rewritten.get("lang"), Some("en"));
        for (param, (name, value)) in QUERY_PARAMETERS.iter().zip(&entries) {
            prop_assert!(rewritten.has(name));
            match value {
                Some(value) if !value.is_empty() && param.validator.accepts(value) => {
                    prop_assert_eq!(rewritten.get(name), Some(value.as_str()));
                }
                _ => prop_assert_eq!(rewritten.get(name), Some("")),
            }
        }
    }
}
