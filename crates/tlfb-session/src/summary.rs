//! Summary text shown above the calendar.

use tlfb_model::SessionProperties;

pub const APPLICATION_NAME: &str = "Timeline-Followback";

pub fn title_text(properties: &SessionProperties) -> String {
    format!(
        "{} | {} / {} at {}",
        properties.pid(),
        properties.subject(),
        properties.record(),
        properties.timepoint()
    )
}

pub fn subtitle_text(properties: &SessionProperties) -> String {
    format!(
        "{} to {} ({} Days)",
        properties.start(),
        properties.end(),
        properties.days()
    )
}

pub fn version_title() -> String {
    format!("{APPLICATION_NAME} v{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use tlfb_model::{Field, PropertiesPatch};

    use super::*;

    #[test]
    fn summary_of_full_session() {
        let mut props = SessionProperties::new();
        props.merge(
            PropertiesPatch::new()
                .with(Field::Subject, "QO10A")
                .with(Field::Record, "66")
                .with(Field::Timepoint, "pilot_v6_20wk_arm_2")
                .with(Field::Pid, "28955")
                .with(Field::Start, "2022-07-15")
                .with(Field::End, "2022-08-09"),
        );
        insta::assert_snapshot!(title_text(&props), @"28955 | QO10A / 66 at pilot_v6_20wk_arm_2");
        insta::assert_snapshot!(subtitle_text(&props), @"2022-07-15 to 2022-08-09 (25 Days)");
    }

    #[test]
    fn summary_of_empty_session() {
        let props = SessionProperties::new();
        assert_eq!(title_text(&props), " |  /  at ");
        assert_eq!(subtitle_text(&props), " to  (0 Days)");
    }

    #[test]
    fn version_title_names_application() {
        assert!(version_title().starts_with("Timeline-Followback v"));
    }
}
