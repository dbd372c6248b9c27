//! The fixed table of recognized URL query parameters.
//!
//! The same table drives both parsing (URL to properties) and writing
//! (properties to URL).

use tlfb_model::Field;

use crate::validators::Validator;

/// A recognized query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryParam {
    /// Name used in the URL.
    pub name: &'static str,
    /// Session property the value is stored in.
    pub field: Field,
    pub validator: Validator,
}

/// Recognized parameters in processing order.
///
/// REDCap bookmark links supply `record`, `pid`, and `event`; the remaining
/// entries come from piped REDCap fields or manual entry.
pub static QUERY_PARAMETERS: [QueryParam; 8] = [
    QueryParam {
        name: "record",
        field: Field::Record,
        validator: Validator::Integer,
    },
    QueryParam {
        name: "pid",
        field: Field::Pid,
        validator: Validator::Integer,
    },
    QueryParam {
        name: "event",
        field: Field::Timepoint,
        validator: Validator::Token,
    },
    QueryParam {
        name: "subject",
        field: Field::Subject,
        validator: Validator::Token,
    },
    QueryParam {
        name: "start",
        field: Field::Start,
        validator: Validator::Date,
    },
    QueryParam {
        name: "end",
        field: Field::End,
        validator: Validator::Date,
    },
    QueryParam {
        name: "keyfield",
        field: Field::Keyfield,
        validator: Validator::Token,
    },
    QueryParam {
        name: "staff",
        field: Field::Staff,
        validator: Validator::Token,
    },
];

/// Look up a parameter by its URL name.
pub fn param_by_name(name: &str) -> Option<&'static QueryParam> {
    QUERY_PARAMETERS.iter().find(|param| param.name == name)
}

/// The parameter that carries `field`.
pub fn param_for_field(field: Field) -> &'static QueryParam {
    match field {
        Field::Record => &QUERY_PARAMETERS[0],
        Field::Pid => &QUERY_PARAMETERS[1],
        Field::Timepoint => &QUERY_PARAMETERS[2],
        Field::Subject => &QUERY_PARAMETERS[3],
        Field::Start => &QUERY_PARAMETERS[4],
        Field::End => &QUERY_PARAMETERS[5],
        Field::Keyfield => &QUERY_PARAMETERS[6],
        Field::Staff => &QUERY_PARAMETERS[7],
    }
}
