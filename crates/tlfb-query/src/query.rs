//! Ordered `application/x-www-form-urlencoded` query string.
//!
//! Mirrors the browser's search-params behavior: lookups return the first
//! value for a name, `set` replaces the first occurrence in place and drops
//! later duplicates, and serialization encodes spaces as `+`.

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Bytes left unescaped: ASCII alphanumerics, `*-._`, and space (emitted as `+`).
const FORM_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b' ');

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string, with or without the leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = query
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.split_once('=') {
                Some((name, value)) => (decode_component(name), decode_component(value)),
                None => (decode_component(segment), String::new()),
            })
            .collect();
        Self { pairs }
    }

    pub fn has(&self, name: &str) -> bool {
        self.pairs.iter().any(|(key, _)| key == name)
    }

    /// First value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Replace the first `name` entry in place, drop the rest, or append.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(key, _)| key == name) {
            Some(first) => {
                self.pairs[first].1 = value;
                let mut index = 0;
                self.pairs.retain(|(key, _)| {
                    let keep = index <= first || key != name;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((name.to_string(), value)),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (name, value)) in self.pairs.iter().enumerate() {
            if index > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", encode_component(name), encode_component(value))?;
        }
        Ok(())
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, FORM_COMPONENT)
        .to_string()
        .replace(' ', "+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strips_question_mark() {
        let query = QueryString::parse("?subject=QO10A&record=66");
        assert_eq!(query.get("subject"), Some("QO10A"));
        assert_eq!(query.get("record"), Some("66"));
        assert_eq!(query.len(), 2);
    }

    #[test]
    fn parse_decodes_components() {
        let query = QueryString::parse("note=a+b%2Bc&name%20x=%E2%9C%93");
        assert_eq!(query.get("note"), Some("a b+c"));
        assert_eq!(query.get("name x"), Some("\u{2713}"));
    }

    #[test]
    fn parse_handles_bare_and_empty_entries() {
        let query = QueryString::parse("keyfield&&staff=");
        assert!(query.has("keyfield"));
        assert_eq!(query.get("keyfield"), Some(""));
        assert_eq!(query.get("staff"), Some(""));
        assert_eq!(query.len(), 2);
    }

    #[test]
    fn get_returns_first_duplicate() {
        let query = QueryString::parse("pid=1&pid=2");
        assert_eq!(query.get("pid"), Some("1"));
    }

    #[test]
    fn set_replaces_first_and_drops_duplicates() {
        let mut query = QueryString::parse("pid=1&x=y&pid=2");
        query.set("pid", "3");
        assert_eq!(query.to_string(), "pid=3&x=y");
    }

    #[test]
    fn set_appends_new_names() {
        let mut query = QueryString::parse("x=y");
        query.set("staff", "MP");
        assert_eq!(query.to_string(), "x=y&staff=MP");
    }

    #[test]
    fn display_encodes_reserved_characters() {
        let mut query = QueryString::new();
        query.set("note", "a b&c=d/e");
        assert_eq!(query.to_string(), "note=a+b%26c%3Dd%2Fe");
    }

    #[test]
    fn display_round_trips() {
        let text = "subject=QO10A&start=2022-07-15&note=a+b";
        assert_eq!(QueryString::parse(text).to_string(), text);
    }
}
