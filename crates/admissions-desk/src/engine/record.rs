use std::fmt;

use chrono::NaiveDate;

/// Field selectors an entity type exposes to the engine.
///
/// `field` returns `None` for names the type does not carry, which is how the
/// engine tells an unknown field apart from an empty one.
pub trait Record {
    /// Text fields scanned by the free-text query.
    const SEARCHABLE: &'static [&'static str];
    /// Fields that dropdown filters may constrain by exact value.
    const FILTERABLE: &'static [&'static str];

    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

impl<R: Record + ?Sized> Record for &R {
    const SEARCHABLE: &'static [&'static str] = R::SEARCHABLE;
    const FILTERABLE: &'static [&'static str] = R::FILTERABLE;

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).field(name)
    }
}

/// Scalar value of a named field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(i64),
    Date(NaiveDate),
    Flag(bool),
}

impl FieldValue<'_> {
    /// Exact comparison against a filter value using the canonical rendering
    /// (enum codes, `YYYY-MM-DD`, decimal integers, `true`/`false`).
    pub fn matches(&self, expected: &str) -> bool {
        match self {
            FieldValue::Text(value) => *value == expected,
            FieldValue::Number(value) => value.to_string() == expected,
            FieldValue::Date(value) => value.format("%Y-%m-%d").to_string() == expected,
            FieldValue::Flag(value) => expected == if *value { "true" } else { "false" },
        }
    }

    /// Case-insensitive substring test; `needle` must already be lowercase.
    pub(crate) fn contains_lowercase(&self, needle: &str) -> bool {
        match self {
            FieldValue::Text(value) => value.to_lowercase().contains(needle),
            other => other.to_string().to_lowercase().contains(needle),
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            FieldValue::Number(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(value) => f.write_str(value),
            FieldValue::Number(value) => write!(f, "{value}"),
            FieldValue::Date(value) => write!(f, "{}", value.format("%Y-%m-%d")),
            FieldValue::Flag(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_uses_canonical_rendering() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date");
        assert!(FieldValue::Text("accepted").matches("accepted"));
        assert!(!FieldValue::Text("accepted").matches("Accepted"));
        assert!(FieldValue::Number(85).matches("85"));
        assert!(FieldValue::Date(date).matches("2024-03-15"));
        assert!(FieldValue::Flag(true).matches("true"));
        assert!(!FieldValue::Flag(false).matches("true"));
    }

    #[test]
    fn contains_ignores_case_of_field_value() {
        assert!(FieldValue::Text("Jane Smith").contains_lowercase("jane"));
        assert!(FieldValue::Number(2024).contains_lowercase("02"));
        assert!(!FieldValue::Text("Jane Smith").contains_lowercase("zzz"));
    }
}
