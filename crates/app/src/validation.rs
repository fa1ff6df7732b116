//! Field validation.
//!
//! Each rule is a plain function returning the violation message on failure.
//! [`Violations`] runs rules against optional request fields and collects every
//! failure, so a client sees all problems with a payload at once.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::RangeInclusive,
};

use url::Url;

use crate::errors::{ClassifiedError, ErrorKind};

/// Allowed length of a phone number, including the leading `+`.
pub const PHONE_NUMBER_LENGTH: RangeInclusive<usize> = 10..=16;

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl Display for FieldViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.field, self.message)
    }
}

/// Checks that `value` has a character count inside `range`.
pub fn check_length(value: &str, range: &RangeInclusive<usize>) -> Result<(), String> {
    let length = value.chars().count();

    if range.contains(&length) {
        return Ok(());
    }

    Err(format!(
        "must be between {} and {} characters",
        range.start(),
        range.end()
    ))
}

/// Checks that `value` lies inside `range`.
pub fn check_range(value: i64, range: &RangeInclusive<i64>) -> Result<(), String> {
    if range.contains(&value) {
        return Ok(());
    }

    if *range.end() == i64::MAX {
        return Err(format!("must be at least {}", range.start()));
    }

    Err(format!(
        "must be between {} and {}",
        range.start(),
        range.end()
    ))
}

/// Checks that `value` is an absolute http(s) URL whose host contains a dot.
pub fn check_url(value: &str) -> Result<(), String> {
    let invalid = || "must be a valid url".to_string();

    let url = Url::parse(value).map_err(|_parse_error| invalid())?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }

    match url.host_str() {
        Some(host) if host.contains('.') => Ok(()),
        _ => Err(invalid()),
    }
}

/// Checks that `value` looks like an international phone number.
pub fn check_phone_number(value: &str) -> Result<(), String> {
    if !value.starts_with('+') {
        return Err("must start with +".to_string());
    }

    check_length(value, &PHONE_NUMBER_LENGTH)
}

/// Collected validation failures for one payload.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Violations {
    violations: Vec<FieldViolation>,
}

impl Violations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.violations.iter()
    }

    /// Records a violation when `value` is absent.
    pub fn require<T>(&mut self, field: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.push(field, "is required");
        }

        value
    }

    /// Runs `rule` against a present value, keeping it only when the rule passes.
    pub fn check<T, F>(&mut self, field: &'static str, value: Option<T>, rule: F) -> Option<T>
    where
        F: FnOnce(&T) -> Result<(), String>,
    {
        let value = self.require(field, value)?;

        match rule(&value) {
            Ok(()) => Some(value),
            Err(message) => {
                self.push(field, message);
                None
            }
        }
    }

    pub fn text(
        &mut self,
        field: &'static str,
        value: Option<String>,
        length: RangeInclusive<usize>,
    ) -> Option<String> {
        self.check(field, value, |value| check_length(value, &length))
    }

    pub fn integer(
        &mut self,
        field: &'static str,
        value: Option<i64>,
        range: RangeInclusive<i64>,
    ) -> Option<i64> {
        self.check(field, value, |value| check_range(*value, &range))
    }

    pub fn url(&mut self, field: &'static str, value: Option<String>) -> Option<String> {
        self.check(field, value, |value| check_url(value))
    }

    pub fn phone_number(&mut self, field: &'static str, value: Option<String>) -> Option<String> {
        self.check(field, value, |value| check_phone_number(value))
    }

    /// `Ok` when nothing was recorded.
    pub fn finish(self) -> Result<(), Self> {
        if self.is_empty() {
            return Ok(());
        }

        Err(self)
    }
}

impl Display for Violations {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.violations.is_empty() {
            return f.write_str("invalid request");
        }

        for (index, violation) in self.violations.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }

            Display::fmt(violation, f)?;
        }

        Ok(())
    }
}

impl std::error::Error for Violations {}

impl ClassifiedError for Violations {
    fn kind(&self) -> ErrorKind {
        ErrorKind::BadRequest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(check_length("ééééé", &(5..=5)).is_ok());
        assert!(check_length("", &(1..=30)).is_err());
        assert!(check_length(&"a".repeat(31), &(1..=30)).is_err());
    }

    #[test]
    fn range_message_mentions_lower_bound_for_open_ranges() {
        assert_eq!(
            check_range(0, &(1..=i64::MAX)),
            Err("must be at least 1".to_string())
        );
        assert_eq!(
            check_range(100_001, &(0..=100_000)),
            Err("must be between 0 and 100000".to_string())
        );
    }

    #[test]
    fn url_requires_scheme_and_dotted_host() {
        assert!(check_url("https://example.com/image.png").is_ok());
        assert!(check_url("http://cdn.example.co.id/a.jpg").is_ok());
        assert!(check_url("example.com/image.png").is_err());
        assert!(check_url("https://localhost/image.png").is_err());
        assert!(check_url("ftp://example.com/image.png").is_err());
        assert!(check_url("not a url").is_err());
    }

    #[test]
    fn phone_number_requires_plus_prefix_and_length() {
        assert!(check_phone_number("+6281234567").is_ok());
        assert!(check_phone_number("6281234567890").is_err());
        assert!(check_phone_number("+62812").is_err());
        assert!(check_phone_number("+62812345678901234").is_err());
    }

    #[test]
    fn violations_collect_every_failure() {
        let mut violations = Violations::new();

        let name = violations.text("name", Some(String::new()), 1..=30);
        let sku = violations.text("sku", None, 1..=30);
        let price = violations.integer("price", Some(10), 1..=i64::MAX);

        assert_eq!(name, None);
        assert_eq!(sku, None);
        assert_eq!(price, Some(10));

        let Err(violations) = violations.finish() else {
            panic!("expected violations");
        };

        let fields: Vec<&str> = violations.iter().map(|v| v.field).collect();

        assert_eq!(fields, vec!["name", "sku"]);
        assert_eq!(
            violations.to_string(),
            "name must be between 1 and 30 characters; sku is required"
        );
    }

    #[test]
    fn empty_violations_finish_ok() {
        assert_eq!(Violations::new().finish(), Ok(()));
    }
}
