//! Validation schema for the sign-up form.
//!
//! The per-field rules are declared on [`SignupForm`] with
//! `#[derive(Validate)]`; this module holds the patterns and custom checks
//! they point at. Each field reports only its highest-ranked failure, and
//! fields never short-circuit each other, so one pass yields an error for
//! every field that needs attention.
//!
//! Birthdate is checked in two layers: every part against its own range, then
//! the composed calendar date (31 February is rejected on the day field). The
//! second layer lives in [`check`] and only runs once day, month and year are
//! each present and valid.

use crate::{
    dto::SignupRequest,
    models::{Field, SignupForm},
};
use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use std::{borrow::Cow, collections::BTreeMap, fmt, sync::LazyLock};
use validator::{Validate, ValidationError, ValidationErrors};

// U+FEFF is whitespace for the browser pattern, not for Unicode White_Space
pub static FULL_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}!@#$%^&*()_+{}\[\]:;<>,.?~\\/-]+$")
        .expect("full name pattern compiles")
});

pub static CONTACT_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+[0-9] \([0-9]{3}\) [0-9]{3}-[0-9]{4}$").expect("contact number pattern compiles")
});

pub static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@[A-Za-z0-9-]+\.[A-Za-z]{2,}$").expect("email pattern compiles")
});

/// Counted in UTF-16 code units, like the browser form it mirrors.
pub const MIN_PASSWORD_LENGTH: usize = 8;

pub const INVALID_DATE: &str = "Invalid date";
const PASSWORD_RULES: &str = "Password must contain at least one lowercase letter, one uppercase letter, and one number, with a minimum length of 8 characters";

// Characters a single-line `.` refuses to match.
const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

/// Rule codes from most to least important. When a field breaks several
/// rules, the one listed first is the one shown.
const RULE_RANK: [&str; 8] = [
    "length",
    "regex",
    "no_spaces_around",
    "number",
    "range",
    "integer",
    "password_strength",
    "must_match",
];

/// Calendar year of the local clock; the lowest year the form accepts.
pub fn current_year() -> i32 {
    Local::now().year()
}

fn invalid(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

// Emptiness is reported by each field's `length` rule, so the custom checks
// below accept an empty value.

pub fn no_spaces_around(value: &str) -> Result<(), ValidationError> {
    if value.trim() != value {
        return Err(invalid(
            "no_spaces_around",
            "Full Name should not have spaces around",
        ));
    }
    Ok(())
}

/// Numeric reading of a selector value: inner whitespace is ignored and an
/// unparsable value names the field it came from.
fn parse_number(path: &str, value: &str) -> Result<f64, ValidationError> {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    match compact.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(invalid(
            "number",
            format!(
                "{path} must be a `number` type, but the final value was: `NaN` (cast from the value `\"{value}\"`)."
            ),
        )),
    }
}

fn bounded(path: &str, value: &str, min: f64, max: Option<f64>) -> Result<f64, ValidationError> {
    let number = parse_number(path, value)?;
    if number < min {
        return Err(invalid(
            "range",
            format!("{path} must be greater than or equal to {min}"),
        ));
    }
    if let Some(max) = max.filter(|max| number > *max) {
        return Err(invalid(
            "range",
            format!("{path} must be less than or equal to {max}"),
        ));
    }
    Ok(number)
}

pub fn day_in_range(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    bounded("day", value, 1.0, Some(31.0)).map(|_| ())
}

pub fn month_in_range(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    bounded("month", value, 1.0, Some(12.0)).map(|_| ())
}

pub fn year_not_past(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    let year = bounded("year", value, f64::from(current_year()), None)?;
    if year.fract() != 0.0 {
        return Err(invalid("integer", "year must be an integer"));
    }
    Ok(())
}

pub fn password_strength(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    let single_line = !value.contains(LINE_TERMINATORS);
    let long_enough = value.encode_utf16().count() >= MIN_PASSWORD_LENGTH;
    let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    if !(single_line && long_enough && has_lower && has_upper && has_digit) {
        return Err(invalid("password_strength", PASSWORD_RULES));
    }
    Ok(())
}

fn rank(error: &ValidationError) -> usize {
    RULE_RANK
        .iter()
        .position(|code| *code == error.code)
        .unwrap_or(RULE_RANK.len())
}

/// Composite calendar check, run once every date part passed its own rules.
fn birthdate(form: &SignupForm) -> Option<NaiveDate> {
    let day = form.day.trim().parse().ok()?;
    let month = form.month.trim().parse().ok()?;
    let year = form.year.trim().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// One message per field, in form order: the highest-ranked rule it broke.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        for (name, list) in errors.field_errors() {
            let Ok(field) = name.parse::<Field>() else {
                continue;
            };
            if let Some(shown) = list.iter().min_by_key(|error| rank(error)) {
                let message = shown
                    .message
                    .as_ref()
                    .map_or_else(|| shown.code.to_string(), ToString::to_string);
                fields.insert(field, message);
            }
        }
        fields
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

/// Validate the form and, when it passes, build the request to send.
///
/// Runs the derived field rules, then the calendar check on the composed
/// birthdate once day, month and year each passed on their own.
pub fn check(form: &SignupForm) -> Result<SignupRequest, FieldErrors> {
    let mut errors = match form.validate() {
        Ok(()) => FieldErrors::new(),
        Err(errors) => FieldErrors::from(&errors),
    };

    let date_parts_valid = [Field::Day, Field::Month, Field::Year]
        .iter()
        .all(|field| !errors.contains(*field));
    let date_of_birth = if date_parts_valid {
        let date = birthdate(form);
        if date.is_none() {
            errors.insert(Field::Day, INVALID_DATE);
        }
        date
    } else {
        None
    };

    match date_of_birth {
        Some(date_of_birth) if errors.is_empty() => Ok(SignupRequest {
            full_name: form.full_name.clone(),
            contact_number: form.contact_number.clone(),
            email: form.email.clone(),
            date_of_birth,
            password: form.password.clone(),
        }),
        _ => Err(errors),
    }
}
