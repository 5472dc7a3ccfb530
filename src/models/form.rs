use crate::validation::{
    CONTACT_NUMBER_REGEX, EMAIL_REGEX, FULL_NAME_REGEX, day_in_range, month_in_range,
    no_spaces_around, password_strength, year_not_past,
};
use std::{fmt, str::FromStr};
use validator::Validate;

/// Raw values held by the sign-up form.
///
/// Every field is kept exactly as entered; an empty string means the user
/// has not provided a value yet. Day, month and year come from the
/// birthdate selectors and are only parsed during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct SignupForm {
    #[validate(
        length(min = 1, message = "Full Name is required"),
        regex(
            path = *FULL_NAME_REGEX,
            message = "Full Name should not contain any symbols or space"
        ),
        custom(function = no_spaces_around)
    )]
    pub full_name: String,

    #[validate(
        length(min = 1, message = "Contact Number is required"),
        regex(
            path = *CONTACT_NUMBER_REGEX,
            message = "Invalid Canadian phone number format (e.g., +1 (555) 123-4567)"
        )
    )]
    pub contact_number: String,

    #[validate(
        length(min = 1, message = "Email is required"),
        regex(path = *EMAIL_REGEX, message = "Invalid Email Address")
    )]
    pub email: String,

    #[validate(
        length(min = 1, message = "Day is required"),
        custom(function = day_in_range)
    )]
    pub day: String,

    #[validate(
        length(min = 1, message = "Month is required"),
        custom(function = month_in_range)
    )]
    pub month: String,

    #[validate(
        length(min = 1, message = "Year is required"),
        custom(function = year_not_past)
    )]
    pub year: String,

    #[validate(
        length(min = 1, message = "Password is required"),
        custom(function = password_strength)
    )]
    pub password: String,

    #[validate(
        length(min = 1, message = "Confirm Password is required"),
        must_match(other = "password", message = "Passwords must match")
    )]
    pub confirm_password: String,
}

impl SignupForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::ContactNumber => &self.contact_number,
            Field::Email => &self.email,
            Field::Day => &self.day,
            Field::Month => &self.month,
            Field::Year => &self.year,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FullName => &mut self.full_name,
            Field::ContactNumber => &mut self.contact_number,
            Field::Email => &mut self.email,
            Field::Day => &mut self.day,
            Field::Month => &mut self.month,
            Field::Year => &mut self.year,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value.into();
    }
}

/// Identifies one input of the sign-up form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    ContactNumber,
    Email,
    Day,
    Month,
    Year,
    Password,
    ConfirmPassword,
}

impl Field {
    /// All fields in the order the form presents them.
    pub const ALL: [Field; 8] = [
        Field::FullName,
        Field::ContactNumber,
        Field::Day,
        Field::Month,
        Field::Year,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::FullName => "full_name",
            Field::ContactNumber => "contact_number",
            Field::Email => "email",
            Field::Day => "day",
            Field::Month => "month",
            Field::Year => "year",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm_password",
        }
    }

    /// Human readable label used by the page.
    pub fn label(self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::ContactNumber => "Contact Number",
            Field::Email => "Email",
            Field::Day => "Day",
            Field::Month => "Month",
            Field::Year => "Year",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
        }
    }

    /// Birthdate selectors keep their errors visible even before the
    /// field has been touched.
    pub fn is_date_part(self) -> bool {
        matches!(self, Field::Day | Field::Month | Field::Year)
    }

    /// Secret fields are never echoed back on the page.
    pub fn is_secret(self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field `{0}`")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
