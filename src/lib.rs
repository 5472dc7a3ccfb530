//! Sign-up form client.
//!
//! - `models`: raw form values and field identifiers
//! - `validation`: per-field rules and the composite birthdate check
//! - `form`: form state, submission and transient notifications
//! - `api`: the single POST to the account service
//! - `page`: terminal rendering of the form

pub mod api;
pub mod config;
pub mod dto;
pub mod errors;
pub mod form;
pub mod models;
pub mod page;
pub mod telemetry;
pub mod validation;

pub use api::{SignupApi, SignupClient};
pub use config::Config;
pub use form::{FormState, SubmitOutcome};
pub use models::{Field, SignupForm};
