mod form;

pub use form::{Field, SignupForm, UnknownField};
