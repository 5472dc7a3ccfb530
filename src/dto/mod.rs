mod requests;
mod responses;

pub use requests::SignupRequest;
pub use responses::{SUCCESS_TITLE, SignupResponse};
