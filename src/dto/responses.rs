use serde::{Deserialize, Serialize};

/// Title the creation endpoint uses for an accepted account.
pub const SUCCESS_TITLE: &str = "Success";

/// Body returned by `POST /api/users/create`, both on success and failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupResponse {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SignupResponse {
    pub fn is_success(&self) -> bool {
        self.title == SUCCESS_TITLE
    }
}
