use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// Body of `POST /api/users/create`.
///
/// Built only from a form that passed validation, so the date of birth is
/// already a real calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub full_name: String,
    pub contact_number: String,
    pub email: String,
    #[serde(serialize_with = "iso_date")]
    pub date_of_birth: NaiveDate,
    pub password: String,
}

// "YYYY-MM-DD", zero padded
fn iso_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_the_documented_body() {
        let request = SignupRequest {
            full_name: "Jane".to_string(),
            contact_number: "+1 (555) 123-4567".to_string(),
            email: "jane@example.com".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2030, 2, 7).unwrap(),
            password: "Abcd1234".to_string(),
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "full_name": "Jane",
                "contact_number": "+1 (555) 123-4567",
                "email": "jane@example.com",
                "date_of_birth": "2030-02-07",
                "password": "Abcd1234",
            })
        );
    }
}
