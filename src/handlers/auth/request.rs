//! Authentication request DTOs

use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Credentials for registration and login
///
/// Both fields are optional at the deserialization layer so an absent or
/// empty field maps to the same 400 response the API documents, instead of
/// a body-rejection error.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl CredentialsRequest {
    /// Unpack the pair, rejecting missing or empty fields
    pub fn into_credentials(self) -> AppResult<(String, String)> {
        match (nonempty(self.username), nonempty(self.password)) {
            (Some(username), Some(password)) => Ok((username, password)),
            _ => Err(AppError::Validation(
                "Username and password are required.".to_string(),
            )),
        }
    }
}

fn nonempty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_credentials_rejects_missing_or_empty() {
        let missing: CredentialsRequest = serde_json::from_str(r#"{"username": "a"}"#).unwrap();
        assert!(missing.into_credentials().is_err());

        let empty: CredentialsRequest =
            serde_json::from_str(r#"{"username": "a", "password": ""}"#).unwrap();
        assert!(empty.into_credentials().is_err());

        let ok: CredentialsRequest =
            serde_json::from_str(r#"{"username": "a", "password": "b"}"#).unwrap();
        assert_eq!(
            ok.into_credentials().unwrap(),
            ("a".to_string(), "b".to_string())
        );
    }
}
