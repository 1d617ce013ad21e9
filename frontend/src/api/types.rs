use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl UserResponse {
    pub fn display_name(&self) -> &str {
        if self.full_name.is_empty() {
            &self.username
        } else {
            &self.full_name
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub const UNAUTHORIZED: &'static str = "UNAUTHORIZED";

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    /// Fallback for failure responses whose body is not an `ApiError`.
    pub fn from_status(status: u16) -> Self {
        let code = if status == 401 {
            Self::UNAUTHORIZED.to_string()
        } else {
            format!("HTTP_{}", status)
        };
        Self {
            error: format!("Request failed with status {}", status),
            code,
            details: None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == Self::UNAUTHORIZED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_response_defaults_optional_fields() {
        let user: UserResponse =
            serde_json::from_value(json!({ "id": "u1", "username": "alice" })).unwrap();
        assert!(user.roles.is_empty());
        assert_eq!(user.display_name(), "alice");
    }

    #[test]
    fn from_status_maps_unauthorized() {
        assert!(ApiError::from_status(401).is_unauthorized());
        let forbidden = ApiError::from_status(403);
        assert_eq!(forbidden.code, "HTTP_403");
        assert!(!forbidden.is_unauthorized());
    }

    #[test]
    fn api_error_displays_message() {
        let err = ApiError::request_failed("boom");
        assert_eq!(err.to_string(), "boom");
        assert_eq!(err.code, "REQUEST_FAILED");
    }
}
