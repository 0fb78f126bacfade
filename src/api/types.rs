use serde::{Deserialize, Serialize};

/// Credentials payload for the login and signup endpoints
#[derive(Debug, Clone, Serialize)]
pub struct AuthRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Success body from the auth service.
/// Login echoes the account email; signup sends only the message.
#[derive(Debug, Deserialize)]
pub struct AuthOk {
    #[allow(dead_code)]
    pub message: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Domain error body, `{"error": "..."}`
#[derive(Debug, Deserialize)]
pub struct ApiMessage {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_request_wire_shape() {
        let body = AuthRequest {
            email: "agent@nyumba.co.ke",
            password: "hunter2",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["email"], "agent@nyumba.co.ke");
        assert_eq!(json["password"], "hunter2");
    }

    #[test]
    fn test_login_success_body() {
        let body: AuthOk =
            serde_json::from_str(r#"{"message": "Login successful", "email": "a@b.co"}"#).unwrap();
        assert_eq!(body.email.as_deref(), Some("a@b.co"));
    }

    #[test]
    fn test_signup_success_body_has_no_email() {
        let body: AuthOk =
            serde_json::from_str(r#"{"message": "User created successfully"}"#).unwrap();
        assert!(body.email.is_none());
    }

    #[test]
    fn test_error_body() {
        let body: ApiMessage =
            serde_json::from_str(r#"{"error": "Invalid email or password"}"#).unwrap();
        assert_eq!(body.error, "Invalid email or password");
    }
}
