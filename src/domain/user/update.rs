//! Field changes accepted by an update

use serde::Deserialize;

/// The mutable fields of an account; `None` leaves a field untouched
///
/// Deserializing from a JSON object ignores every other key, including
/// `identifier` and `created_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    /// New plaintext credential, replaced by its digest before persisting
    #[serde(default)]
    pub password: Option<String>,
}

impl UpdateUserRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.active.is_none() && self.password.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let request = UpdateUserRequest::new()
            .with_email("a2@example.com")
            .with_active(false);

        assert_eq!(request.email.as_deref(), Some("a2@example.com"));
        assert_eq!(request.active, Some(false));
        assert!(request.password.is_none());
        assert!(!request.is_empty());
        assert!(UpdateUserRequest::new().is_empty());
    }

    #[test]
    fn test_unknown_and_immutable_fields_are_ignored() {
        let request: UpdateUserRequest = serde_json::from_value(serde_json::json!({
            "identifier": "mallory",
            "created_at": "1970-01-01T00:00:00Z",
            "nickname": "al",
            "email": "a2@example.com"
        }))
        .unwrap();

        assert_eq!(request, UpdateUserRequest::new().with_email("a2@example.com"));
    }

    #[test]
    fn test_only_unknown_fields_is_empty() {
        let request: UpdateUserRequest =
            serde_json::from_value(serde_json::json!({ "favourite_colour": "blue" })).unwrap();
        assert!(request.is_empty());
    }
}
