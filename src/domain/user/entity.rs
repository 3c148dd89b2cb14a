//! User entity and related types

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// User identifier, the primary key of an account
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user account as held by the repository
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Unique, immutable identifier
    id: UserId,
    /// Contact address, always validated before it gets here
    email: String,
    /// One-way digest of the credential; the plaintext is never stored
    credential_digest: Option<String>,
    /// Creation timestamp, set once
    created_at: DateTime<Utc>,
    active: bool,
}

impl User {
    /// Create a new, active user stamped with the current time
    pub fn new(id: UserId, email: impl Into<String>, credential_digest: Option<String>) -> Self {
        Self {
            id,
            email: email.into(),
            credential_digest,
            created_at: Utc::now(),
            active: true,
        }
    }

    // Getters

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn credential_digest(&self) -> Option<&str> {
        self.credential_digest.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    // Mutators

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_credential_digest(&mut self, digest: impl Into<String>) {
        self.credential_digest = Some(digest.into());
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Serializable projection of this record
    pub fn to_view(&self) -> UserView {
        UserView::from(self)
    }
}

/// Caller-facing projection of a [`User`]
///
/// Every field is always present in the serialized form; `credential_digest`
/// is `null` for accounts created without a credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub identifier: String,
    pub email: String,
    /// ISO-8601 creation timestamp
    pub created_at: String,
    pub active: bool,
    pub credential_digest: Option<String>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            identifier: user.id.as_str().to_string(),
            email: user.email.clone(),
            created_at: user.created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            active: user.active,
            credential_digest: user.credential_digest.clone(),
        }
    }
}
