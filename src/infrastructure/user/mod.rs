//! User infrastructure module
//!
//! This module provides implementations for user account management,
//! including SHA-256 credential digests, the in-memory repository and the
//! user service that orchestrates them.

mod digest;
mod repository;
mod service;

pub use digest::{CredentialHasher, Sha256Hasher};
pub use repository::InMemoryUserRepository;
pub use service::{CreateUserRequest, UserService};
