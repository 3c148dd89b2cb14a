//! User domain
//!
//! This module provides domain types and traits for user accounts,
//! including the user entity, field validation, update requests and the
//! repository trait.

mod entity;
mod repository;
mod update;
mod validation;

pub use entity::{User, UserId, UserView};
pub use repository::UserRepository;
pub use update::UpdateUserRequest;
pub use validation::{
    is_valid_email, is_valid_password, validate_email, validate_password, UserValidationError,
};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
