//! Single-value validation commands

use crate::domain::user::{validate_email, validate_password, UserValidationError};
use crate::infrastructure::user::{CredentialHasher, Sha256Hasher};

/// Print whether `address` is a well formed email address
pub fn email(address: &str) -> anyhow::Result<()> {
    report(address, validate_email(address));
    Ok(())
}

/// Print whether `password` is strong enough
pub fn password(password: &str) -> anyhow::Result<()> {
    report("password", validate_password(password));
    Ok(())
}

/// Print the digest of `secret`
pub fn digest(secret: &str) -> anyhow::Result<()> {
    println!("{}", Sha256Hasher::new().digest(secret));
    Ok(())
}

fn report(subject: &str, result: Result<(), UserValidationError>) {
    match result {
        Ok(()) => println!("{}: valid", subject),
        Err(e) => println!("{}: invalid ({})", subject, e),
    }
}
