//! CLI module for the user accounts service
//!
//! Provides subcommands for exercising the service from a shell:
//! - `demo`: run an account workflow and print the audit trail
//! - `check-email` / `check-password`: validate a single value
//! - `digest`: print the stored form of a credential

pub mod check;
pub mod demo;

use clap::{Parser, Subcommand};

/// User accounts - in-process account management with an audit trail
#[derive(Parser)]
#[command(name = "user-accounts")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create, list, update and delete sample accounts
    Demo(demo::DemoArgs),

    /// Check an email address against the format rules
    CheckEmail {
        /// Address to check
        address: String,
    },

    /// Check a password against the strength rules
    CheckPassword {
        /// Password to check
        password: String,
    },

    /// Print the SHA-256 digest stored for a credential
    Digest {
        /// Plaintext credential
        secret: String,
    },
}
