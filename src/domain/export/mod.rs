//! Export domain - writing account snapshots to a durable sink

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::domain::user::UserView;
use crate::domain::DomainError;

/// Writes identifier -> view maps to a destination such as a file name
#[async_trait]
pub trait UserExporter: Send + Sync + Debug {
    async fn export(
        &self,
        users: &BTreeMap<String, UserView>,
        destination: &str,
    ) -> Result<(), DomainError>;
}
