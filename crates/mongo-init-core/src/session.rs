use async_trait::async_trait;

use crate::error::BootstrapResult;
use crate::principal::AppPrincipal;

/// An authenticated administrative connection to the database server.
///
/// Implementations report a pre-existing principal from `create_user` as
/// `BootstrapError::DuplicateUser`, and treat an already-present collection
/// as success in `create_collection`.
#[async_trait]
pub trait AdminSession: Send + Sync {
    /// Whether a principal with this name is defined on `database`.
    async fn user_exists(&self, database: &str, username: &str) -> BootstrapResult<bool>;

    async fn create_user(&self, database: &str, principal: &AppPrincipal) -> BootstrapResult<()>;

    async fn create_collection(&self, database: &str, name: &str) -> BootstrapResult<()>;
}
