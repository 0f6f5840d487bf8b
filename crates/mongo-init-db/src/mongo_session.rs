use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use mongodb::error::ErrorKind;
use mongodb::Client;

use mongo_init_core::error::{BootstrapError, BootstrapResult};
use mongo_init_core::principal::AppPrincipal;
use mongo_init_core::session::AdminSession;

use crate::mongo_config::MongoTargetConfig;

/// Server code for `createUser` on an existing principal.
const USER_ALREADY_EXISTS: i32 = 51003;
/// Server code for `createCollection` on an existing namespace.
const NAMESPACE_EXISTS: i32 = 48;

fn command_code(err: &mongodb::error::Error) -> Option<i32> {
    match *err.kind {
        ErrorKind::Command(ref command_error) => Some(command_error.code),
        _ => None,
    }
}

/// Administrative session backed by a `mongodb::Client`.
pub struct MongoAdminSession {
    client: Client,
}

impl MongoAdminSession {
    pub async fn connect(config: &MongoTargetConfig) -> BootstrapResult<Self> {
        let client = Client::with_uri_str(&config.admin_uri).await.map_err(|e| {
            BootstrapError::Connection(anyhow::anyhow!("MongoDB connection failed: {e}"))
        })?;

        // Server selection is lazy; ping so an unreachable server fails here.
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| BootstrapError::Connection(anyhow::anyhow!("MongoDB ping failed: {e}")))?;

        tracing::debug!("MongoDB admin session established");
        Ok(Self { client })
    }
}

/// Classify a failed `createUser` by its server code.
fn create_user_failure(
    code: Option<i32>,
    source: anyhow::Error,
    user: &str,
    database: &str,
) -> BootstrapError {
    match code {
        Some(USER_ALREADY_EXISTS) => BootstrapError::DuplicateUser {
            user: user.to_string(),
            database: database.to_string(),
        },
        _ => BootstrapError::command("createUser", source),
    }
}

/// A failed `createCollection` still counts when the namespace is there.
fn create_collection_failure(code: Option<i32>, source: anyhow::Error) -> BootstrapResult<()> {
    match code {
        Some(NAMESPACE_EXISTS) => Ok(()),
        _ => Err(BootstrapError::command("createCollection", source)),
    }
}

/// The `createUser` command document for `principal`.
pub fn create_user_command(principal: &AppPrincipal) -> Document {
    let roles: Vec<Document> = principal
        .roles()
        .iter()
        .map(|grant| doc! { "role": grant.role(), "db": grant.database() })
        .collect();

    doc! {
        "createUser": principal.username(),
        "pwd": principal.password(),
        "roles": roles,
    }
}

#[async_trait]
impl AdminSession for MongoAdminSession {
    async fn user_exists(&self, database: &str, username: &str) -> BootstrapResult<bool> {
        let reply = self
            .client
            .database(database)
            .run_command(doc! { "usersInfo": username })
            .await
            .map_err(|e| BootstrapError::command("usersInfo", e))?;

        let users = reply
            .get_array("users")
            .map_err(|e| BootstrapError::command("usersInfo", e))?;
        Ok(!users.is_empty())
    }

    async fn create_user(&self, database: &str, principal: &AppPrincipal) -> BootstrapResult<()> {
        let result = self
            .client
            .database(database)
            .run_command(create_user_command(principal))
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) => {
                let code = command_code(&e);
                Err(create_user_failure(code, e.into(), principal.username(), database))
            }
        }
    }

    async fn create_collection(&self, database: &str, name: &str) -> BootstrapResult<()> {
        match self.client.database(database).create_collection(name).await {
            Ok(()) => Ok(()),
            Err(e) => {
                let code = command_code(&e);
                create_collection_failure(code, e.into())?;
                tracing::debug!(database, collection = name, "Collection already present");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mongo_init_core::config::BootstrapConfig;

    use super::*;

    #[test]
    fn create_user_command_scopes_role_to_target_db() {
        let config = BootstrapConfig::default();
        let cmd = create_user_command(&AppPrincipal::for_config(&config));

        assert_eq!(cmd.get_str("createUser").unwrap(), "appuser");
        assert_eq!(cmd.get_str("pwd").unwrap(), "appsecret");

        let roles = cmd.get_array("roles").unwrap();
        assert_eq!(roles.len(), 1);
        let grant = roles[0].as_document().unwrap();
        assert_eq!(grant, &doc! { "role": "readWrite", "db": "cpp-test" });
    }

    #[test]
    fn existing_user_code_maps_to_duplicate_user() {
        let err = create_user_failure(
            Some(USER_ALREADY_EXISTS),
            anyhow::anyhow!("User \"appuser@cpp-test\" already exists"),
            "appuser",
            "cpp-test",
        );
        match err {
            BootstrapError::DuplicateUser { user, database } => {
                assert_eq!(user, "appuser");
                assert_eq!(database, "cpp-test");
            }
            other => panic!("expected DuplicateUser, got {other:?}"),
        }
    }

    #[test]
    fn other_create_user_failures_are_command_errors() {
        // 13 = Unauthorized
        for code in [Some(13), None] {
            let err = create_user_failure(code, anyhow::anyhow!("boom"), "appuser", "cpp-test");
            match err {
                BootstrapError::Command { operation, .. } => assert_eq!(operation, "createUser"),
                other => panic!("expected Command, got {other:?}"),
            }
        }
    }

    #[test]
    fn existing_namespace_counts_as_created() {
        assert!(create_collection_failure(Some(NAMESPACE_EXISTS), anyhow::anyhow!("exists")).is_ok());
    }

    #[test]
    fn other_create_collection_failures_are_command_errors() {
        for code in [Some(USER_ALREADY_EXISTS), Some(13), None] {
            let err = create_collection_failure(code, anyhow::anyhow!("boom")).unwrap_err();
            match err {
                BootstrapError::Command { operation, .. } => {
                    assert_eq!(operation, "createCollection")
                }
                other => panic!("expected Command, got {other:?}"),
            }
        }
    }

    #[test]
    fn command_name_is_the_first_key() {
        let cmd = create_user_command(&AppPrincipal::for_config(&BootstrapConfig::default()));
        assert_eq!(cmd.keys().next().map(String::as_str), Some("createUser"));
    }
}
