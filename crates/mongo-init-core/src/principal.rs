use serde::{Deserialize, Serialize};

use crate::config::BootstrapConfig;

pub const READ_WRITE: &str = "readWrite";

/// Authorization scope binding a principal to a role on one database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleGrant {
    role: String,
    db: String,
}

impl RoleGrant {
    pub fn read_write(database: impl Into<String>) -> Self {
        Self {
            role: READ_WRITE.to_string(),
            db: database.into(),
        }
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn database(&self) -> &str {
        &self.db
    }
}

/// The application user to create. Its only grant is `readWrite` on the
/// target database; there is no way to build one with a broader scope.
#[derive(Clone, PartialEq, Eq)]
pub struct AppPrincipal {
    username: String,
    password: String,
    roles: Vec<RoleGrant>,
}

impl AppPrincipal {
    pub fn for_config(config: &BootstrapConfig) -> Self {
        Self {
            username: config.username.clone(),
            password: config.password.clone(),
            roles: vec![RoleGrant::read_write(&config.database)],
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn roles(&self) -> &[RoleGrant] {
        &self.roles
    }
}

impl std::fmt::Debug for AppPrincipal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppPrincipal")
            .field("username", &self.username)
            .field("roles", &self.roles)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_is_scoped_to_target_database() {
        let config = BootstrapConfig {
            database: "ledger".into(),
            ..BootstrapConfig::default()
        };
        let principal = AppPrincipal::for_config(&config);

        assert_eq!(principal.username(), "appuser");
        assert_eq!(principal.roles().len(), 1);
        assert_eq!(principal.roles()[0].role(), "readWrite");
        assert_eq!(principal.roles()[0].database(), "ledger");
    }

    #[test]
    fn grant_serializes_with_server_field_names() {
        let yaml = serde_yaml::to_string(&RoleGrant::read_write("cpp-test")).unwrap();
        assert_eq!(yaml, "role: readWrite\ndb: cpp-test\n");
    }
}
