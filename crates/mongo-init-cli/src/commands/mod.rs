use clap::{Args, Subcommand};

use mongo_init_core::config::BootstrapConfig;
use mongo_init_db::mongo_config::{MongoTargetConfig, ENV_ADMIN_URI};

pub mod run;
pub mod show_config;
pub mod verify;

#[derive(Subcommand)]
pub enum Commands {
    /// Create the application user and ensure its collection exists
    Run(run::RunArgs),
    /// Log in as the application user and check the collection is visible
    Verify(verify::VerifyArgs),
    /// Print the effective configuration with the password redacted
    ShowConfig(show_config::ShowConfigArgs),
}

/// Connection and naming flags shared by every subcommand. Flags win over
/// the `MONGO_APP_*` variables, which win over the built-in defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Administrative connection string
    #[arg(long, env = ENV_ADMIN_URI)]
    pub admin_uri: Option<String>,
    /// Target database [env: MONGO_APP_DB]
    #[arg(long)]
    pub db: Option<String>,
    /// Application username [env: MONGO_APP_USER]
    #[arg(long)]
    pub user: Option<String>,
    /// Application password [env: MONGO_APP_PASS]
    #[arg(long)]
    pub password: Option<String>,
    /// Collection to ensure [env: MONGO_APP_COLL]
    #[arg(long)]
    pub collection: Option<String>,
}

impl TargetArgs {
    pub fn bootstrap_config(&self) -> BootstrapConfig {
        self.overlay(BootstrapConfig::from_env())
    }

    fn overlay(&self, mut config: BootstrapConfig) -> BootstrapConfig {
        if let Some(db) = &self.db {
            config.database = db.clone();
        }
        if let Some(user) = &self.user {
            config.username = user.clone();
        }
        if let Some(password) = &self.password {
            config.password = password.clone();
        }
        if let Some(collection) = &self.collection {
            config.collection = collection.clone();
        }
        config
    }

    pub fn target_config(&self) -> MongoTargetConfig {
        match self.admin_uri.as_deref().filter(|uri| !uri.is_empty()) {
            Some(uri) => MongoTargetConfig {
                admin_uri: uri.to_string(),
            },
            None => MongoTargetConfig::default(),
        }
    }
}
