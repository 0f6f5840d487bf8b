use serde::{Deserialize, Serialize};

pub const ENV_ADMIN_URI: &str = "MONGO_ADMIN_URI";

/// Where the administrative session connects. Credentials, if any, are part
/// of the URI and are supplied by the hosting environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoTargetConfig {
    #[serde(default = "default_admin_uri")]
    pub admin_uri: String,
}

pub fn default_admin_uri() -> String {
    "mongodb://127.0.0.1:27017".to_string()
}

impl Default for MongoTargetConfig {
    fn default() -> Self {
        Self {
            admin_uri: default_admin_uri(),
        }
    }
}
