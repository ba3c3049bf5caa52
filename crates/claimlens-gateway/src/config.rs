//! Gateway configuration

use serde::{Deserialize, Serialize};

/// Remote agent endpoint configuration
///
/// Defaults target a local agent server. There is no config file and
/// nothing is persisted; the CLI overrides these per invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base url of the agent server
    pub host: String,
    /// Application (agent) name in the session path
    pub app_name: String,
    /// Fixed user identifier
    pub user_id: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "http://localhost:8000".to_string(),
            app_name: "master_agent".to_string(),
            user_id: "user_123".to_string(),
        }
    }
}

impl GatewayConfig {
    /// Set the agent server base url (trailing slashes stripped)
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        let host = host.into();
        self.host = host.trim_end_matches('/').to_string();
        self
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }
}
