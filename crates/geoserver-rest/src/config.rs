//! GeoServer connection configuration.

use serde::{Deserialize, Serialize};
use std::env;

/// Connection settings for the target GeoServer instance.
///
/// Passed explicitly into the client and the publish workflow rather
/// than read from ambient globals, so tests can substitute their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoServerConfig {
    /// Base URL of the GeoServer web application, e.g.
    /// `http://localhost:8001/geoserver`.
    pub base_url: String,

    /// Basic-auth username for the REST API.
    pub username: String,

    /// Basic-auth password for the REST API.
    pub password: String,

    /// Workspace under which all layers are published.
    pub workspace: String,
}

impl GeoServerConfig {
    /// Load configuration from environment variables, with the defaults
    /// a local development GeoServer ships with.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("GEOSERVER_URL")
                .unwrap_or_else(|_| "http://localhost:8001/geoserver".to_string()),
            username: env::var("GEOSERVER_USER").unwrap_or_else(|_| "admin".to_string()),
            password: env::var("GEOSERVER_PASSWORD").unwrap_or_else(|_| "geoserver".to_string()),
            workspace: env::var("GEOSERVER_WORKSPACE").unwrap_or_else(|_| "gobi".to_string()),
        }
    }

    /// REST root for the configured workspace, without a trailing slash.
    pub fn workspace_rest_url(&self) -> String {
        format!(
            "{}/rest/workspaces/{}",
            self.base_url.trim_end_matches('/'),
            self.workspace
        )
    }

    /// The workspace's WMS endpoint, reported to clients on success.
    pub fn wms_url(&self) -> String {
        format!(
            "{}/{}/wms",
            self.base_url.trim_end_matches('/'),
            self.workspace
        )
    }

    /// Workspace-qualified layer name (`<workspace>:<name>`).
    pub fn qualified_layer_name(&self, layer_name: &str) -> String {
        format!("{}:{}", self.workspace, layer_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> GeoServerConfig {
        GeoServerConfig {
            base_url: "http://localhost:8001/geoserver/".to_string(),
            username: "admin".to_string(),
            password: "geoserver".to_string(),
            workspace: "gobi".to_string(),
        }
    }

    #[test]
    fn test_workspace_rest_url_strips_trailing_slash() {
        assert_eq!(
            test_config().workspace_rest_url(),
            "http://localhost:8001/geoserver/rest/workspaces/gobi"
        );
    }

    #[test]
    fn test_wms_url() {
        assert_eq!(
            test_config().wms_url(),
            "http://localhost:8001/geoserver/gobi/wms"
        );
    }

    #[test]
    fn test_qualified_layer_name() {
        assert_eq!(test_config().qualified_layer_name("parcels"), "gobi:parcels");
    }
}
