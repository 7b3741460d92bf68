//! reqwest-backed implementation of the GeoServer capability interface.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::api::GeoServerRest;
use crate::config::GeoServerConfig;
use crate::error::{RestError, Result};
use crate::types::{self, CoverageEnvelope, CoverageInfo, FeatureTypeEnvelope, FeatureTypeInfo};
use crate::xml;

/// HTTP client for one GeoServer instance.
pub struct GeoServerClient {
    http: Client,
    config: GeoServerConfig,
}

impl GeoServerClient {
    /// Create a client for the configured GeoServer instance.
    pub fn new(config: GeoServerConfig) -> Result<Self> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GeoServerConfig {
        &self.config
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.basic_auth(&self.config.username, Some(self.config.password.clone()))
    }

    /// Check a store/layer creation response: 201 and 202 are success,
    /// everything else surfaces the status and body for diagnosis.
    async fn check_created(response: Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        debug!(status = status.as_u16(), body = %body, "GeoServer create response");

        match status {
            StatusCode::CREATED | StatusCode::ACCEPTED => Ok(body),
            _ => Err(RestError::Status {
                status: status.as_u16(),
                body,
            }),
        }
    }

    /// Fetch a JSON resource, mapping non-2xx statuses to errors.
    async fn get_json(&self, url: &str) -> Result<Value> {
        let response = self.authed(self.http.get(url)).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RestError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl GeoServerRest for GeoServerClient {
    async fn create_coverage_store(&self, store: &str, geotiff: Bytes) -> Result<()> {
        let url = format!(
            "{}/coveragestores/{}/file.geotiff",
            self.config.workspace_rest_url(),
            store
        );

        debug!(store = %store, bytes = geotiff.len(), "Creating coverage store");

        let response = self
            .authed(self.http.put(&url))
            .query(&[("configure", "none")])
            .header(reqwest::header::CONTENT_TYPE, "image/tiff")
            .body(geotiff)
            .send()
            .await?;

        Self::check_created(response).await?;
        Ok(())
    }

    async fn register_coverage(&self, store: &str, coverage: &str) -> Result<String> {
        let url = format!(
            "{}/coveragestores/{}/coverages",
            self.config.workspace_rest_url(),
            store
        );

        debug!(store = %store, coverage = %coverage, "Registering coverage");

        let response = self
            .authed(self.http.post(&url))
            .header(reqwest::header::CONTENT_TYPE, "text/xml")
            .body(xml::coverage_descriptor(coverage))
            .send()
            .await?;

        let body = Self::check_created(response).await?;
        Ok(xml::confirmed_coverage_name(&body, coverage))
    }

    async fn upload_vector_archive(&self, store: &str, archive: Bytes) -> Result<()> {
        let url = format!(
            "{}/datastores/{}/file.shp",
            self.config.workspace_rest_url(),
            store
        );

        debug!(store = %store, bytes = archive.len(), "Uploading vector archive");

        let response = self
            .authed(self.http.put(&url))
            .query(&[("configure", "all")])
            .header(reqwest::header::CONTENT_TYPE, "application/zip")
            .body(archive)
            .send()
            .await?;

        Self::check_created(response).await?;
        Ok(())
    }

    async fn get_coverage_info(&self, coverage: &str) -> Result<CoverageInfo> {
        let url = format!(
            "{}/coverages/{}.json",
            self.config.workspace_rest_url(),
            coverage
        );

        let value = self.get_json(&url).await?;
        let envelope: CoverageEnvelope =
            serde_json::from_value(value).map_err(|e| RestError::Parse(e.to_string()))?;

        Ok(envelope.coverage)
    }

    async fn list_feature_types(&self, store: &str) -> Result<Vec<String>> {
        let url = format!(
            "{}/datastores/{}/featuretypes.json",
            self.config.workspace_rest_url(),
            store
        );

        let listing = self.get_json(&url).await?;
        Ok(types::feature_type_names(&listing))
    }

    async fn get_feature_type_info(
        &self,
        store: &str,
        feature_type: &str,
    ) -> Result<FeatureTypeInfo> {
        let url = format!(
            "{}/datastores/{}/featuretypes/{}.json",
            self.config.workspace_rest_url(),
            store,
            feature_type
        );

        let value = self.get_json(&url).await?;
        let envelope: FeatureTypeEnvelope =
            serde_json::from_value(value).map_err(|e| RestError::Parse(e.to_string()))?;

        Ok(envelope.feature_type)
    }
}
