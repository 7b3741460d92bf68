//! Client for the GeoServer REST management API.
//!
//! GeoServer is treated as an opaque remote service: this crate exposes
//! only the six calls the publish workflow needs, behind the
//! [`GeoServerRest`] trait so the workflow can be tested against a fake
//! instead of a live server.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod types;
pub mod xml;

pub use api::GeoServerRest;
pub use client::GeoServerClient;
pub use config::GeoServerConfig;
pub use error::{RestError, Result};
pub use types::{CoverageInfo, Extent, FeatureTypeInfo};
