//! Multipart upload staging.
//!
//! Persists the files of one upload request into a request-scoped
//! staging subdirectory. Each request gets its own uuid-named
//! directory so concurrent uploads of identically named files cannot
//! overwrite each other before publish.

use std::path::Path;

use axum::extract::multipart::Multipart;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use publisher::{StagedFile, UploadBatch};

/// Extensions accepted at the upload boundary.
pub const ALLOWED_EXTENSIONS: [&str; 8] =
    ["tif", "tiff", "shp", "shx", "dbf", "prj", "cpg", "zip"];

/// Errors surfaced to the client as a failure payload.
#[derive(Error, Debug)]
pub enum StagingError {
    #[error("no files uploaded")]
    NoFiles,

    #[error("unsupported file type")]
    UnsupportedType,

    #[error("Failed to store uploaded file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed multipart request: {0}")]
    Multipart(String),
}

/// Strip path components and anything outside `[A-Za-z0-9._-]` from a
/// client-supplied filename.
pub fn sanitize_filename(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or(raw);

    base.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect()
}

/// Persist every file part of a multipart request into a fresh staging
/// subdirectory and return the batch.
///
/// A single disallowed extension fails the whole request before any
/// remote call, matching the upload contract.
pub async fn stage_upload(
    upload_dir: &Path,
    multipart: &mut Multipart,
) -> Result<UploadBatch, StagingError> {
    let staging_dir = upload_dir.join(Uuid::new_v4().to_string());
    tokio::fs::create_dir_all(&staging_dir).await?;

    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| StagingError::Multipart(e.to_string()))?
    {
        let Some(raw_name) = field.file_name().map(str::to_string) else {
            // Non-file form fields are ignored.
            continue;
        };

        let name = sanitize_filename(&raw_name);
        let staged = StagedFile::new(name.clone(), staging_dir.join(&name));

        if name.is_empty() || !ALLOWED_EXTENSIONS.contains(&staged.extension.as_str()) {
            return Err(StagingError::UnsupportedType);
        }

        let contents = field
            .bytes()
            .await
            .map_err(|e| StagingError::Multipart(e.to_string()))?;

        tokio::fs::write(&staged.path, &contents).await?;
        debug!(file = %staged.name, bytes = contents.len(), "Staged uploaded file");

        files.push(staged);
    }

    if files.is_empty() {
        return Err(StagingError::NoFiles);
    }

    Ok(UploadBatch::new(staging_dir, files))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_path_components() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\data\\parcels.shp"), "parcels.shp");
        assert_eq!(sanitize_filename("uploads/elevation.tif"), "elevation.tif");
    }

    #[test]
    fn test_sanitize_drops_unsafe_characters() {
        assert_eq!(sanitize_filename("par cels;.shp"), "parcels.shp");
        assert_eq!(sanitize_filename("dem (1).tif"), "dem1.tif");
    }

    #[test]
    fn test_sanitize_keeps_safe_names() {
        assert_eq!(sanitize_filename("roads_2024-01.dbf"), "roads_2024-01.dbf");
    }

    #[test]
    fn test_allowed_extensions_cover_both_dataset_kinds() {
        for ext in ["tif", "tiff", "zip", "shp", "shx", "dbf", "prj", "cpg"] {
            assert!(ALLOWED_EXTENSIONS.contains(&ext), "missing {}", ext);
        }
        assert!(!ALLOWED_EXTENSIONS.contains(&"txt"));
    }
}
