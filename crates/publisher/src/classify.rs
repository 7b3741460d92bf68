//! Dataset classification over a staged upload batch.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// One uploaded file persisted to local staging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    /// Sanitized filename, e.g. `parcels.shp`.
    pub name: String,
    /// Lower-cased extension, empty when the name has none.
    pub extension: String,
    /// Location in the staging directory.
    pub path: PathBuf,
}

impl StagedFile {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        let name = name.into();
        let extension = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        Self {
            name,
            extension,
            path: path.into(),
        }
    }

    /// Filename with its extension stripped; used as the layer name.
    pub fn stem(&self) -> &str {
        self.name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(&self.name)
    }
}

/// All files staged for one upload request, in upload order.
#[derive(Debug, Clone)]
pub struct UploadBatch {
    /// Request-scoped staging directory holding the files.
    pub staging_dir: PathBuf,
    pub files: Vec<StagedFile>,
}

impl UploadBatch {
    pub fn new(staging_dir: impl Into<PathBuf>, files: Vec<StagedFile>) -> Self {
        Self {
            staging_dir: staging_dir.into(),
            files,
        }
    }

    pub fn staging_dir(&self) -> &Path {
        &self.staging_dir
    }
}

/// What kind of dataset the batch represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetKind {
    /// A raster upload. Only the first raster file in upload order is
    /// published; any others are silently ignored (known limitation of
    /// the upload contract, kept deliberately).
    Raster { primary: StagedFile },

    /// A client pre-built shapefile archive, uploaded as-is.
    VectorArchive { archive: StagedFile },

    /// A raw shapefile bundle (`shp` + `shx` + `dbf`, optionally
    /// `prj`/`cpg`) that must be packaged before upload.
    VectorBundle { primary: StagedFile },

    /// Nothing publishable; `reason` goes straight back to the client.
    Invalid { reason: String },
}

const RASTER_EXTENSIONS: [&str; 2] = ["tif", "tiff"];
const SHAPEFILE_REQUIRED: [&str; 3] = ["shp", "shx", "dbf"];

/// Decide what an upload batch contains from its extension set.
///
/// Raster wins over anything else; a pre-built archive wins over a raw
/// bundle. A partial bundle (some of shp/shx/dbf, not all) is invalid
/// rather than unsupported so the client learns which files to add.
pub fn classify(batch: &UploadBatch) -> DatasetKind {
    if batch.files.is_empty() {
        return DatasetKind::Invalid {
            reason: "no files uploaded".to_string(),
        };
    }

    if let Some(primary) = batch
        .files
        .iter()
        .find(|f| RASTER_EXTENSIONS.contains(&f.extension.as_str()))
    {
        return DatasetKind::Raster {
            primary: primary.clone(),
        };
    }

    if let Some(archive) = batch.files.iter().find(|f| f.extension == "zip") {
        return DatasetKind::VectorArchive {
            archive: archive.clone(),
        };
    }

    let extensions: HashSet<&str> = batch
        .files
        .iter()
        .map(|f| f.extension.as_str())
        .collect();

    let present = SHAPEFILE_REQUIRED
        .iter()
        .filter(|e| extensions.contains(**e))
        .count();

    if present == SHAPEFILE_REQUIRED.len() {
        if let Some(primary) = batch.files.iter().find(|f| f.extension == "shp") {
            return DatasetKind::VectorBundle {
                primary: primary.clone(),
            };
        }
    }

    if present > 0 && present < SHAPEFILE_REQUIRED.len() {
        return DatasetKind::Invalid {
            reason: "incomplete shapefile bundle".to_string(),
        };
    }

    DatasetKind::Invalid {
        reason: "unsupported file type".to_string(),
    }
}
