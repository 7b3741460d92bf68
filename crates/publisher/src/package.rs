//! Shapefile bundle packaging.
//!
//! GeoServer ingests vector data as a single zip archive, so a raw
//! `shp`/`shx`/`dbf` upload is packaged locally before the REST call.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;
use zip::write::FileOptions;
use zip::ZipWriter;

use crate::error::{PublishError, Result};

/// Sidecar extensions bundled into a shapefile archive. The first
/// three are mandatory for a valid shapefile; `prj` and `cpg` ride
/// along when present.
pub const SHAPEFILE_SIDECARS: [&str; 5] = ["shp", "shx", "dbf", "prj", "cpg"];

/// Assemble `<base_name>.zip` in the staging directory from every
/// sidecar file that exists under that base name.
///
/// Missing optional sidecars are skipped without error; any I/O
/// failure while writing the archive is fatal for the request.
pub fn package_shapefile_bundle(staging_dir: &Path, base_name: &str) -> Result<PathBuf> {
    let archive_path = staging_dir.join(format!("{}.zip", base_name));

    let file = File::create(&archive_path)
        .map_err(|e| PublishError::Packaging(e.to_string()))?;
    let mut archive = ZipWriter::new(file);
    let options = FileOptions::default();

    for ext in SHAPEFILE_SIDECARS {
        let member_name = format!("{}.{}", base_name, ext);
        let member_path = staging_dir.join(&member_name);

        if !member_path.is_file() {
            continue;
        }

        let contents =
            std::fs::read(&member_path).map_err(|e| PublishError::Packaging(e.to_string()))?;

        archive
            .start_file(member_name.as_str(), options)
            .map_err(|e| PublishError::Packaging(e.to_string()))?;
        archive
            .write_all(&contents)
            .map_err(|e| PublishError::Packaging(e.to_string()))?;

        debug!(member = %member_name, bytes = contents.len(), "Added sidecar to archive");
    }

    archive
        .finish()
        .map_err(|e| PublishError::Packaging(e.to_string()))?;

    Ok(archive_path)
}
