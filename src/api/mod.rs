//! High-level, ergonomic library API: convert one HDF product into a TIFF,
//! or batch-convert a directory of products. Prefer these entrypoints over
//! the pipeline internals when integrating hdf2tif.
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::params::ConversionParams;
use crate::core::pipeline::run_conversion;
use crate::error::{Error, Result};

/// Summary of a batch conversion run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Convert a single HDF container into a georeferenced TIFF beside the input
/// (same stem, `.tif` extension) and return the output path.
pub fn convert_hdf_to_path(hdf: &Path, params: &ConversionParams) -> Result<PathBuf> {
    run_conversion(hdf, params)
}

/// Return an iterator over `*.hdf` files directly inside `input_dir`, sorted
/// by path. The extension match is case-insensitive.
pub fn iterate_hdf_products(input_dir: &Path) -> Result<std::vec::IntoIter<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(input_dir).map_err(Error::from)? {
        let entry = entry.map_err(Error::from)?;
        let path = entry.path();
        if path.is_file() && has_hdf_extension(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files.into_iter())
}

/// Convert every HDF product found in `input_dir`. Non-HDF entries are
/// counted as skipped. If `continue_on_error` is true, failures are logged in
/// the report and processing continues; otherwise the first error is returned.
pub fn convert_directory(
    input_dir: &Path,
    params: &ConversionParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(input_dir).map_err(Error::from)? {
        entries.push(entry.map_err(Error::from)?.path());
    }
    entries.sort();

    for path in entries {
        if !(path.is_file() && has_hdf_extension(&path)) {
            info!("Skipping non-HDF entry: {:?}", path);
            report.skipped += 1;
            continue;
        }

        match convert_hdf_to_path(&path, params) {
            Ok(output) => {
                info!("Successfully converted: {:?} -> {:?}", path, output);
                report.processed += 1;
            }
            Err(e) => {
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
                warn!("Error converting {:?}: {}", path, e);
            }
        }
    }

    Ok(report)
}

fn has_hdf_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("hdf"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn product_iteration_is_sorted_and_case_insensitive() {
        let dir = tempdir().expect("tempdir");
        for name in ["b.hdf", "a.HDF", "notes.txt", "c.tif"] {
            fs::write(dir.path().join(name), b"x").expect("write");
        }
        fs::create_dir(dir.path().join("nested.hdf")).expect("mkdir");

        let products: Vec<_> = iterate_hdf_products(dir.path())
            .expect("iterate")
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(products, vec!["a.HDF", "b.hdf"]);
    }

    #[test]
    fn batch_over_non_hdf_entries_only_skips_them() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join("readme.md"), b"x").expect("write");
        fs::write(dir.path().join("scene.tif"), b"x").expect("write");

        let report = convert_directory(dir.path(), &ConversionParams::default(), true)
            .expect("batch");
        assert_eq!(
            report,
            BatchReport {
                processed: 0,
                skipped: 2,
                errors: 0
            }
        );
    }
}
