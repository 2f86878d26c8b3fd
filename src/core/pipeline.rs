//! The sequential conversion pipeline: overwrite handling, HDF opening,
//! per-band VRT generation and patching, merge, warp, metadata injection,
//! and cleanup. Fail fast: the first error aborts the run.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::params::ConversionParams;
use crate::error::Result;
use crate::io::hdf::{HdfError, HdfReader, Subdataset};
use crate::io::vrt::{self, BandVrt};
use crate::io::warp;
use crate::io::writers::metadata;
use crate::types::BandSelection;

/// One output band scheduled for VRT generation, in final band order.
#[derive(Debug, Clone)]
pub(crate) struct PlannedBand {
    /// 1-based position in the output band stack
    pub order: usize,
    /// Original 1-based subdataset index for explicit requests
    pub band: Option<usize>,
    pub subdataset: Subdataset,
}

/// Resolve the band selection against the enumerated subdatasets. Explicit
/// indices are 1-based and validated; request order is preserved.
pub(crate) fn plan_bands(
    subdatasets: &[Subdataset],
    selection: &BandSelection,
) -> std::result::Result<Vec<PlannedBand>, HdfError> {
    match selection {
        BandSelection::All => Ok(subdatasets
            .iter()
            .enumerate()
            .map(|(i, sub)| PlannedBand {
                order: i + 1,
                band: None,
                subdataset: sub.clone(),
            })
            .collect()),
        BandSelection::Explicit(bands) => {
            let mut planned = Vec::with_capacity(bands.len());
            for (i, &band) in bands.iter().enumerate() {
                if band == 0 || band > subdatasets.len() {
                    return Err(HdfError::BandOutOfRange {
                        band,
                        count: subdatasets.len(),
                    });
                }
                planned.push(PlannedBand {
                    order: i + 1,
                    band: Some(band),
                    subdataset: subdatasets[band - 1].clone(),
                });
            }
            Ok(planned)
        }
    }
}

/// List files in `directory` carrying `extension`, sorted for a deterministic
/// first match.
pub(crate) fn list_files(directory: &Path, extension: &str) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(directory)? {
        let path = entry?.path();
        let matches = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case(extension))
            .unwrap_or(false);
        if matches {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Delete the first `.tif` found on the overwrite search path. Absence of a
/// prior TIFF is not an error.
pub(crate) fn remove_existing_tiff(directory: &Path) -> std::io::Result<Option<PathBuf>> {
    match list_files(directory, "tif")?.into_iter().next() {
        Some(path) => {
            fs::remove_file(&path)?;
            Ok(Some(path))
        }
        None => Ok(None),
    }
}

/// Create (or reuse) the per-file working directory for VRT intermediates,
/// named after the HDF file's stem.
pub(crate) fn create_output_directory(hdf: &Path) -> std::io::Result<PathBuf> {
    let dir = hdf.with_extension("");
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Remove the merged VRT and the per-file working directory.
pub(crate) fn clear_temp_files(work_dir: &Path, vrt_output: &Path) -> std::io::Result<()> {
    fs::remove_file(vrt_output)?;
    fs::remove_dir_all(work_dir)?;
    Ok(())
}

fn overwrite_search_dir(hdf: &Path, params: &ConversionParams) -> PathBuf {
    if let Some(dir) = &params.output_search_dir {
        return dir.clone();
    }
    match hdf.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Run the full conversion pipeline for one HDF file and return the path of
/// the produced TIFF.
pub fn run_conversion(hdf: &Path, params: &ConversionParams) -> Result<PathBuf> {
    if params.overwrite {
        let search_dir = overwrite_search_dir(hdf, params);
        if let Some(removed) = remove_existing_tiff(&search_dir)? {
            info!("Removed pre-existing TIFF: {:?}", removed);
        }
    }

    let reader = HdfReader::open(hdf)?;
    info!(
        "Found {} subdatasets in {:?}",
        reader.subdatasets.len(),
        hdf
    );

    let work_dir = create_output_directory(hdf)?;
    let planned = plan_bands(&reader.subdatasets, &params.bands)?;

    let mut band_vrts = Vec::with_capacity(planned.len());
    for band in &planned {
        let file_name = vrt::vrt_file_name(band.order, band.band, band.subdataset.name_fragment());
        let vrt_path = work_dir.join(file_name);
        info!("Building VRT for {:?}", band.subdataset.name);
        vrt::build_band_vrt(&band.subdataset.name, &vrt_path)?;

        let scale = reader.subdataset_scale(&band.subdataset)?;
        vrt::apply_scale_fix(&vrt_path, &scale)?;

        band_vrts.push(BandVrt {
            order: band.order,
            band: band.band,
            path: vrt_path,
        });
    }

    let vrt_output = hdf.with_extension("vrt");
    vrt::merge_band_vrts(&band_vrts, &vrt_output)?;

    let output_tiff = hdf.with_extension("tif");
    if output_tiff.exists() && params.skip_if_exists {
        warn!(
            "Output {:?} already exists; skipping warp (skip-if-exists policy)",
            output_tiff
        );
    } else {
        warp::warp_to_tiff(&vrt_output, &output_tiff, params.reproject)?;
    }

    let labels = metadata::band_labels(&reader.subdatasets);
    metadata::embed_tiff_metadata(&output_tiff, &labels)?;

    clear_temp_files(&work_dir, &vrt_output)?;

    Ok(output_tiff)
}
