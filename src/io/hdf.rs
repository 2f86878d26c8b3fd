use gdal::{Dataset, Metadata};
use std::path::Path;
use thiserror::Error;

/// Errors encountered when reading HDF containers
#[derive(Debug, Error)]
pub enum HdfError {
    #[error("GDAL error: {0}")]
    Gdal(#[from] gdal::errors::GdalError),
    #[error("No subdatasets found in container: {0}")]
    NoSubdatasets(String),
    #[error("Band index {band} out of range (container has {count} subdatasets)")]
    BandOutOfRange { band: usize, count: usize },
    #[error("No scale metadata found for subdataset: {subdataset}")]
    MissingScaleMetadata { subdataset: String },
}

/// Recognized scale metadata keys, checked in order before the substring
/// fallback. Matching is case-insensitive on the exact key.
const SCALE_KEY_ALIASES: &[&str] = &["scale_factor", "scale", "scale_ratio"];

/// One raster layer embedded in the HDF container, addressable through its
/// GDAL connection string.
#[derive(Debug, Clone)]
pub struct Subdataset {
    /// 1-based position in the container's subdataset list
    pub index: usize,
    /// GDAL connection string (e.g. `HDF4_EOS:EOS_GRID:"file.hdf":Grid:NDVI`)
    pub name: String,
    /// Human-readable description reported by the driver
    pub description: String,
}

impl Subdataset {
    /// Last `:`-separated field of the connection string, quotes trimmed.
    /// Used both for intermediate VRT file names and for band labels.
    pub fn name_fragment(&self) -> &str {
        name_fragment(&self.name)
    }
}

/// Reader for multi-subdataset HDF containers via GDAL
pub struct HdfReader {
    pub dataset: Dataset,
    pub subdatasets: Vec<Subdataset>,
}

impl HdfReader {
    /// Open an HDF container read-only and enumerate its subdatasets in
    /// driver-reported order. A container without subdatasets is rejected.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, HdfError> {
        let path = path.as_ref();
        let dataset = Dataset::open(path)?;

        let mut subdatasets = Vec::new();
        let mut index = 1;
        while let Some(name) =
            dataset.metadata_item(&format!("SUBDATASET_{index}_NAME"), "SUBDATASETS")
        {
            let description = dataset
                .metadata_item(&format!("SUBDATASET_{index}_DESC"), "SUBDATASETS")
                .unwrap_or_default();
            subdatasets.push(Subdataset {
                index,
                name,
                description,
            });
            index += 1;
        }

        if subdatasets.is_empty() {
            return Err(HdfError::NoSubdatasets(path.display().to_string()));
        }

        Ok(HdfReader {
            dataset,
            subdatasets,
        })
    }

    /// Look up the multiplicative scale factor in a subdataset's default
    /// metadata domain. Aborts the conversion when no recognized key exists.
    pub fn subdataset_scale(&self, sub: &Subdataset) -> Result<String, HdfError> {
        let dataset = Dataset::open(Path::new(&sub.name))?;

        let mut entries = Vec::new();
        if let Some(items) = dataset.metadata_domain("") {
            for entry in items {
                if let Some((key, value)) = entry.split_once('=') {
                    entries.push((key.to_string(), value.to_string()));
                }
            }
        }

        lookup_scale(&entries).ok_or_else(|| HdfError::MissingScaleMetadata {
            subdataset: sub.name.clone(),
        })
    }
}

/// First-match scale lookup: exact alias hits win in `SCALE_KEY_ALIASES`
/// order, then the alphabetically first key containing "scale" is taken as a
/// deterministic fallback.
pub(crate) fn lookup_scale(entries: &[(String, String)]) -> Option<String> {
    for alias in SCALE_KEY_ALIASES {
        if let Some((_, value)) = entries.iter().find(|(key, _)| key.eq_ignore_ascii_case(alias)) {
            return Some(value.clone());
        }
    }

    let mut candidates: Vec<&(String, String)> = entries
        .iter()
        .filter(|(key, _)| key.to_ascii_lowercase().contains("scale"))
        .collect();
    candidates.sort_by(|a, b| a.0.cmp(&b.0));
    candidates.first().map(|(_, value)| value.clone())
}

/// Last `:`-separated field of a GDAL connection string, quotes trimmed.
pub(crate) fn name_fragment(connection: &str) -> &str {
    connection
        .rsplit(':')
        .next()
        .unwrap_or(connection)
        .trim_matches('"')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn scale_lookup_prefers_alias_order() {
        let meta = entries(&[("scale", "2"), ("scale_factor", "0.0001")]);
        assert_eq!(lookup_scale(&meta).as_deref(), Some("0.0001"));
    }

    #[test]
    fn scale_lookup_is_case_insensitive() {
        let meta = entries(&[("SCALE_FACTOR", "0.02")]);
        assert_eq!(lookup_scale(&meta).as_deref(), Some("0.02"));
    }

    #[test]
    fn scale_lookup_falls_back_to_first_sorted_substring_match() {
        let meta = entries(&[
            ("z_rescale_hint", "9"),
            ("calibrated_scaling", "4"),
            ("units", "K"),
        ]);
        // Neither key is an exact alias; "calibrated_scaling" sorts first.
        assert_eq!(lookup_scale(&meta).as_deref(), Some("4"));
    }

    #[test]
    fn scale_lookup_reports_absence() {
        let meta = entries(&[("units", "K"), ("valid_range", "0,10000")]);
        assert_eq!(lookup_scale(&meta), None);
    }

    #[test]
    fn fragment_takes_last_field_and_trims_quotes() {
        assert_eq!(
            name_fragment("HDF4_EOS:EOS_GRID:\"MOD13Q1.hdf\":MODIS_Grid:\"250m 16 days NDVI\""),
            "250m 16 days NDVI"
        );
        assert_eq!(name_fragment("HDF4_SDS:UNKNOWN:file.hdf:0"), "0");
        assert_eq!(name_fragment("plain"), "plain");
    }

    #[test]
    fn missing_scale_error_names_the_subdataset() {
        let err = HdfError::MissingScaleMetadata {
            subdataset: "HDF4_EOS:EOS_GRID:\"a.hdf\":Grid:NDVI".to_string(),
        };
        assert!(err.to_string().contains("No scale metadata"));
        assert!(err.to_string().contains("NDVI"));
    }
}
