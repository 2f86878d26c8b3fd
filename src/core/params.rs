use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::BandSelection;

/// Conversion parameters suitable for config files and programmatic use
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionParams {
    pub bands: BandSelection,
    /// Delete a pre-existing `.tif` on the search path before converting
    pub overwrite: bool,
    /// Reproject from the sinusoidal grid to geographic WGS84
    pub reproject: bool,
    /// Leave an already-present output TIFF untouched instead of re-warping
    pub skip_if_exists: bool,
    /// Where overwrite deletion looks for a prior TIFF; None means the
    /// input file's own directory
    pub output_search_dir: Option<PathBuf>,
}

impl Default for ConversionParams {
    fn default() -> Self {
        Self {
            bands: BandSelection::All,
            overwrite: true,
            reproject: true,
            skip_if_exists: true,
            output_search_dir: None,
        }
    }
}

impl ConversionParams {
    /// Load parameters from a JSON file; absent fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_preserve_original_behavior() {
        let params = ConversionParams::default();
        assert!(params.bands.is_all());
        assert!(params.overwrite);
        assert!(params.reproject);
        assert!(params.skip_if_exists);
        assert!(params.output_search_dir.is_none());
    }

    #[test]
    fn partial_json_fills_missing_fields_with_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("params.json");
        fs::write(&path, r#"{"reproject": false, "bands": {"Explicit": [2, 1]}}"#)
            .expect("write params");

        let params = ConversionParams::from_json_file(&path).expect("load params");
        assert!(!params.reproject);
        assert_eq!(params.bands, BandSelection::Explicit(vec![2, 1]));
        assert!(params.overwrite);
        assert!(params.skip_if_exists);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("params.json");
        fs::write(&path, "{not json").expect("write params");

        let err = ConversionParams::from_json_file(&path).expect_err("must fail");
        assert!(err.to_string().contains("Config error"));
    }
}
