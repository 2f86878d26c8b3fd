//! Shared types used across hdf2tif.
//! Currently holds `BandSelection`, the request-order band filter carried
//! through the conversion pipeline.
use serde::{Deserialize, Serialize};

/// Which subdatasets of the HDF container become bands of the output TIFF.
///
/// Explicit indices are 1-based positions into the subdataset list, kept in
/// the order they were requested; that order decides both band order in the
/// merged VRT and the sequence numbers encoded in the intermediate file names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandSelection {
    /// Every subdataset, in the order GDAL reports them.
    All,
    /// Explicit 1-based subdataset indices, in request order.
    Explicit(Vec<usize>),
}

impl BandSelection {
    /// Build a selection from a possibly-empty index list; empty means all.
    pub fn from_indices(indices: &[usize]) -> Self {
        if indices.is_empty() {
            BandSelection::All
        } else {
            BandSelection::Explicit(indices.to_vec())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, BandSelection::All)
    }
}

impl Default for BandSelection {
    fn default() -> Self {
        BandSelection::All
    }
}

impl std::fmt::Display for BandSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BandSelection::All => write!(f, "all"),
            BandSelection::Explicit(bands) => {
                let list: Vec<String> = bands.iter().map(|b| b.to_string()).collect();
                write!(f, "{}", list.join(","))
            }
        }
    }
}
