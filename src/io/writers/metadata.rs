use gdal::{Dataset, DatasetOptions, GdalOpenFlags, Metadata};
use std::path::Path;
use tracing::info;

use crate::io::hdf::Subdataset;

/// Band labels in original subdataset order, one per subdataset of the input
/// container regardless of any band filter: `01:<fragment>`, `02:<fragment>`.
pub fn band_labels(subdatasets: &[Subdataset]) -> Vec<String> {
    subdatasets
        .iter()
        .map(|sub| format!("{:02}:{}", sub.index, sub.name_fragment()))
        .collect()
}

/// Attach the band-name list and conversion provenance to the output TIFF.
/// The labels go in as a single `BAND_NAMES` string in the default domain.
pub fn embed_tiff_metadata(tiff: &Path, labels: &[String]) -> gdal::errors::Result<()> {
    let mut dataset = Dataset::open_ex(
        tiff,
        DatasetOptions {
            open_flags: GdalOpenFlags::GDAL_OF_RASTER | GdalOpenFlags::GDAL_OF_UPDATE,
            ..Default::default()
        },
    )?;

    dataset.set_metadata_item("BAND_NAMES", &labels.join(", "), "")?;
    dataset.set_metadata_item("CONVERSION_TOOL", "hdf2tif", "")?;
    dataset.set_metadata_item("CONVERSION_VERSION", env!("CARGO_PKG_VERSION"), "")?;
    dataset.set_metadata_item("CONVERSION_TIMESTAMP", &chrono::Utc::now().to_rfc3339(), "")?;

    info!("Embedded {} band labels into {:?}", labels.len(), tiff);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subdataset(index: usize, name: &str) -> Subdataset {
        Subdataset {
            index,
            name: name.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn labels_follow_subdataset_order() {
        let subs = vec![
            subdataset(1, "HDF4_EOS:EOS_GRID:\"a.hdf\":Grid:NDVI"),
            subdataset(2, "HDF4_EOS:EOS_GRID:\"a.hdf\":Grid:EVI"),
            subdataset(11, "HDF4_EOS:EOS_GRID:\"a.hdf\":Grid:\"pixel reliability\""),
        ];
        assert_eq!(
            band_labels(&subs),
            vec!["01:NDVI", "02:EVI", "11:pixel reliability"]
        );
    }

    #[test]
    fn labels_cover_every_subdataset() {
        let subs: Vec<Subdataset> = (1..=5)
            .map(|i| subdataset(i, &format!("HDF4_EOS:EOS_GRID:\"a.hdf\":Grid:layer_{i}")))
            .collect();
        let labels = band_labels(&subs);
        assert_eq!(labels.len(), 5);
        assert_eq!(labels[4], "05:layer_5");
    }
}
