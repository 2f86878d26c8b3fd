#![doc = r#"
hdf2tif — turn multi-band HDF remote-sensing products into GeoTIFFs.

This crate converts an HDF scientific raster container (e.g. a MODIS
sinusoidal-grid product) into a single georeferenced TIFF: each selected
subdataset becomes a band, raw values are scale-corrected through the
container's own scale metadata, and the stack is reprojected from the
sinusoidal grid to geographic WGS84. All raster decoding, VRT construction,
and warping is delegated to GDAL; this crate sequences the steps and patches
the intermediate VRT XML.

Requirements
------------
- GDAL development headers and runtime available on your system.
- The `gdalwarp` executable on PATH for the reprojection step.
- Rust 2024 edition toolchain.

Quick start: convert one product
--------------------------------
```rust,no_run
use std::path::Path;
use hdf2tif::{convert_hdf_to_path, BandSelection, ConversionParams};

fn main() -> hdf2tif::Result<()> {
    let params = ConversionParams {
        bands: BandSelection::Explicit(vec![1, 2]),
        ..ConversionParams::default()
    };

    let tiff = convert_hdf_to_path(Path::new("/data/MOD13Q1.A2017336.h18v03.hdf"), &params)?;
    println!("wrote {}", tiff.display());
    Ok(())
}
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use hdf2tif::{convert_directory, ConversionParams};

fn main() -> hdf2tif::Result<()> {
    let report = convert_directory(
        Path::new("/data/tiles"),
        &ConversionParams::default(),
        true, // continue_on_error
    )?;
    println!(
        "processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(())
}
```

Error handling
--------------
All public functions return `hdf2tif::Result<T>`; match on `hdf2tif::Error`
to handle specific cases, e.g. a malformed container or missing scale
metadata. The pipeline fails fast: the first error aborts the run.

```rust,no_run
use std::path::Path;
use hdf2tif::{convert_hdf_to_path, ConversionParams, Error};

fn main() {
    match convert_hdf_to_path(Path::new("/bad/path.hdf"), &ConversionParams::default()) {
        Ok(tiff) => println!("wrote {}", tiff.display()),
        Err(Error::Hdf(e)) => eprintln!("HDF error: {e}"),
        Err(Error::Warp(e)) => eprintln!("warp error: {e}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — shared types (e.g. `BandSelection`).
- [`io`] — HDF reader, VRT intermediates, warp execution, metadata writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::ConversionParams;
pub use crate::error::{Error, Result};
pub use crate::types::BandSelection;

// Readers and writers
pub use crate::io::hdf::{HdfError, HdfReader, Subdataset};
pub use crate::io::vrt::{BandVrt, VrtError};
pub use crate::io::warp::WarpError;
pub use crate::io::writers::metadata::{band_labels, embed_tiff_metadata};

// High-level API re-exports
pub use crate::api::{
    BatchReport, convert_directory, convert_hdf_to_path, iterate_hdf_products,
};
