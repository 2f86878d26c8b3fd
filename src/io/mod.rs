//! I/O layer for reading HDF containers and producing the TIFF output.
//! Provides the `hdf` container reader, `vrt` intermediates, the `warp`
//! step, and `writers` for metadata embedding.
pub mod hdf;
pub use hdf::{HdfError, HdfReader, Subdataset};

pub mod vrt;
pub use vrt::{BandVrt, VrtError};

pub mod warp;
pub use warp::WarpError;

pub mod writers;
