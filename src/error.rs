//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, HDF, VRT, and warp errors, and provides semantic
//! variants for argument validation and configuration failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HDF reader error: {0}")]
    Hdf(#[from] crate::io::HdfError),

    #[error("VRT error: {0}")]
    Vrt(#[from] crate::io::VrtError),

    #[error("Warp error: {0}")]
    Warp(#[from] crate::io::WarpError),

    #[error("GDAL error: {0}")]
    Gdal(#[from] gdal::errors::GdalError),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}
