//! Command Line Interface (CLI) layer for hdf2tif.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for single-file and batch
//! conversion flows. It wires user-provided options to the underlying
//! library functionality exposed via `hdf2tif::api`.
//!
//! If you are embedding hdf2tif into another application, prefer using
//! the high-level `hdf2tif::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
