//! Output writers: band-label construction and TIFF metadata embedding.
pub mod metadata;
pub use metadata::{band_labels, embed_tiff_metadata};
