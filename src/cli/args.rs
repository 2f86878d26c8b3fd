use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hdf2tif", version, about = "HDF2TIF CLI")]
pub struct CliArgs {
    /// Input HDF file (single file mode)
    pub hdf_file: Option<PathBuf>,

    /// Optional 1-based band indices, converted in the given order;
    /// no indices means every subdataset
    #[arg(num_args = 0..)]
    pub bands: Vec<usize>,

    /// Input directory containing HDF files (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Delete a pre-existing TIFF on the search path before converting
    /// [default: true]
    #[arg(long, action = ArgAction::Set, value_name = "BOOL")]
    pub overwrite: Option<bool>,

    /// Disable reprojection to geographic WGS84 (output stays on the
    /// sinusoidal grid)
    #[arg(long, default_value_t = false)]
    pub no_reproject: bool,

    /// Leave an already-present output TIFF untouched instead of re-warping
    /// [default: true]
    #[arg(long, action = ArgAction::Set, value_name = "BOOL")]
    pub skip_if_exists: Option<bool>,

    /// Directory searched for a prior TIFF on overwrite (defaults to the
    /// input file's directory)
    #[arg(long)]
    pub output_search_dir: Option<PathBuf>,

    /// JSON file with conversion parameter defaults; explicit flags win
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Batch mode: continue with the remaining files after an error
    #[arg(long, default_value_t = false)]
    pub keep_going: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
