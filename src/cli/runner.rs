use tracing::info;

use hdf2tif::api::{convert_directory, convert_hdf_to_path};
use hdf2tif::{BandSelection, ConversionParams};

use super::args::CliArgs;
use super::errors::AppError;

/// Merge CLI flags over JSON-file defaults (when `--params` is given) or the
/// built-in defaults. Explicitly passed flags always win.
fn resolve_params(args: &CliArgs) -> Result<ConversionParams, Box<dyn std::error::Error>> {
    let mut params = match &args.params {
        Some(path) => ConversionParams::from_json_file(path)?,
        None => ConversionParams::default(),
    };

    if !args.bands.is_empty() {
        params.bands = BandSelection::Explicit(args.bands.clone());
    }
    if let Some(overwrite) = args.overwrite {
        params.overwrite = overwrite;
    }
    if args.no_reproject {
        params.reproject = false;
    }
    if let Some(skip) = args.skip_if_exists {
        params.skip_if_exists = skip;
    }
    if let Some(dir) = &args.output_search_dir {
        params.output_search_dir = Some(dir.clone());
    }

    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = resolve_params(&args)?;

    if let Some(input_dir) = &args.input_dir {
        info!("Starting batch conversion from directory: {:?}", input_dir);

        let report = convert_directory(input_dir, &params, args.keep_going)?;

        info!("Batch conversion complete!");
        info!("Processed: {}", report.processed);
        info!("Skipped: {}", report.skipped);
        info!("Errors: {}", report.errors);
    } else {
        let hdf_file = args.hdf_file.clone().ok_or(AppError::MissingArgument {
            arg: "HDF_FILE".to_string(),
        })?;

        let output = convert_hdf_to_path(&hdf_file, &params)?;
        info!("Successfully converted: {:?} -> {:?}\n", hdf_file, output);
    }

    Ok(())
}
