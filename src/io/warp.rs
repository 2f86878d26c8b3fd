use std::path::Path;
use std::process::Command;

use thiserror::Error;
use tracing::info;

/// Source projection of sinusoidal-grid products (MODIS land grid):
/// spherical Earth of radius 6371007.181 m, datum grid shifts disabled.
pub const SINUSOIDAL_SRS: &str = "+proj=sinu +R=6371007.181 +nadgrids=@null +wktext";
/// Geographic WGS84 target.
pub const TARGET_SRS: &str = "EPSG:4326";
/// Warp memory limit handed to gdalwarp, in megabytes.
pub const WARP_MEMORY_LIMIT: &str = "4096";

/// Errors encountered while producing the output TIFF
#[derive(Debug, Error)]
pub enum WarpError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("gdalwarp exited with {status}")]
    CommandFailed { status: std::process::ExitStatus },
}

pub(crate) fn warp_args(source: &Path, target: &Path, reproject: bool) -> Vec<String> {
    let mut args: Vec<String> = vec!["-of".into(), "GTiff".into(), "-overwrite".into()];
    if reproject {
        args.push("-s_srs".into());
        args.push(SINUSOIDAL_SRS.into());
        args.push("-t_srs".into());
        args.push(TARGET_SRS.into());
        args.push("-wm".into());
        args.push(WARP_MEMORY_LIMIT.into());
        args.push("-multi".into());
        args.push("-wo".into());
        args.push("NUM_THREADS=ALL_CPUS".into());
    }
    args.push(source.to_string_lossy().into_owned());
    args.push(target.to_string_lossy().into_owned());
    args
}

/// Warp the merged VRT into the output TIFF. With reprojection (the default
/// pipeline mode) the raster is resampled from the fixed sinusoidal grid to
/// geographic WGS84; without it this is a plain warp-copy into GTiff.
pub fn warp_to_tiff(source: &Path, target: &Path, reproject: bool) -> Result<(), WarpError> {
    let args = warp_args(source, target, reproject);
    info!("Running gdalwarp {}", args.join(" "));
    let status = Command::new("gdalwarp")
        .args(args.iter().map(|s| s.as_str()))
        .status()?;
    if !status.success() {
        return Err(WarpError::CommandFailed { status });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reprojection_args_carry_srs_and_threading() {
        let args = warp_args(Path::new("in.vrt"), Path::new("out.tif"), true);
        let pos = |flag: &str| args.iter().position(|a| a == flag).expect(flag);

        assert_eq!(args[pos("-s_srs") + 1], SINUSOIDAL_SRS);
        assert_eq!(args[pos("-t_srs") + 1], TARGET_SRS);
        assert_eq!(args[pos("-wm") + 1], WARP_MEMORY_LIMIT);
        assert!(args.contains(&"-multi".to_string()));
        assert_eq!(args[pos("-wo") + 1], "NUM_THREADS=ALL_CPUS");
        assert_eq!(args[args.len() - 2], "in.vrt");
        assert_eq!(args[args.len() - 1], "out.tif");
    }

    #[test]
    fn plain_copy_args_have_no_srs() {
        let args = warp_args(Path::new("in.vrt"), Path::new("out.tif"), false);
        assert!(!args.contains(&"-s_srs".to_string()));
        assert!(!args.contains(&"-t_srs".to_string()));
        assert!(!args.contains(&"-wm".to_string()));
        assert_eq!(
            args,
            vec!["-of", "GTiff", "-overwrite", "in.vrt", "out.tif"]
        );
    }
}
