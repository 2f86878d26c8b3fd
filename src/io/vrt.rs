use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use gdal::Dataset;
use gdal::programs::raster::{BuildVRTOptions, build_vrt};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use thiserror::Error;

/// Errors encountered while building or patching VRT intermediates
#[derive(Debug, Error)]
pub enum VrtError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("GDAL error: {0}")]
    Gdal(#[from] gdal::errors::GdalError),
    #[error("Missing `{0}` element in VRT document")]
    MissingElement(&'static str),
}

/// One single-band VRT intermediate together with the position it must occupy
/// in the merged raster. The merge step follows this carried order; the file
/// name encodes the same order for inspection only.
#[derive(Debug, Clone)]
pub struct BandVrt {
    /// 1-based position in the output band stack
    pub order: usize,
    /// Original 1-based subdataset index when bands were requested explicitly
    pub band: Option<usize>,
    pub path: PathBuf,
}

/// Intermediate VRT file name. Explicit requests encode both the request
/// order and the original band index; full-container runs encode order only.
pub fn vrt_file_name(order: usize, band: Option<usize>, fragment: &str) -> String {
    match band {
        Some(band) => format!("{order:02}_Band{band:02}_{fragment}.vrt"),
        None => format!("Band{order:02}_{fragment}.vrt"),
    }
}

/// Build a single-band VRT referencing one subdataset.
pub fn build_band_vrt(connection: &str, output: &Path) -> Result<(), VrtError> {
    let source = Dataset::open(Path::new(connection))?;
    // The VRT file hits disk when the returned handle closes.
    let vrt = build_vrt(Some(output), &[source], None)?;
    drop(vrt);
    Ok(())
}

/// Patch a band VRT in place: force the raster band's declared data type to
/// Float32 (whatever the driver wrote) and append a `ScaleRatio` text element
/// under the band's `ComplexSource`. The file is only rewritten once both
/// edits succeeded.
pub fn apply_scale_fix(vrt_path: &Path, scale: &str) -> Result<(), VrtError> {
    let xml = fs::read_to_string(vrt_path)?;

    let mut reader = Reader::from_str(&xml);
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    writer.write_event(Event::Decl(BytesDecl::new("1.0", None, None)))?;

    let mut patched_band = false;
    let mut injected_scale = false;

    loop {
        match reader.read_event()? {
            // Replaced by the declaration written above
            Event::Decl(_) => {}
            Event::Start(e) if e.name().as_ref() == b"VRTRasterBand" => {
                let mut band = BytesStart::new("VRTRasterBand");
                for attr in e.attributes() {
                    let attr = attr.map_err(quick_xml::Error::InvalidAttr)?;
                    if attr.key.as_ref() != b"dataType" {
                        band.push_attribute(attr);
                    }
                }
                band.push_attribute(("dataType", "Float32"));
                patched_band = true;
                writer.write_event(Event::Start(band))?;
            }
            Event::End(e) if e.name().as_ref() == b"ComplexSource" => {
                writer.write_event(Event::Start(BytesStart::new("ScaleRatio")))?;
                writer.write_event(Event::Text(BytesText::new(scale)))?;
                writer.write_event(Event::End(BytesEnd::new("ScaleRatio")))?;
                injected_scale = true;
                writer.write_event(Event::End(e))?;
            }
            Event::Eof => break,
            event => writer.write_event(event)?,
        }
    }

    if !patched_band {
        return Err(VrtError::MissingElement("VRTRasterBand"));
    }
    if !injected_scale {
        return Err(VrtError::MissingElement("ComplexSource"));
    }

    fs::write(vrt_path, writer.into_inner().into_inner())?;
    Ok(())
}

/// Stack single-band VRTs into one multi-band VRT, bands kept separate
/// (not pixel-interleaved). Band order follows the carried list.
pub fn merge_band_vrts(band_vrts: &[BandVrt], output: &Path) -> Result<(), VrtError> {
    let mut sources = Vec::with_capacity(band_vrts.len());
    for band in band_vrts {
        sources.push(Dataset::open(&band.path)?);
    }
    let options = BuildVRTOptions::new(vec!["-separate"])?;
    let merged = build_vrt(Some(output), &sources, Some(options))?;
    drop(merged);
    Ok(())
}
