// src/screenshot.rs
// Optional screenshot attachment for the analysis request

use std::io::Cursor;
use std::path::Path;

use crate::error::Result;

/// Load a screenshot from disk and re-encode it as PNG, so the uploaded
/// bytes always match the image/png MIME type regardless of the source
/// format (jpg, png, ...).
pub fn load_screenshot(path: &Path) -> Result<Vec<u8>> {
    let img = image::open(path)?;
    let mut png_bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut png_bytes), image::ImageFormat::Png)?;
    Ok(png_bytes)
}
