//! Raster to PNG conversion.
//!
//! Window rasters arrive as 32-bit premultiplied BGRA with possibly padded
//! rows. They are repacked as straight RGBA and written as PNG, which is
//! lossless.

use std::io::Cursor;

use image::ImageEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};

use crate::platform::Raster;

const BYTES_PER_PIXEL: usize = 4;

/// Repack a BGRA raster into tightly packed, non-premultiplied RGBA.
///
/// # Errors
///
/// Returns a description of the problem when the raster is not 32 bits per
/// pixel or its buffer is shorter than its geometry claims.
pub fn bgra_to_rgba(raster: &Raster) -> Result<Vec<u8>, String> {
    if raster.bits_per_pixel() != BYTES_PER_PIXEL * 8 {
        return Err(format!(
            "unsupported pixel size: {} bits",
            raster.bits_per_pixel()
        ));
    }

    if raster.bytes_per_row() == 0 {
        return Err("row stride is zero".to_string());
    }

    let row_len = raster.width() * BYTES_PER_PIXEL;
    if raster.bytes_per_row() < row_len {
        return Err(format!(
            "row stride {} is smaller than row length {}",
            raster.bytes_per_row(),
            row_len
        ));
    }

    let required = match raster.height() {
        0 => 0,
        h => raster.bytes_per_row() * (h - 1) + row_len,
    };
    if raster.data().len() < required {
        return Err(format!(
            "raster holds {} bytes, {} required",
            raster.data().len(),
            required
        ));
    }

    let mut rgba = Vec::with_capacity(row_len * raster.height());
    for row in raster
        .data()
        .chunks(raster.bytes_per_row())
        .take(raster.height())
    {
        for px in row[..row_len].chunks_exact(BYTES_PER_PIXEL) {
            let (b, g, r, a) = (px[0], px[1], px[2], px[3]);
            rgba.extend_from_slice(&[unpremultiply(r, a), unpremultiply(g, a), unpremultiply(b, a), a]);
        }
    }
    Ok(rgba)
}

fn unpremultiply(channel: u8, alpha: u8) -> u8 {
    match alpha {
        0 => 0,
        255 => channel,
        a => ((u16::from(channel) * 255 + u16::from(a) / 2) / u16::from(a)).min(255) as u8,
    }
}

/// Encode a window raster as PNG.
///
/// # Errors
///
/// Returns a description of the problem when the raster geometry is invalid
/// or the PNG encoder fails.
pub fn encode_png(raster: &Raster) -> Result<Vec<u8>, String> {
    if raster.is_empty() {
        return Err("raster is empty".to_string());
    }

    let width = u32::try_from(raster.width()).map_err(|e| format!("width: {}", e))?;
    let height = u32::try_from(raster.height()).map_err(|e| format!("height: {}", e))?;
    let rgba = bgra_to_rgba(raster)?;

    let mut output = Vec::new();
    let encoder = PngEncoder::new_with_quality(
        Cursor::new(&mut output),
        CompressionType::Default,
        FilterType::Adaptive,
    );
    encoder
        .write_image(&rgba, width, height, image::ExtendedColorType::Rgba8)
        .map_err(|e| e.to_string())?;

    if output.is_empty() {
        return Err("encoder produced no output".to_string());
    }
    Ok(output)
}
