use std::path::Path;

use std::io::Cursor;

use anyhow::Context;
use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;

use crate::foundation::error::{ShapeFxError, ShapeFxResult};

/// Explicit output encoder, independent of the file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum Encoding {
    /// Lossless PNG.
    Png,
    /// Baseline JPEG at `quality` in `1..=100`. Alpha is dropped.
    Jpeg {
        /// Encoder quality.
        quality: u8,
    },
}

/// Decode encoded image bytes, guessing the format from the content.
pub fn decode_image(bytes: &[u8]) -> ShapeFxResult<DynamicImage> {
    let img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(img)
}

/// Read and decode an image file.
pub fn load_image(path: impl AsRef<Path>) -> ShapeFxResult<DynamicImage> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    let img = image::load_from_memory(&bytes)
        .with_context(|| format!("decode image '{}'", path.display()))?;
    Ok(img)
}

/// Encode `img` to `path`; the format follows the file extension.
///
/// Missing parent directories are created.
pub fn save_image(img: &DynamicImage, path: impl AsRef<Path>) -> ShapeFxResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory '{}'", parent.display()))?;
    }
    img.save(path)
        .with_context(|| format!("encode image '{}'", path.display()))?;
    Ok(())
}

/// Encode `img` in memory with an explicit encoder.
pub fn encode_image(img: &DynamicImage, encoding: Encoding) -> ShapeFxResult<Vec<u8>> {
    let mut buf = Vec::new();
    match encoding {
        Encoding::Png => img
            .write_with_encoder(PngEncoder::new(Cursor::new(&mut buf)))
            .context("encode png")?,
        Encoding::Jpeg { quality } => {
            if !(1..=100).contains(&quality) {
                return Err(ShapeFxError::validation(format!(
                    "jpeg quality must be in 1..=100, got {quality}"
                )));
            }
            let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut buf), quality);
            let opaque = match img {
                DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => img.clone(),
                other => DynamicImage::ImageRgb8(other.to_rgb8()),
            };
            opaque
                .write_with_encoder(encoder)
                .with_context(|| format!("encode jpeg at quality {quality}"))?;
        }
    }
    Ok(buf)
}

/// Encode `img` with `encoding` and write it to `path`, whatever its extension.
///
/// Missing parent directories are created.
pub fn save_image_with(
    img: &DynamicImage,
    path: impl AsRef<Path>,
    encoding: Encoding,
) -> ShapeFxResult<()> {
    let path = path.as_ref();
    let bytes = encode_image(img, encoding)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write image '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
