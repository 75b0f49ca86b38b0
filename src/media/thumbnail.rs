// SPDX-License-Identifier: MPL-2.0
//! Thumbnail loading for the "next up" overlay.
//!
//! Thumbnails are fetched fire-and-forget: the host schedules a load when a
//! candidate carries an image URL and simply drops the result on failure.
//! There is no retry and no user-visible error state for a missing thumbnail;
//! the overlay renders without one.

use crate::error::{Error, Result};
use iced::widget::image::Handle as ImageHandle;
use std::path::Path;

/// Loads a thumbnail from an http(s) URL or a local path and converts it
/// into an Iced image handle.
pub async fn load(url: &str) -> Result<ImageHandle> {
    let bytes = if url.starts_with("http://") || url.starts_with("https://") {
        fetch_remote(url).await?
    } else {
        tokio::fs::read(Path::new(url)).await?
    };
    decode(&bytes)
}

async fn fetch_remote(url: &str) -> Result<Vec<u8>> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| Error::Image(e.to_string()))?;
    let response = response
        .error_for_status()
        .map_err(|e| Error::Image(e.to_string()))?;
    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::Image(e.to_string()))?;
    Ok(bytes.to_vec())
}

/// Decodes encoded image bytes into an RGBA image handle.
pub fn decode(bytes: &[u8]) -> Result<ImageHandle> {
    let image = image_rs::load_from_memory(bytes)?;
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageHandle::from_rgba(width, height, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_png_bytes() -> Vec<u8> {
        let mut buffer = std::io::Cursor::new(Vec::new());
        let image = image_rs::RgbaImage::from_pixel(4, 4, image_rs::Rgba([10, 20, 30, 255]));
        image_rs::DynamicImage::ImageRgba8(image)
            .write_to(&mut buffer, image_rs::ImageFormat::Png)
            .expect("encode sample png");
        buffer.into_inner()
    }

    #[test]
    fn decode_produces_handle_for_valid_png() {
        let bytes = sample_png_bytes();
        assert!(decode(&bytes).is_ok());
    }

    #[test]
    fn decode_rejects_garbage_bytes() {
        let result = decode(b"definitely not an image");
        assert!(matches!(result, Err(Error::Image(_))));
    }

    #[tokio::test]
    async fn load_reads_local_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("thumb.png");
        std::fs::write(&path, sample_png_bytes()).expect("write png");

        let handle = load(path.to_str().unwrap()).await;
        assert!(handle.is_ok());
    }

    #[tokio::test]
    async fn load_errors_on_missing_local_file() {
        let result = load("/nonexistent/thumb.png").await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
