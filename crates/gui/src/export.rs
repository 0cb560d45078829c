//! PNG export of captured views and design thumbnails.

use std::path::{Path, PathBuf};

use egui::ColorImage;
use image::{ImageFormat, RgbaImage};
use thiserror::Error;

/// Longest side of a design thumbnail in pixels
pub const THUMBNAIL_SIZE: u32 = 256;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("captured image is empty")]
    EmptyCapture,
}

/// File name for an exported view, e.g. `my-living-room.png`
pub fn export_file_name(stem: &str) -> String {
    format!("{stem}.png")
}

/// Cut the view's rectangle (in points) out of a full-window screenshot
pub fn crop(screenshot: &ColorImage, rect: egui::Rect, pixels_per_point: f32) -> ColorImage {
    screenshot.region(&rect, Some(pixels_per_point))
}

/// Convert to an `image` buffer with straight alpha
pub fn to_rgba(capture: &ColorImage) -> Result<RgbaImage, ExportError> {
    let [w, h] = capture.size;
    if w == 0 || h == 0 {
        return Err(ExportError::EmptyCapture);
    }
    let bytes: Vec<u8> = capture
        .pixels
        .iter()
        .flat_map(|c| c.to_srgba_unmultiplied())
        .collect();
    RgbaImage::from_raw(w as u32, h as u32, bytes).ok_or(ExportError::EmptyCapture)
}

fn ensure_parent(path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ExportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Write a capture as PNG
pub fn save_png(capture: &ColorImage, path: &Path) -> Result<(), ExportError> {
    let rgba = to_rgba(capture)?;
    ensure_parent(path)?;
    rgba.save_with_format(path, ImageFormat::Png)?;
    tracing::info!(
        "Exported {}×{} image to {}",
        rgba.width(),
        rgba.height(),
        path.display()
    );
    Ok(())
}

/// Downscale so the longest side is at most [`THUMBNAIL_SIZE`]
pub fn thumbnail(capture: &ColorImage) -> Result<RgbaImage, ExportError> {
    let rgba = to_rgba(capture)?;
    let (w, h) = rgba.dimensions();
    let longest = w.max(h);
    if longest <= THUMBNAIL_SIZE {
        return Ok(rgba);
    }
    let scale = THUMBNAIL_SIZE as f64 / longest as f64;
    let tw = ((w as f64 * scale).round() as u32).max(1);
    let th = ((h as f64 * scale).round() as u32).max(1);
    Ok(image::imageops::thumbnail(&rgba, tw, th))
}

/// Write a design thumbnail as PNG
pub fn save_thumbnail(capture: &ColorImage, path: &Path) -> Result<(), ExportError> {
    let thumb = thumbnail(capture)?;
    ensure_parent(path)?;
    thumb.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    fn capture(w: usize, h: usize) -> ColorImage {
        ColorImage::new([w, h], Color32::from_rgb(200, 100, 50))
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name("my-room"), "my-room.png");
    }

    #[test]
    fn test_empty_capture_rejected() {
        assert!(matches!(to_rgba(&capture(0, 10)), Err(ExportError::EmptyCapture)));
    }

    #[test]
    fn test_save_png_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exports").join("room.png");
        save_png(&capture(8, 4), &path).unwrap();
        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (8, 4));
        assert_eq!(loaded.get_pixel(0, 0).0, [200, 100, 50, 255]);
    }

    #[test]
    fn test_thumbnail_keeps_aspect() {
        let thumb = thumbnail(&capture(1024, 512)).unwrap();
        assert_eq!(thumb.dimensions(), (256, 128));
        let small = thumbnail(&capture(100, 50)).unwrap();
        assert_eq!(small.dimensions(), (100, 50));
    }

    #[test]
    fn test_crop_uses_pixels_per_point() {
        let full = capture(200, 100);
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 10.0), egui::vec2(20.0, 10.0));
        let cropped = crop(&full, rect, 2.0);
        assert_eq!(cropped.size, [40, 20]);
    }
}
