//! Background image loading
//!
//! Decodes the user's chosen image and scales it to the fixed window canvas.
//! The GUI turns the resulting RGBA buffer into a Slint image.

use crate::error::{QuickLaunchError, Result};
use image::RgbaImage;
use image::imageops::FilterType;
use std::path::Path;
use tracing::info;

/// Canvas width in pixels (matches the main window)
pub const CANVAS_WIDTH: u32 = 800;

/// Canvas height in pixels (matches the main window)
pub const CANVAS_HEIGHT: u32 = 400;

/// Extensions offered by the background file picker
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Load `path` and resize it to exactly `CANVAS_WIDTH` x `CANVAS_HEIGHT`
///
/// Aspect ratio is not preserved; the image is stretched to fill the window.
pub fn load_background_image(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path).map_err(|source| QuickLaunchError::BackgroundImageError {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        "Background image {} decoded ({}x{}), scaling to {}x{}",
        path.display(),
        image.width(),
        image.height(),
        CANVAS_WIDTH,
        CANVAS_HEIGHT
    );

    Ok(image
        .resize_exact(CANVAS_WIDTH, CANVAS_HEIGHT, FilterType::Triangle)
        .to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_dir;

    #[test]
    fn test_image_is_scaled_to_canvas() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("tiny.png");
        RgbaImage::from_pixel(4, 3, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let scaled = load_background_image(&path).unwrap();
        assert_eq!(scaled.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
        assert_eq!(scaled.get_pixel(400, 200), &image::Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_undecodable_file_is_reported() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = load_background_image(&path).unwrap_err();
        assert!(matches!(
            err,
            QuickLaunchError::BackgroundImageError { ref path, .. } if path.ends_with("broken.png")
        ));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let temp_dir = create_test_dir();
        let result = load_background_image(&temp_dir.path().join("nope.jpg"));
        assert!(result.is_err());
    }
}
