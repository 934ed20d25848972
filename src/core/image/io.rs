use image::DynamicImage;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::core::operations::{ensure_dir, FileOpError, FileOpResult};

/// Load an image from disk. Logs and returns `None` if it cannot be decoded.
pub fn load_image(image_path: &Path) -> Option<DynamicImage> {
    match image::open(image_path) {
        Ok(img) => Some(img),
        Err(e) => {
            error!("No image: {:?} ({})", image_path, e);
            None
        }
    }
}

/// Save `image` into `output_folder` under the file name of `image_path`.
///
/// The folder is created if needed and the encoder is picked from the
/// extension. Returns the path written.
pub fn save_image(
    image: &DynamicImage,
    output_folder: &Path,
    image_path: &Path,
) -> FileOpResult<PathBuf> {
    ensure_dir(output_folder)?;

    let file_name = image_path.file_name().ok_or_else(|| {
        FileOpError::WriteFailed(format!("{:?} has no file name", image_path))
    })?;
    let output_path = output_folder.join(file_name);

    if let Err(e) = image.save(&output_path) {
        error!("Failed to save image to {:?}: {}", output_path, e);
        return Err(e.into());
    }

    info!("Success {:?}", image_path);
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::fs;

    #[test]
    fn test_load_image_missing_file() {
        assert!(load_image(Path::new("/no/such/image.jpg")).is_none());
    }

    #[test]
    fn test_load_image_garbage_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        fs::write(&path, b"definitely not a png").unwrap();

        assert!(load_image(&path).is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 3, Rgb([10, 20, 30])));

        let out = save_image(&img, &dir.path().join("out"), Path::new("source/frame.png")).unwrap();

        assert_eq!(out, dir.path().join("out").join("frame.png"));
        let loaded = load_image(&out).unwrap().to_rgb8();
        assert_eq!(loaded.dimensions(), (4, 3));
        assert_eq!(*loaded.get_pixel(2, 1), Rgb([10, 20, 30]));
    }

    #[test]
    fn test_save_without_file_name_fails() {
        let dir = tempfile::tempdir().unwrap();
        let img = DynamicImage::ImageRgb8(RgbImage::new(1, 1));

        assert!(save_image(&img, dir.path(), Path::new("..")).is_err());
    }
}
