//! File output for rendered sprites and charts

use image::RgbaImage;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for output operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Where the artifacts of one creature land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub sprite_svg: PathBuf,
    pub sprite_png: PathBuf,
    pub radar_svg: PathBuf,
}

impl OutputPaths {
    /// Paths for a creature slug under `dir`:
    /// `{slug}.svg`, `{slug}.png` and `{slug}-radar.svg`.
    pub fn new(dir: &Path, slug: &str) -> Self {
        Self {
            sprite_svg: dir.join(format!("{}.svg", slug)),
            sprite_png: dir.join(format!("{}.png", slug)),
            radar_svg: dir.join(format!("{}-radar.svg", slug)),
        }
    }
}

fn create_parent(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Write SVG markup to a file, creating parent directories as needed.
pub fn save_svg(markup: &str, path: &Path) -> Result<(), OutputError> {
    create_parent(path)?;
    fs::write(path, markup)?;
    Ok(())
}

/// Save an RGBA image to a PNG file, creating parent directories as needed.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    create_parent(path)?;
    image.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::tempdir;

    #[test]
    fn test_output_paths() {
        let paths = OutputPaths::new(Path::new("build"), "003-observurtle");
        assert_eq!(paths.sprite_svg, PathBuf::from("build/003-observurtle.svg"));
        assert_eq!(paths.sprite_png, PathBuf::from("build/003-observurtle.png"));
        assert_eq!(paths.radar_svg, PathBuf::from("build/003-observurtle-radar.svg"));
    }

    #[test]
    fn test_save_svg_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/dirs/test.svg");

        save_svg("<svg/>", &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<svg/>");
    }

    #[test]
    fn test_save_png_basic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        let mut image = RgbaImage::new(2, 2);
        image.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        image.put_pixel(1, 1, Rgba([0, 0, 0, 0]));

        save_png(&image, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (2, 2));
        assert_eq!(*loaded.get_pixel(0, 0), Rgba([255, 0, 0, 255]));
        assert_eq!(*loaded.get_pixel(1, 1), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_save_png_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a/b/test.png");

        save_png(&RgbaImage::new(1, 1), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_to_unwritable_path_is_io_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();

        let err = save_svg("<svg/>", &blocker.join("child.svg")).unwrap_err();
        assert!(matches!(err, OutputError::Io(_)));
    }
}
