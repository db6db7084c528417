//! Writes the picker's current rasters and palette to a folder.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::app::PickerApp;
use crate::constants::export_files;
use crate::swatch::palette_listing;

/// Errors that can occur while exporting.
#[derive(Error, Debug)]
pub enum ExportError {
    /// I/O error while creating the folder or writing text
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding or writing failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Paths written by [`export_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    pub wheel: PathBuf,
    pub plane: PathBuf,
    pub palette: PathBuf,
}

/// Export the hue wheel, the SV plane and the palette listing into `dir`.
///
/// The folder is created if missing; existing files are overwritten.
pub fn export_all(app: &PickerApp, dir: &Path) -> Result<ExportedFiles, ExportError> {
    std::fs::create_dir_all(dir)?;

    let files = ExportedFiles {
        wheel: dir.join(export_files::WHEEL),
        plane: dir.join(export_files::PLANE),
        palette: dir.join(export_files::PALETTE),
    };

    let state = app.state();
    state.wheel().raster().save_png(&files.wheel)?;
    state.plane().raster().save_png(&files.plane)?;
    std::fs::write(&files.palette, palette_listing(app.swatches()))?;

    log::info!(
        "Exported {} palette color(s) and rasters to {:?}",
        app.swatches().len(),
        dir
    );
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Message;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("huewheel-{}-{}", name, std::process::id()))
    }

    #[test]
    fn test_export_all() {
        let dir = temp_dir("export");
        let mut app = PickerApp::new();
        app.update(Message::DivisionChanged(2));

        let files = export_all(&app, &dir).unwrap();

        let palette = std::fs::read_to_string(&files.palette).unwrap();
        assert_eq!(palette, "#FF0000\trgb(255, 0, 0)\n#00FFFF\trgb(0, 255, 255)\n");

        let wheel = image::open(&files.wheel).unwrap().to_rgba8();
        assert_eq!(wheel.dimensions(), (511, 511));
        assert_eq!(wheel.get_pixel(0, 0).0[3], 0);
        assert_eq!(wheel.get_pixel(255, 255).0, [255, 255, 255, 255]);

        let plane = image::open(&files.plane).unwrap().to_rgba8();
        assert_eq!(plane.dimensions(), (256, 256));
        assert_eq!(plane.get_pixel(255, 0).0, [255, 0, 0, 255]);
        assert_eq!(plane.get_pixel(0, 255).0, [0, 0, 0, 255]);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
