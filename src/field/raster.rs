//! Square pixel store shared by the procedural color fields.

use std::path::Path;

use huewheel_color::Argb;
use image::RgbaImage;

/// A square buffer holding one packed ARGB value per pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    size: u32,
    pixels: Vec<Argb>,
}

impl RasterBuffer {
    /// Create a fully transparent buffer `size` pixels per side.
    pub fn new(size: u32) -> Self {
        let len = (size as usize) * (size as usize);
        Self {
            size,
            pixels: vec![Argb::TRANSPARENT; len],
        }
    }

    /// Pixels per side.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Pixel at `(x, y)`, or `None` outside the buffer.
    pub fn get(&self, x: u32, y: u32) -> Option<Argb> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Argb] {
        &self.pixels
    }

    /// Overwrite every pixel from a function of its coordinates.
    pub fn fill_with(&mut self, mut shade: impl FnMut(u32, u32) -> Argb) {
        let size = self.size;
        for (i, pixel) in self.pixels.iter_mut().enumerate() {
            let x = (i % size as usize) as u32;
            let y = (i / size as usize) as u32;
            *pixel = shade(x, y);
        }
    }

    /// Copy into an RGBA image for encoding.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.size, self.size, |x, y| {
            let color = self.get(x, y).unwrap_or(Argb::TRANSPARENT);
            image::Rgba(color.to_rgba_bytes())
        })
    }

    /// Encode as PNG at `path`.
    pub fn save_png(&self, path: &Path) -> Result<(), image::ImageError> {
        self.to_rgba_image().save(path)
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.size && y < self.size {
            Some(y as usize * self.size as usize + x as usize)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let raster = RasterBuffer::new(4);
        assert_eq!(raster.pixels().len(), 16);
        assert!(raster.pixels().iter().all(|p| *p == Argb::TRANSPARENT));
    }

    #[test]
    fn test_fill_with_coordinates() {
        let mut raster = RasterBuffer::new(3);
        raster.fill_with(|x, y| Argb::from_rgb8([x as u8, y as u8, 0]));
        assert_eq!(raster.get(2, 1), Some(Argb::from_rgb8([2, 1, 0])));
        assert_eq!(raster.get(3, 0), None);
    }

    #[test]
    fn test_to_rgba_image_byte_order() {
        let mut raster = RasterBuffer::new(1);
        raster.fill_with(|_, _| Argb::from_raw(0x8011_2233));
        let image = raster.to_rgba_image();
        assert_eq!(image.get_pixel(0, 0).0, [0x11, 0x22, 0x33, 0x80]);
    }
}
