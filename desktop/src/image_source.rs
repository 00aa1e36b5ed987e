use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::{OriginDimensions, Point, RgbColor, Size},
};
use image::{ImageFormat, RgbImage};
use log::info;
use sangria_core::SourceImage;

use crate::error::{Error, Result};

/// Decoded image normalised to 8-bit RGB.
pub struct RgbSource(pub RgbImage);

impl OriginDimensions for RgbSource {
    fn size(&self) -> Size {
        Size::new(self.0.width(), self.0.height())
    }
}

impl SourceImage for RgbSource {
    fn pixel(&self, point: Point) -> Rgb888 {
        if point.x < 0 || point.y < 0 {
            return Rgb888::BLACK;
        }
        match self.0.get_pixel_checked(point.x as u32, point.y as u32) {
            Some(&image::Rgb([r, g, b])) => Rgb888::new(r, g, b),
            None => Rgb888::BLACK,
        }
    }
}

/// Check that at least one raster decoder is compiled in.
///
/// Returns the formats that can be read.
pub fn init() -> Result<Vec<ImageFormat>> {
    let formats: Vec<ImageFormat> = ImageFormat::all().filter(|f| f.reading_enabled()).collect();
    if formats.is_empty() {
        return Err(Error::MissingDecoder);
    }
    info!("Image decoders: {:?}", formats);
    Ok(formats)
}

pub fn load(path: &str) -> Result<RgbSource> {
    let image = image::open(path).map_err(|source| Error::ImageLoad {
        path: path.to_owned(),
        source,
    })?;
    info!("Loaded {path}: {}x{} {:?}", image.width(), image.height(), image.color());
    Ok(RgbSource(image.into_rgb8()))
}
