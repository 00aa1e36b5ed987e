use alloc::{vec, vec::Vec};

use embedded_graphics::{
    Pixel,
    pixelcolor::Rgb888,
    prelude::{DrawTarget, OriginDimensions, Point, RgbColor, Size},
};

use crate::source::SourceImage;

/// Owned truecolor pixel grid.
///
/// Implements [`DrawTarget`] so images can be composed with embedded-graphics
/// primitives before conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    size: Size,
    pixels: Vec<Rgb888>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, fill: Rgb888) -> Self {
        Self {
            size: Size::new(width, height),
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.size.width || y as u32 >= self.size.height {
            return None;
        }
        Some(y as usize * self.size.width as usize + x as usize)
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb888) {
        if let Some(index) = self.index(x, y) {
            self.pixels[index] = color;
        }
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        self.size
    }
}

impl SourceImage for Canvas {
    fn pixel(&self, point: Point) -> Rgb888 {
        self.index(point.x, point.y)
            .map_or(Rgb888::BLACK, |index| self.pixels[index])
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            self.set_pixel(coord.x, coord.y, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.pixels.fill(color);
        Ok(())
    }
}
