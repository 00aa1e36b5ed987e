use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::{OriginDimensions, Point},
};

/// Read-only truecolor pixel access.
///
/// Reads outside of `size()` return black.
pub trait SourceImage: OriginDimensions {
    fn pixel(&self, point: Point) -> Rgb888;

    fn width(&self) -> u32 {
        self.size().width
    }

    fn height(&self) -> u32 {
        self.size().height
    }

    /// Iterate all pixels row-major, `x` fastest.
    fn pixels(&self) -> impl Iterator<Item = Rgb888> + '_ {
        let width = self.width() as i32;
        let height = self.height() as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| self.pixel(Point::new(x, y))))
    }
}

