use embedded_graphics::{pixelcolor::Rgb888, prelude::RgbColor};

/// Cutoff separating "off" from "on" pixels in the monochrome converters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold(pub u8);

impl Threshold {
    pub const DEFAULT: Threshold = Threshold(128);

    pub fn bit(self, color: Rgb888) -> u8 {
        (intensity(color) >= self.0) as u8
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Unweighted channel mean, truncated.
pub fn intensity(color: Rgb888) -> u8 {
    ((color.r() as u16 + color.g() as u16 + color.b() as u16) / 3) as u8
}
