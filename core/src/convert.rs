use alloc::string::String;
use core::fmt;

use crate::{error::Result, font, gray, mono, pixel::Threshold, source::SourceImage, symbol::Symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// 768x8 glyph sheet, 96 glyphs of 8x8.
    Font,
    /// 1 bit per pixel, rows padded to whole bytes.
    Mono,
    /// 8 bits per pixel grayscale.
    Gray,
}

impl Kind {
    pub fn tool_name(self) -> &'static str {
        match self {
            Kind::Font => "font_converter",
            Kind::Mono => "image_1bpp_converter",
            Kind::Gray => "image_converter",
        }
    }

    /// Positional argument shown in the usage line.
    pub fn input_hint(self) -> &'static str {
        match self {
            Kind::Font => "<image_file 768x8>",
            Kind::Mono | Kind::Gray => "<image_file>",
        }
    }

    pub fn uses_threshold(self) -> bool {
        !matches!(self, Kind::Gray)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tool_name())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub threshold: Threshold,
}

/// Render the complete C++ source for `image`.
pub fn convert(kind: Kind, image: &impl SourceImage, symbol: &Symbol, options: &Options) -> Result<String> {
    match kind {
        Kind::Font => font::convert(image, symbol, options.threshold),
        Kind::Mono => mono::convert(image, symbol, options.threshold),
        Kind::Gray => gray::convert(image, symbol),
    }
}
