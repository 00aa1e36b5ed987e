//! 8x8 glyph sheet conversion.
//!
//! The sheet is a single 768x8 strip holding 96 glyphs for the codepoints
//! `0x20..=0x7F`. Each glyph row becomes one byte, leftmost pixel in bit 7.

use alloc::{format, string::String};
use core::fmt;

use embedded_graphics::prelude::{Point, Size};
use log::debug;

use crate::{
    bits::pack,
    emit::{ArrayWriter, Qualifier},
    error::{Error, Result},
    pixel::Threshold,
    source::SourceImage,
    symbol::Symbol,
};

pub const GLYPH_COUNT: usize = 96;
pub const GLYPH_WIDTH: u32 = 8;
pub const GLYPH_HEIGHT: u32 = 8;
pub const FIRST_CODEPOINT: u8 = 0x20;
pub const SHEET_SIZE: Size = Size::new(GLYPH_COUNT as u32 * GLYPH_WIDTH, GLYPH_HEIGHT);

/// Comment attached to each glyph line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphLabel {
    Printable(char),
    Delete,
}

impl fmt::Display for GlyphLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlyphLabel::Printable(c) => write!(f, "'{c}'"),
            GlyphLabel::Delete => f.write_str("DEL"),
        }
    }
}

pub fn glyph_label(slot: usize) -> GlyphLabel {
    let codepoint = FIRST_CODEPOINT as usize + slot;
    match u8::try_from(codepoint) {
        Ok(c) if c.is_ascii_graphic() || c == b' ' => GlyphLabel::Printable(c as char),
        _ => GlyphLabel::Delete,
    }
}

pub fn validate(image: &impl SourceImage) -> Result<()> {
    let actual = image.size();
    if actual != SHEET_SIZE {
        return Err(Error::InvalidDimensions {
            expected: SHEET_SIZE,
            actual,
        });
    }
    Ok(())
}

/// Rows of glyph `slot`, top to bottom.
pub fn pack_glyph(image: &impl SourceImage, slot: usize, threshold: Threshold) -> [u8; GLYPH_HEIGHT as usize] {
    let left = (slot as u32 * GLYPH_WIDTH) as i32;
    core::array::from_fn(|y| {
        pack((0..GLYPH_WIDTH as i32).map(|x| threshold.bit(image.pixel(Point::new(left + x, y as i32)))))
    })
}

pub fn convert(image: &impl SourceImage, symbol: &Symbol, threshold: Threshold) -> Result<String> {
    validate(image)?;
    let mut writer = ArrayWriter::begin(symbol, image.size(), Qualifier::Const)?;
    for slot in 0..GLYPH_COUNT {
        let rows = pack_glyph(image, slot, threshold);
        writer.push_line(&rows, &format!("{}", glyph_label(slot)))?;
    }
    debug!("Packed {} glyphs into {} bytes", GLYPH_COUNT, writer.written());
    Ok(writer.finish())
}

#[cfg(test)]
mod test {
    use alloc::vec::Vec;

    use embedded_graphics::{
        pixelcolor::Rgb888,
        prelude::*,
        primitives::{Line, PrimitiveStyle, Rectangle},
    };

    use super::*;
    use crate::canvas::Canvas;

    fn sheet() -> Canvas {
        Canvas::new(SHEET_SIZE.width, SHEET_SIZE.height, Rgb888::BLACK)
    }

    fn body_bytes(out: &str) -> Vec<u8> {
        out.lines()
            .filter(|line| line.starts_with('\t'))
            .flat_map(|line| line.split("//").next().unwrap().split(','))
            .filter_map(|token| token.trim().strip_prefix("0x"))
            .map(|hex| u8::from_str_radix(hex, 16).unwrap())
            .collect()
    }

    #[test]
    fn labels() {
        assert_eq!(glyph_label(0), GlyphLabel::Printable(' '));
        assert_eq!(glyph_label(33), GlyphLabel::Printable('A'));
        assert_eq!(glyph_label(94), GlyphLabel::Printable('~'));
        assert_eq!(glyph_label(95), GlyphLabel::Delete);
        assert_eq!(format!("{}", glyph_label(7)), "'''");
        assert_eq!(format!("{}", glyph_label(95)), "DEL");
    }

    #[test]
    fn rejects_wrong_geometry() {
        let image = Canvas::new(760, 8, Rgb888::BLACK);
        let symbol = Symbol::new("font").unwrap();
        assert_eq!(
            convert(&image, &symbol, Threshold::DEFAULT),
            Err(Error::InvalidDimensions {
                expected: Size::new(768, 8),
                actual: Size::new(760, 8),
            })
        );
    }

    #[test]
    fn packs_glyph_rows_msb_first() {
        let mut image = sheet();
        // Glyph 'A' (slot 33): left column lit, plus a full bottom row.
        let left = 33 * 8;
        Line::new(Point::new(left, 0), Point::new(left, 7))
            .into_styled(PrimitiveStyle::with_stroke(Rgb888::WHITE, 1))
            .draw(&mut image)
            .unwrap();
        Line::new(Point::new(left, 7), Point::new(left + 7, 7))
            .into_styled(PrimitiveStyle::with_stroke(Rgb888::WHITE, 1))
            .draw(&mut image)
            .unwrap();
        assert_eq!(
            pack_glyph(&image, 33, Threshold::DEFAULT),
            [0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0xFF]
        );
        assert_eq!(pack_glyph(&image, 32, Threshold::DEFAULT), [0; 8]);
        assert_eq!(pack_glyph(&image, 34, Threshold::DEFAULT), [0; 8]);
    }

    #[test]
    fn emits_every_glyph() {
        let mut image = sheet();
        Rectangle::new(Point::new(95 * 8 + 1, 1), Size::new(6, 6))
            .into_styled(PrimitiveStyle::with_fill(Rgb888::new(200, 200, 200)))
            .draw(&mut image)
            .unwrap();
        let symbol = Symbol::new("font").unwrap();
        let out = convert(&image, &symbol, Threshold::DEFAULT).unwrap();

        assert!(out.starts_with("#include <cstdint>\n\nint font_width  = 768;\nint font_height = 8;\nconst uint8_t font[] = {\n"));
        assert!(out.contains("\t0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ' '\n"));
        assert!(out.ends_with("\t0x00, 0x7E, 0x7E, 0x7E, 0x7E, 0x7E, 0x7E, 0x00, // DEL\n};\n"));

        let bytes = body_bytes(&out);
        assert_eq!(bytes.len(), GLYPH_COUNT * 8);
        for slot in 0..GLYPH_COUNT {
            assert_eq!(&bytes[slot * 8..slot * 8 + 8], &pack_glyph(&image, slot, Threshold::DEFAULT));
        }
        assert_eq!(out.lines().filter(|line| line.starts_with('\t')).count(), GLYPH_COUNT);
    }
}
