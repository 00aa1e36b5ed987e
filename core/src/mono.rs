//! 1 bit per pixel conversion.
//!
//! Rows are packed independently: a row always starts a fresh byte, so each row
//! takes `ceil(width / 8)` bytes and the unused low bits of its last byte are zero.

use alloc::{string::String, vec::Vec};

use embedded_graphics::prelude::Point;
use log::{debug, trace};

use crate::{
    bits::BitPacker,
    emit::{ArrayWriter, Qualifier},
    error::Result,
    pixel::Threshold,
    source::SourceImage,
    symbol::Symbol,
};

pub fn row_stride(width: u32) -> usize {
    (width as usize).div_ceil(8)
}

pub fn pack_rows(image: &impl SourceImage, threshold: Threshold) -> Vec<u8> {
    let (width, height) = (image.width() as i32, image.height() as i32);
    let mut bytes = Vec::with_capacity(row_stride(image.width()) * height as usize);
    let mut packer = BitPacker::new();
    for y in 0..height {
        for x in 0..width {
            if let Some(byte) = packer.push(threshold.bit(image.pixel(Point::new(x, y)))) {
                bytes.push(byte);
            }
        }
        bytes.extend(packer.flush());
        trace!("Row {y} packed, {} bytes total", bytes.len());
    }
    bytes
}

pub fn convert(image: &impl SourceImage, symbol: &Symbol, threshold: Threshold) -> Result<String> {
    let bytes = pack_rows(image, threshold);
    debug!(
        "Packed {}x{} pixels into {} bytes",
        image.width(),
        image.height(),
        bytes.len()
    );
    let mut writer = ArrayWriter::begin(symbol, image.size(), Qualifier::Const)?;
    writer.extend(bytes)?;
    Ok(writer.finish())
}
