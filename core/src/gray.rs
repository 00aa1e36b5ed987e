//! 8 bits per pixel grayscale conversion, one intensity byte per pixel.

use alloc::{string::String, vec::Vec};

use log::debug;

use crate::{
    emit::{ArrayWriter, Qualifier},
    error::Result,
    pixel::intensity,
    source::SourceImage,
    symbol::Symbol,
};

/// Row-major intensities, `y * width + x`.
pub fn luminance(image: &impl SourceImage) -> Vec<u8> {
    image.pixels().map(intensity).collect()
}

pub fn convert(image: &impl SourceImage, symbol: &Symbol) -> Result<String> {
    let bytes = luminance(image);
    debug!("Converted {}x{} pixels", image.width(), image.height());
    let mut writer = ArrayWriter::begin(symbol, image.size(), Qualifier::Mutable)?;
    writer.extend(bytes)?;
    Ok(writer.finish())
}
