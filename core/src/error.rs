use alloc::string::String;
use core::fmt;

use embedded_graphics::prelude::Size;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The output name is not usable as a C identifier.
    InvalidSymbol(String),
    /// The image does not have the geometry the converter requires.
    InvalidDimensions { expected: Size, actual: Size },
    Format(fmt::Error),
}

pub type Result<T> = core::result::Result<T, Error>;

impl From<fmt::Error> for Error {
    fn from(err: fmt::Error) -> Self {
        Error::Format(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSymbol(name) => {
                write!(f, "'{name}' is not a valid C identifier")
            }
            Error::InvalidDimensions { expected, actual } => write!(
                f,
                "image is {}x{}, expected {}x{}",
                actual.width, actual.height, expected.width, expected.height
            ),
            Error::Format(_) => f.write_str("failed to format output"),
        }
    }
}

impl core::error::Error for Error {}
