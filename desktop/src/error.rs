use std::{fmt, path::PathBuf};

#[derive(Debug)]
pub enum Error {
    /// No raster format can be decoded by this build.
    MissingDecoder,
    ImageLoad {
        path: String,
        source: image::ImageError,
    },
    Convert(sangria_core::Error),
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Progress or usage output could not be written.
    Console(std::io::Error),
}

pub type Result<T> = core::result::Result<T, Error>;

impl From<sangria_core::Error> for Error {
    fn from(err: sangria_core::Error) -> Self {
        Error::Convert(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingDecoder => f.write_str(
                "No image decoder available. Rebuild with the png, jpeg, bmp or webp feature of the image crate.",
            ),
            Error::ImageLoad { path, source } => write!(f, "Cannot read the '{path}': {source}"),
            Error::Convert(err) => write!(f, "Cannot convert: {err}"),
            Error::Write { path, source } => {
                write!(f, "Cannot write '{}': {source}", path.display())
            }
            Error::Console(err) => write!(f, "Cannot write to the console: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MissingDecoder => None,
            Error::ImageLoad { source, .. } => Some(source),
            Error::Convert(err) => Some(err),
            Error::Write { source, .. } => Some(source),
            Error::Console(err) => Some(err),
        }
    }
}
