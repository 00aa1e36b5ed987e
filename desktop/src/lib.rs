pub mod error;
pub mod image_source;
pub mod runner;

pub use error::{Error, Result};
