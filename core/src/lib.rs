#![no_std]

pub mod bits;
pub mod canvas;
pub mod convert;
pub mod emit;
pub mod error;
pub mod font;
pub mod gray;
pub mod mono;
pub mod pixel;
pub mod source;
pub mod symbol;

extern crate alloc;

pub use convert::{Kind, Options, convert};
pub use error::{Error, Result};
pub use source::SourceImage;
pub use symbol::Symbol;
