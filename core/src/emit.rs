//! C++ source emission for converted assets.
//!
//! Every file has the same frame:
//!
//! ```text
//! #include <cstdint>
//!
//! int logo_width  = 16;
//! int logo_height = 2;
//! const uint8_t logo[] = {
//! 	0xFF, 0x00, 0x0F, 0xF0, };
//! ```

use alloc::string::String;
use core::fmt::Write;

use embedded_graphics::prelude::Size;

use crate::{error::Result, symbol::Symbol};

/// Bytes per emitted source line in stream mode.
pub const BYTES_PER_LINE: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualifier {
    Const,
    /// Writable array, kept for firmware that patches pixel data in place.
    Mutable,
}

impl Qualifier {
    fn prefix(self) -> &'static str {
        match self {
            Qualifier::Const => "const ",
            Qualifier::Mutable => "",
        }
    }
}

pub struct ArrayWriter {
    out: String,
    written: usize,
}

impl ArrayWriter {
    pub fn begin(symbol: &Symbol, size: Size, qualifier: Qualifier) -> Result<Self> {
        let mut out = String::new();
        out.push_str("#include <cstdint>\n\n");
        writeln!(out, "int {symbol}_width  = {};", size.width)?;
        writeln!(out, "int {symbol}_height = {};", size.height)?;
        writeln!(out, "{}uint8_t {symbol}[] = {{", qualifier.prefix())?;
        Ok(Self { out, written: 0 })
    }

    /// Append one byte to the continuous stream, wrapping every [`BYTES_PER_LINE`] bytes.
    pub fn push(&mut self, byte: u8) -> Result<()> {
        if self.written % BYTES_PER_LINE == 0 {
            self.out.push('\t');
        }
        write!(self.out, "0x{byte:02X}, ")?;
        if self.written % BYTES_PER_LINE == BYTES_PER_LINE - 1 {
            self.out.push('\n');
        }
        self.written += 1;
        Ok(())
    }

    pub fn extend(&mut self, bytes: impl IntoIterator<Item = u8>) -> Result<()> {
        bytes.into_iter().try_for_each(|byte| self.push(byte))
    }

    /// Write `bytes` as a line of their own, followed by a `//` comment.
    pub fn push_line(&mut self, bytes: &[u8], comment: &str) -> Result<()> {
        self.out.push('\t');
        for byte in bytes {
            write!(self.out, "0x{byte:02X}, ")?;
        }
        writeln!(self.out, "// {comment}")?;
        self.written += bytes.len();
        Ok(())
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn finish(mut self) -> String {
        self.out.push_str("};\n");
        self.out
    }
}
