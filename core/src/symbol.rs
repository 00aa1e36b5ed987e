use alloc::string::{String, ToString};
use core::fmt;

use crate::error::{Error, Result};

/// C identifier used for the emitted array and its `_width`/`_height` companions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(name: &str) -> Result<Self> {
        let mut chars = name.chars();
        let valid = match chars.next() {
            Some(first) => {
                (first.is_ascii_alphabetic() || first == '_')
                    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            None => false,
        };
        if !valid {
            return Err(Error::InvalidSymbol(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    /// Derive the symbol from an input path: drop directories, then the last extension.
    pub fn from_path(path: &str) -> Result<Self> {
        Self::new(file_stem(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn file_stem(path: &str) -> &str {
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match name.rfind('.') {
        Some(dot) => &name[..dot],
        None => name,
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
