//! Program loading

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Path that stands for standard input
pub const STDIN_PATH: &str = "-";

/// Where a program's text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Code given directly
    Literal(String),
    /// A file on disk
    File(PathBuf),
    /// Everything on standard input
    Stdin,
}

impl Source {
    /// Interpret an optional path argument; missing or `-` means stdin
    pub fn from_path_arg(path: Option<&Path>) -> Self {
        match path {
            Some(p) if p != Path::new(STDIN_PATH) => Source::File(p.to_path_buf()),
            _ => Source::Stdin,
        }
    }

    /// Read the full program text.
    ///
    /// Bytes that are not valid UTF-8 are replaced, since anything the
    /// interpreter does not recognize is ignored anyway.
    pub fn load(&self) -> Result<String> {
        match self {
            Source::Literal(code) => Ok(code.clone()),
            Source::File(path) => {
                let bytes = fs::read(path).map_err(|source| Error::SourceError {
                    path: path.clone(),
                    source,
                })?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            Source::Stdin => {
                let mut bytes = Vec::new();
                io::stdin()
                    .lock()
                    .read_to_end(&mut bytes)
                    .map_err(|source| Error::SourceError {
                        path: PathBuf::from(STDIN_PATH),
                        source,
                    })?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
        }
    }
}
