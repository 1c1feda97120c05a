// crates/engine/src/input.rs
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{EngineError, Result};

const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Where lines are read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputSource {
    #[default]
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `None` and `-` both select standard input.
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            None => Self::Stdin,
            Some(path) if path.as_os_str() == "-" => Self::Stdin,
            Some(path) => Self::File(path.to_path_buf()),
        }
    }

    /// Checks that a file input exists and is a regular file (symlinks followed).
    ///
    /// # Errors
    /// Returns [`EngineError::InputNotFound`], [`EngineError::NotRegularFile`]
    /// or [`EngineError::InputOpen`] when the metadata cannot be read.
    pub fn validate(&self) -> Result<()> {
        let Self::File(path) = self else {
            return Ok(());
        };

        let meta = std::fs::metadata(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => EngineError::InputNotFound { path: path.clone() },
            _ => EngineError::InputOpen {
                path: path.clone(),
                source,
            },
        })?;

        if !meta.is_file() {
            return Err(EngineError::NotRegularFile { path: path.clone() });
        }
        Ok(())
    }

    /// Validates and opens the source for buffered reading.
    ///
    /// # Errors
    /// Any error from [`InputSource::validate`], or [`EngineError::InputOpen`]
    /// if the file cannot be opened (for example, permission denied).
    pub fn open(&self) -> Result<Box<dyn BufRead + Send>> {
        self.validate()?;
        match self {
            Self::Stdin => Ok(Box::new(BufReader::with_capacity(
                READ_BUFFER_SIZE,
                io::stdin(),
            ))),
            Self::File(path) => {
                let file = File::open(path).map_err(|source| EngineError::InputOpen {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::with_capacity(READ_BUFFER_SIZE, file)))
            }
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
