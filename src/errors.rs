use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct InvalidError {
    msg: String,
}

impl InvalidError {
    pub fn new(msg: &str) -> Self {
        return InvalidError {
            msg: String::from(msg),
        };
    }
}

impl fmt::Display for InvalidError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid value: {}", self.msg)
    }
}

impl Error for InvalidError {}

pub type InvalidBoardError = InvalidError;

/// Startup failure: the word list could not be read. The game cannot
/// run without it, so callers treat this as fatal.
#[derive(Debug)]
pub struct DictionaryLoadError {
    path: PathBuf,
    source: io::Error,
}

impl DictionaryLoadError {
    pub fn new(path: &Path, source: io::Error) -> Self {
        DictionaryLoadError {
            path: PathBuf::from(path),
            source,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for DictionaryLoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "failed to load dictionary {}: {}",
            self.path.display(),
            self.source
        )
    }
}

impl Error for DictionaryLoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}
