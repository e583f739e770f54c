//! File/stream binding for the YAML document.
//!
//! The engine only needs "read all bytes" and "write all bytes"; this module
//! supplies them from either a named file or the stdin/stdout pipe.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::yaml::{Error, YamlDoc};

/// Where the YAML document comes from and goes back to.
pub struct YamlSource {
    filename: Option<PathBuf>,
}

impl YamlSource {
    pub fn new(filename: Option<PathBuf>) -> Self {
        Self { filename }
    }

    /// True when the document flows through stdin/stdout.
    pub fn is_pipe(&self) -> bool {
        self.filename.is_none()
    }

    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    /// Read and parse the document.
    ///
    /// A named file that does not exist yet loads as an empty document, so
    /// `set` can create it.
    pub fn load(&self) -> Result<YamlDoc, Error> {
        match &self.filename {
            Some(path) => {
                if !path.exists() {
                    return Ok(YamlDoc::new());
                }
                let bytes = fs::read(path)
                    .map_err(|e| Error::Io(format!("{}: {}", path.display(), e)))?;
                YamlDoc::from_bytes(&bytes)
            }
            None => {
                let mut bytes = Vec::new();
                std::io::stdin().read_to_end(&mut bytes)?;
                log::debug!("read {} bytes from stdin", bytes.len());
                YamlDoc::from_bytes(&bytes)
            }
        }
    }

    /// Persist the document: back to the file, or to stdout in pipe mode.
    pub fn save(&self, doc: &YamlDoc) -> Result<(), Error> {
        match &self.filename {
            Some(path) => {
                log::debug!("writing yaml to {}", path.display());
                fs::write(path, doc.bytes()?)
                    .map_err(|e| Error::Io(format!("{}: {}", path.display(), e)))?;
            }
            None => println!("{}", doc.text()?),
        }
        Ok(())
    }
}

/// Read all bytes from a named file, or from stdin when no file is given.
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>, Error> {
    match path {
        Some(path) => {
            fs::read(path).map_err(|e| Error::Io(format!("{}: {}", path.display(), e)))
        }
        None => {
            let mut bytes = Vec::new();
            std::io::stdin().read_to_end(&mut bytes)?;
            Ok(bytes)
        }
    }
}
