use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

mod model;
mod persons;
mod sample;
mod schema;

pub use model::{Listener, Model, ModelEvent, PersonFilter};
pub use persons::{AddressBook, BookError};
pub use sample::{sample_address_book, SampleError};
pub use schema::{Snapshot, SCHEMA_VERSION};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Could not access data file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Data file {} is not a valid contact list: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Data file {} contains duplicate persons", .path.display())]
    DuplicatePerson { path: PathBuf },
    #[error("Data file {} has unsupported version {found} (expected {expected})", .path.display())]
    UnsupportedVersion {
        path: PathBuf,
        found: u32,
        expected: u32,
    },
}

/// JSON snapshot file holding the whole contact list.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn open_at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("connectus").join("connectus.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file. `Ok(None)` when it does not exist yet.
    ///
    /// Any invalid record fails the entire load; nothing partial is returned.
    pub fn load(&self) -> Result<Option<AddressBook>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let snapshot: Snapshot =
            serde_json::from_str(&content).map_err(|source| StorageError::Json {
                path: self.path.clone(),
                source,
            })?;

        if snapshot.version != SCHEMA_VERSION {
            return Err(StorageError::UnsupportedVersion {
                path: self.path.clone(),
                found: snapshot.version,
                expected: SCHEMA_VERSION,
            });
        }

        let book = AddressBook::from_persons(snapshot.persons).map_err(|_| {
            StorageError::DuplicatePerson {
                path: self.path.clone(),
            }
        })?;
        log::debug!("Loaded {} persons from {}", book.len(), self.path.display());
        Ok(Some(book))
    }

    /// Overwrite the file with the whole list.
    pub fn save(&self, book: &AddressBook) -> Result<(), StorageError> {
        let io_err = |source: io::Error| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let snapshot = Snapshot::new(book.persons().to_vec());
        let json = serde_json::to_string_pretty(&snapshot).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(io_err)?;

        log::debug!("Saved {} persons to {}", book.len(), self.path.display());
        Ok(())
    }
}
