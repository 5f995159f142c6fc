//! Runs command lines against the model and keeps the data file in step.

use thiserror::Error;

use super::command::{CommandError, CommandResult};
use super::parser::{parse_command, ParseError};
use crate::db::{sample_address_book, AddressBook, Database, Model, SampleError, StorageError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Failed to build sample data: {0}")]
    Sample(#[from] SampleError),
}

/// Where the starting address book came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookOrigin {
    DataFile,
    Samples,
    /// The data file exists but could not be loaded.
    EmptyAfterLoadError,
}

pub struct Session {
    model: Model,
    db: Database,
    saved_revision: u64,
    origin: BookOrigin,
}

impl Session {
    /// Load the book behind `db`.
    ///
    /// A missing file is seeded with sample contacts. A file that fails to
    /// load is left alone and the session starts empty.
    pub fn open(db: Database) -> Result<Self, SessionError> {
        let (book, origin) = match db.load() {
            Ok(Some(book)) => {
                log::info!("Loaded {} persons from {}", book.len(), db.path().display());
                (book, BookOrigin::DataFile)
            }
            Ok(None) => {
                let book = sample_address_book()?;
                log::info!(
                    "No data file at {}, starting with {} sample contacts",
                    db.path().display(),
                    book.len()
                );
                (book, BookOrigin::Samples)
            }
            Err(e) => {
                log::warn!("{}. Starting with an empty address book", e);
                (AddressBook::new(), BookOrigin::EmptyAfterLoadError)
            }
        };
        let mut session = Self::new(Model::new(book), db);
        session.origin = origin;
        Ok(session)
    }

    /// A session over an existing model; its book counts as already saved.
    pub fn new(model: Model, db: Database) -> Self {
        let saved_revision = model.revision();
        Self {
            model,
            db,
            saved_revision,
            origin: BookOrigin::DataFile,
        }
    }

    pub fn origin(&self) -> BookOrigin {
        self.origin
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// True when the model has changes the data file does not have yet.
    pub fn is_dirty(&self) -> bool {
        self.model.revision() != self.saved_revision
    }

    /// Parse and run one line, then save if the book changed.
    ///
    /// A failed save is reported, but the change stays in memory and is
    /// retried on the next save.
    pub fn execute(&mut self, line: &str) -> Result<CommandResult, SessionError> {
        let command = parse_command(line)?;
        log::debug!("Executing `{}`", command.word());
        let result = command.execute(&mut self.model)?;
        self.flush()?;
        Ok(result)
    }

    /// Write the book out if it changed since the last save.
    pub fn flush(&mut self) -> Result<(), StorageError> {
        if !self.is_dirty() {
            return Ok(());
        }
        self.db.save(self.model.address_book())?;
        self.saved_revision = self.model.revision();
        Ok(())
    }
}
