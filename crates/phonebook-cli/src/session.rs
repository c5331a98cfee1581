//! The open contact directory and the file backing it.

use crate::error::Result;
use phonebook_domain::traits::ContactRepository;
use phonebook_store::{Directory, JsonFile, StoreError};
use std::path::{Path, PathBuf};

/// What happened when the database file was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// The file was read; carries the number of contacts.
    Loaded(usize),
    /// No file yet; starting empty.
    Missing,
    /// The file could not be decoded; starting empty.
    Corrupt(String),
}

/// A directory loaded from a JSON file, plus whether it has unsaved edits.
pub struct Session {
    directory: Directory,
    repo: JsonFile,
    dirty: bool,
}

impl Session {
    /// Load the database at `path`.
    ///
    /// A missing or undecodable file yields an empty directory; the status
    /// says which. Other I/O failures are returned.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<(Self, LoadStatus)> {
        let repo = JsonFile::new(path);
        let (directory, status) = match repo.load() {
            Ok(contacts) => {
                let count = contacts.len();
                tracing::info!(path = %repo.path().display(), count, "Contacts loaded");
                (Directory::from_contacts(contacts), LoadStatus::Loaded(count))
            }
            Err(StoreError::NotFound(_)) => {
                tracing::info!(path = %repo.path().display(), "No database file, starting empty");
                (Directory::new(), LoadStatus::Missing)
            }
            Err(StoreError::Format(msg)) => {
                tracing::warn!(path = %repo.path().display(), error = %msg, "Database file unreadable, starting empty");
                (Directory::new(), LoadStatus::Corrupt(msg))
            }
            Err(e) => return Err(e.into()),
        };

        Ok((
            Self {
                directory,
                repo,
                dirty: false,
            },
            status,
        ))
    }

    /// The loaded directory.
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Mutable access; callers mark the session dirty when they change it.
    pub fn directory_mut(&mut self) -> &mut Directory {
        &mut self.directory
    }

    /// Database file path.
    pub fn path(&self) -> &Path {
        self.repo.path()
    }

    /// Record that the directory has unsaved edits.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Whether the directory has unsaved edits.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write the whole directory to the database file.
    pub fn save(&mut self) -> Result<()> {
        self.repo.save(self.directory.contacts())?;
        self.dirty = false;
        tracing::info!(path = %self.repo.path().display(), count = self.directory.len(), "Contacts saved");
        Ok(())
    }
}
