//! Batch import of contacts from CSV
//!
//! Each row maps positionally to `first_name, last_name, phone_number`
//! with optional `email_address` and `address`. Rows go through
//! [`Directory::create_contact`], so they meet the same validation and
//! duplicate rules as a single add. A bad row is recorded and skipped;
//! it never stops the rows after it.

use crate::directory::Directory;
use crate::error::{Result, StoreError};
use crate::validation::ContactDraft;
use csv::{ReaderBuilder, StringRecord, Trim};
use phonebook_domain::ContactId;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// A row that was not imported
#[derive(Debug)]
pub struct RowRejection {
    /// 1-based line number in the input
    pub line: u64,
    /// Why the row was refused
    pub reason: StoreError,
}

/// Outcome of a batch import
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Ids of the contacts added, in row order
    pub added: Vec<ContactId>,
    /// Rows that were refused, in row order
    pub rejected: Vec<RowRejection>,
}

impl ImportReport {
    /// Number of contacts added
    pub fn added_count(&self) -> usize {
        self.added.len()
    }

    /// Number of rows refused
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    /// One-line tally
    pub fn summary(&self) -> String {
        format!(
            "{} contact(s) imported, {} row(s) rejected",
            self.added_count(),
            self.rejected_count()
        )
    }
}

/// Import CSV rows from a reader into the directory
///
/// # Errors
///
/// Only an I/O failure of the reader aborts the import; row-level problems
/// are collected in the report.
pub fn import_csv<R: Read>(directory: &mut Directory, reader: R) -> Result<ImportReport> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut report = ImportReport::default();

    for (index, row) in csv_reader.records().enumerate() {
        let fallback_line = index as u64 + 1;
        let record = match row {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(fallback_line);
                report.rejected.push(RowRejection {
                    line,
                    reason: e.into(),
                });
                continue;
            }
        };

        if record.iter().all(str::is_empty) {
            continue;
        }

        let line = record.position().map(|p| p.line()).unwrap_or(fallback_line);
        let outcome = draft_from_record(&record)
            .and_then(|draft| directory.create_contact(draft).map(|contact| contact.id()));
        match outcome {
            Ok(id) => report.added.push(id),
            Err(reason) => {
                tracing::debug!("Rejected CSV row {}: {}", line, reason);
                report.rejected.push(RowRejection { line, reason });
            }
        }
    }

    Ok(report)
}

/// Import a CSV file into the directory
///
/// # Errors
///
/// [`StoreError::NotFound`] if the file does not exist.
pub fn import_csv_file<P: AsRef<Path>>(directory: &mut Directory, path: P) -> Result<ImportReport> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => StoreError::NotFound(path.display().to_string()),
        _ => StoreError::Io(e),
    })?;

    let report = import_csv(directory, file)?;
    tracing::debug!("Imported {}: {}", path.display(), report.summary());
    Ok(report)
}

fn draft_from_record(record: &StringRecord) -> Result<ContactDraft> {
    if record.len() < 3 {
        return Err(StoreError::Format(format!(
            "expected at least 3 columns, found {}",
            record.len()
        )));
    }

    let column = |i: usize| record.get(i).unwrap_or_default().to_string();
    Ok(ContactDraft {
        first_name: column(0),
        last_name: column(1),
        phone_number: column(2),
        email_address: column(3),
        address: column(4),
    })
}
