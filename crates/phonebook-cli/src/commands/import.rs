//! Import command implementation.

use crate::cli::ImportArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;
use phonebook_store::import_csv_file;

/// Execute the import command.
pub fn execute_import(args: ImportArgs, session: &mut Session, formatter: &Formatter) -> Result<()> {
    let report = import_csv_file(session.directory_mut(), &args.file)?;

    for rejection in &report.rejected {
        tracing::warn!(line = rejection.line, reason = %rejection.reason, "CSV row rejected");
    }
    tracing::info!(
        file = %args.file.display(),
        added = report.added_count(),
        rejected = report.rejected_count(),
        "CSV import finished"
    );

    if report.added_count() > 0 {
        session.mark_dirty();
    }
    println!("{}", formatter.import_report(&report));
    Ok(())
}
