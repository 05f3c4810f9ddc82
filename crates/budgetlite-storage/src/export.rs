//! CSV export

use std::io::Write;
use std::path::Path;

use crate::error::{StorageError, StorageResult};
use crate::types::{TransactionRecord, CSV_HEADER};

/// Write records as CSV to any writer, header first, rows in the given order.
pub fn write_csv<W: Write>(writer: W, records: &[TransactionRecord]) -> StorageResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Export records to a CSV file, overwriting it.
pub fn export_csv(path: &Path, records: &[TransactionRecord]) -> StorageResult<()> {
    let file = std::fs::File::create(path).map_err(|source| StorageError::Write {
        path: path.display().to_string(),
        source,
    })?;
    write_csv(file, records)?;

    log::info!(
        target: "budgetlite::storage",
        "Exported {} transactions to {}",
        records.len(),
        path.display()
    );
    Ok(())
}
