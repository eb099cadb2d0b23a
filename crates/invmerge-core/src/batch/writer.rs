//! Merged CSV output.

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, TimeZone};

use crate::models::invoice::InvoiceRecord;

/// Timestamp embedded in output file names.
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Name of the merged CSV, e.g. `merged_invoices_20240315_093000.csv`.
pub fn output_file_name<Tz>(prefix: &str, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("{}_{}.csv", prefix, at.format(FILE_TIMESTAMP_FORMAT))
}

/// Write records to `path` with a header row.
pub fn write_records(path: &Path, records: &[InvoiceRecord]) -> Result<(), csv::Error> {
    let file = std::fs::File::create(path)?;
    write_records_to(file, records)
}

/// Write records to any writer. The header is taken from the record
/// fields and emitted before the first row; nothing is written for an
/// empty slice.
pub fn write_records_to<W: Write>(writer: W, records: &[InvoiceRecord]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
