use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use personagen_core::{Error, FieldName, ProfileRecord, Result, ScalarValue};

use crate::output::CountingWriter;

/// Write a batch as CSV: one header row, then one row per record.
///
/// Columns follow the first record's key order; values use their natural
/// text form, with standard quoting for embedded delimiters and newlines.
/// Fails with `EmptyBatch` when there is no record to infer columns from.
/// Returns the number of bytes written.
pub fn write_batch_csv<W: Write>(writer: W, batch: &[ProfileRecord]) -> Result<u64> {
    let first = batch.first().ok_or(Error::EmptyBatch)?;
    let columns: Vec<FieldName> = first.fields().collect();

    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    let header: Vec<&str> = columns.iter().map(|field| field.as_str()).collect();
    writer.write_record(&header).map_err(csv_failure)?;

    for record in batch {
        let row: Vec<String> = columns
            .iter()
            .map(|field| {
                record
                    .get(*field)
                    .map(ScalarValue::to_text)
                    .unwrap_or_default()
            })
            .collect();
        writer.write_record(&row).map_err(csv_failure)?;
    }

    writer.flush()?;
    let counting = writer
        .into_inner()
        .map_err(|err| Error::WriteFailure(err.into_error()))?;
    Ok(counting.bytes_written())
}

/// Write a batch as CSV to `path`.
pub fn write_batch_csv_file(path: &Path, batch: &[ProfileRecord]) -> Result<u64> {
    let file = File::create(path)?;
    write_batch_csv(BufWriter::new(file), batch)
}

fn csv_failure(err: csv::Error) -> Error {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(err) => Error::WriteFailure(err),
        _ => Error::WriteFailure(std::io::Error::other(message)),
    }
}
