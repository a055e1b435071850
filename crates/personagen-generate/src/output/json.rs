use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use personagen_core::{Error, ProfileRecord, Result};

use crate::output::CountingWriter;

/// Write a batch as an indented JSON array of field → value objects.
///
/// Field order per record is the record's own key order. Decimal values are
/// encoded as exact base-10 strings (never binary floats) and dates as
/// ISO-8601 `YYYY-MM-DD` strings. Returns the number of bytes written.
pub fn write_batch_json<W: Write>(writer: W, batch: &[ProfileRecord]) -> Result<u64> {
    let mut counting = CountingWriter::new(writer);
    {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut counting, formatter);
        batch.serialize(&mut serializer).map_err(json_failure)?;
    }
    counting.flush()?;
    Ok(counting.bytes_written())
}

/// Write a batch as an indented JSON array to `path`.
pub fn write_batch_json_file(path: &Path, batch: &[ProfileRecord]) -> Result<u64> {
    let file = File::create(path)?;
    write_batch_json(BufWriter::new(file), batch)
}

fn json_failure(err: serde_json::Error) -> Error {
    Error::WriteFailure(std::io::Error::other(err))
}
