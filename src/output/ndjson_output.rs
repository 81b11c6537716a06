//! NDJSON content-record export

use crate::output::traits::OutputResult;
use crate::state::ContentRecords;
use std::io::Write;

/// Writes one JSON object per content record, one per line
///
/// Returns the number of records written.
pub fn write_content_records(records: &ContentRecords, writer: &mut dyn Write) -> OutputResult<usize> {
    for record in records.values() {
        serde_json::to_writer(&mut *writer, record)?;
        writer.write_all(b"\n")?;
    }
    Ok(records.len())
}
