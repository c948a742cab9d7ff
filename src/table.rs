//! Writes an assembled table out as CSV.

use crate::data_structs::Table;
use crate::error::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Byte-order mark, so spreadsheet software picks UTF-8 for the Czech names.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Creates (or truncates) the file at `path` and writes the table to it.
pub fn write_csv<P: AsRef<Path>>(path: P, table: &Table) -> Result<()> {
    let file = File::create(path)?;

    write_to(BufWriter::new(file), table)
}

/// Writes the BOM, the column names and then one record per row.
pub fn write_to<W: Write>(mut out: W, table: &Table) -> Result<()> {
    out.write_all(UTF8_BOM)?;

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(out);

    writer.write_record(table.columns())?;
    for row in &table.rows {
        writer.write_record(row.record())?;
    }
    writer.flush()?;

    Ok(())
}
