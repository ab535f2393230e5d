//! Human-readable and CSV renderings of a code table.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::code_table::CodeRecord;

pub const CSV_HEADER: &str = "Symbol,Frequency,Code";

/// Escape symbols that would be invisible or break a line.
pub fn display_symbol(symbol: char) -> Cow<'static, str> {
    match symbol {
        ' ' => Cow::Borrowed("' '"),
        '\n' => Cow::Borrowed("\\n"),
        '\t' => Cow::Borrowed("\\t"),
        '\r' => Cow::Borrowed("\\r"),
        other => Cow::Owned(other.to_string()),
    }
}

fn csv_field(symbol: char) -> Cow<'static, str> {
    match symbol {
        ',' => Cow::Borrowed("\",\""),
        '"' => Cow::Borrowed("\"\"\"\""),
        other => display_symbol(other),
    }
}

pub fn write_console<W: Write>(records: &[CodeRecord<char>], writer: &mut W) -> io::Result<()> {
    for record in records {
        writeln!(
            writer,
            "{}({}):   \t{}",
            display_symbol(record.symbol),
            record.frequency,
            record.code
        )?;
    }
    Ok(())
}

/// Header line plus one row per record, separated by `\n`, no trailing newline.
pub fn write_csv<W: Write>(records: &[CodeRecord<char>], writer: &mut W) -> io::Result<()> {
    write!(writer, "{}", CSV_HEADER)?;
    for record in records {
        write!(
            writer,
            "\n{},{},{}",
            csv_field(record.symbol),
            record.frequency,
            record.code
        )?;
    }
    writer.flush()
}

pub fn write_csv_to_path(records: &[CodeRecord<char>], path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_csv(records, &mut writer)
}
