//! CLI formatting
//!
//! Error display with source context, and the whitespace-revealing echo
//! used by the REPL.

use std::io::{self, Write};

use crate::api::CalcError;

/// Print an error to stderr, pointing at the offending character
pub fn print_error_with_source(e: &CalcError, source: &str) {
    let _ = write_error_with_source(&mut io::stderr().lock(), e, source);
}

/// Write an error, followed by source context when the error has a location
pub fn write_error_with_source<W: Write>(out: &mut W, e: &CalcError, source: &str) -> io::Result<()> {
    writeln!(out, "Error: {e}")?;

    if let (Some(line), Some(column)) = (e.line(), e.column()) {
        write_source_context(out, source, line, column)?;
    }
    Ok(())
}

/// Write the error line with a caret under the error column
///
/// Tabs before the column are repeated in the marker line so the caret
/// lines up however the terminal expands them.
pub fn write_source_context<W: Write>(
    out: &mut W,
    source: &str,
    error_line: usize,
    error_col: usize,
) -> io::Result<()> {
    let lines: Vec<&str> = source.lines().collect();

    if error_line == 0 || error_line > lines.len() {
        return Ok(());
    }

    let text = lines[error_line - 1];
    let line_str = error_line.to_string();
    let gutter = " ".repeat(line_str.len());
    let marker: String = text
        .chars()
        .chain(std::iter::repeat(' '))
        .take(error_col.saturating_sub(1))
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();

    writeln!(out, "{gutter} |")?;
    writeln!(out, "{line_str} | {text}")?;
    writeln!(out, "{gutter} | {marker}^")?;
    Ok(())
}

/// Make whitespace visible: `\n`, `\t`, `\r` become escapes and spaces
/// become `dot`
pub fn raw(s: &str, dot: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            '\r' => result.push_str("\\r"),
            ' ' => result.push_str(dot),
            other => result.push(other),
        }
    }
    result
}

/// `s` in double quotes
pub fn quote(s: &str) -> String {
    format!("\"{s}\"")
}
