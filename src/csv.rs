// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant). Used for upload
/// templates, whose header row fixes the output schema.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                // move the field without cloning
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !row.is_empty() && !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    row.push(field);
    if !row.is_empty() && !(row.len() == 1 && row[0].is_empty()) {
        rows.push(row);
    }

    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_blank_lines_and_handles_quotes() {
        let rows = parse_rows("a,b\n\n\"x,1\",\"he said \"\"hi\"\"\"\r\nc,d\n", ',');
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], vec![s!("x,1"), s!("he said \"hi\"")]);
        assert_eq!(rows[2], vec![s!("c"), s!("d")]);
    }

    #[test]
    fn write_quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &[s!("plain"), s!("a,b"), s!("q\"q")], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "plain,\"a,b\",\"q\"\"q\"\n");
    }

    #[test]
    fn writer_output_parses_back() {
        let row = vec![s!("multi\nline"), s!("tab\there"), s!()];
        let mut buf = Vec::new();
        write_row(&mut buf, &row, '\t').unwrap();
        let parsed = parse_rows(&String::from_utf8(buf).unwrap(), '\t');
        assert_eq!(parsed, vec![row]);
    }
}
