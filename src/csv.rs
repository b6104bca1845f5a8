// src/csv.rs
use std::io::{self, Write};
use std::mem::take;
use std::path::Path;

use thiserror::Error;

/// Field separator of a delimited text file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delim {
    #[default]
    Csv,
    Tsv,
    Semicolon,
}

impl Delim {
    pub fn sep(self) -> char {
        match self {
            Delim::Csv => ',',
            Delim::Tsv => '\t',
            Delim::Semicolon => ';',
        }
    }

    /// `.tsv` / `.tab` files are tab separated; everything else is read as CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase()) {
            Some(ext) if ext == "tsv" || ext == "tab" => Delim::Tsv,
            _ => Delim::Csv,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" | "," | "comma" => Some(Delim::Csv),
            "tsv" | "\\t" | "tab" => Some(Delim::Tsv),
            ";" | "semicolon" => Some(Delim::Semicolon),
            _ => None,
        }
    }
}

/* ---------------- Parsing ---------------- */

/// Why a delimited text could not be split into rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A quoted field was still open at end of input; `line` is where it started.
    #[error("unterminated quoted field starting on line {line}")]
    UnterminatedQuote { line: usize },
}

/// CSV/TSV parser (quotes + CRLF tolerant). Blank lines are skipped.
pub fn parse_rows(text: &str, sep: char) -> Result<Vec<Vec<String>>, ParseError> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut line = 1usize;
    let mut quote_line = 0usize;

    // Excel likes to prepend a BOM
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
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
                    quote_line = line;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                line += 1;
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            c => {
                if c == '\n' { line += 1; }
                field.push(c);
            }
        }
    }

    if in_quotes {
        return Err(ParseError::UnterminatedQuote { line: quote_line });
    }

    // Trailing row without a final newline
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    Ok(rows)
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single delimited row to any writer.
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

/// Stringify a table as-is: optional header line, then one line per row.
pub fn rows_to_string(headers: Option<&[String]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    // Writing into a Vec<u8> cannot fail
    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_fields_keep_separators_and_quotes() {
        let rows = parse_rows("a,\"b, c\",\"say \"\"hi\"\"\"\r\n1,2,3\n", ',').unwrap();
        assert_eq!(rows, vec![
            vec![s!("a"), s!("b, c"), s!("say \"hi\"")],
            vec![s!("1"), s!("2"), s!("3")],
        ]);
    }

    #[test]
    fn blank_lines_and_missing_final_newline() {
        let rows = parse_rows("h1\th2\n\nx\ty", '\t').unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec![s!("x"), s!("y")]);
    }

    #[test]
    fn bom_is_stripped() {
        let rows = parse_rows("\u{feff}marca,precio\n", ',').unwrap();
        assert_eq!(rows[0][0], "marca");
    }

    #[test]
    fn unterminated_quote_is_reported_with_its_line() {
        let err = parse_rows("a,b\n1,\"open\n2,3\n", ',').unwrap_err();
        assert_eq!(err, ParseError::UnterminatedQuote { line: 2 });
    }

    #[test]
    fn writer_quotes_only_when_needed() {
        let header = vec![s!("name"), s!("price")];
        let out = rows_to_string(
            Some(header.as_slice()),
            &[vec![s!("Gel, 50ml"), s!("$10")]],
            ',',
        );
        assert_eq!(out, "name,price\n\"Gel, 50ml\",$10\n");
    }

    #[test]
    fn delim_from_extension() {
        assert_eq!(Delim::from_path(Path::new("data/basedatos.TSV")), Delim::Tsv);
        assert_eq!(Delim::from_path(Path::new("basedatos.csv")), Delim::Csv);
        assert_eq!(Delim::parse(";"), Some(Delim::Semicolon));
    }
}
