use std::io::{self, Write};

use crate::matrix::Matrix;

pub const DELIMITER: &str = ", ";

/// Lowercase, `0x`-prefixed, unpadded: `10` becomes `0xa`.
pub fn hex_token(value: u64) -> String {
    format!("{value:#x}")
}

/// Per-row hex tokens of `m`.
pub fn hex_rows(m: &Matrix) -> Vec<Vec<String>> {
    m.row_iter()
        .map(|row| row.iter().copied().map(hex_token).collect())
        .collect()
}

/// One line per row, tokens joined by `DELIMITER`.
pub fn format_hex(m: &Matrix) -> Vec<String> {
    hex_rows(m)
        .into_iter()
        .map(|tokens| tokens.join(DELIMITER))
        .collect()
}

pub fn write_hex<W: Write>(out: &mut W, m: &Matrix) -> io::Result<()> {
    for line in format_hex(m) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
