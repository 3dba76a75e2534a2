//! Interactive transcript entry

use std::io::{self, BufRead};

/// Line that ends interactive input (case-insensitive, surrounding whitespace ignored)
pub const END_MARKER: &str = "END";

/// Read transcript lines until `END`, a blank line, or end of input.
///
/// Lines are joined with `\n`; carriage returns are dropped so CRLF input
/// reads the same as LF input.
pub fn read_transcript<R: BufRead>(reader: R) -> io::Result<String> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(END_MARKER) {
            break;
        }
        lines.push(line.to_string());
    }
    Ok(lines.join("\n"))
}
