//! Fixed-width FASTA serialization.

use crate::error::Error;

/// Conventional FASTA line width.
pub const DEFAULT_LINE_LENGTH: usize = 60;

/// Format a (header, sequence) pair as FASTA text.
///
/// Produces `>` + header, then the sequence broken into `line_length`-byte lines
/// (the last line may be shorter). No trailing newline is appended after the last
/// content line.
pub fn format_fasta(header: &str, sequence: &[u8], line_length: usize) -> Result<String, Error> {
    if line_length == 0 {
        return Err(Error::Config(
            "FASTA line length must be greater than zero".to_string(),
        ));
    }

    let line_count = sequence.len().div_ceil(line_length);
    let mut out = String::with_capacity(header.len() + 2 + sequence.len() + line_count);
    out.push('>');
    out.push_str(header);
    out.push('\n');
    for (i, chunk) in sequence.chunks(line_length).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&String::from_utf8_lossy(chunk));
    }
    Ok(out)
}
