//! Watson-Crick complement table and reverse-complement transform.

use crate::error::Error;

/// Complement of a single uppercase DNA base, or None for anything else.
fn complement(base: u8) -> Option<u8> {
    match base {
        b'A' => Some(b'T'),
        b'T' => Some(b'A'),
        b'C' => Some(b'G'),
        b'G' => Some(b'C'),
        _ => None,
    }
}

/// Reverse-complement a DNA sequence.
///
/// The alphabet is strictly uppercase `ACGT`; lowercase bases, ambiguity codes
/// (`N`), gaps, and RNA `U` are rejected with [`Error::UnsupportedBase`].
pub fn reverse_complement(seq: &[u8]) -> Result<Vec<u8>, Error> {
    let mut out = Vec::with_capacity(seq.len());
    for &base in seq.iter().rev() {
        match complement(base) {
            Some(c) => out.push(c),
            None => return Err(Error::UnsupportedBase(base as char)),
        }
    }
    Ok(out)
}
