//! Streaming parser for hybrid GFF3 files with an embedded `##FASTA` section.

pub mod entry;
pub mod parser;

use std::io::BufRead;

use crate::error::Error;
use crate::extract::SequenceMap;

pub use entry::{FeatureQuery, FeatureRecord};
use parser::ParsedLine;

/// Which part of the hybrid file the current line belongs to.
enum Section {
    Annotation,
    Sequence,
}

/// Parse a hybrid annotation+sequence file in a single forward pass.
///
/// Returns the feature records matching `query` in file order, and a map from
/// sequence identifier to its concatenated raw sequence. The `##FASTA` marker
/// switches to the sequence section permanently; sequence data appearing before
/// any `>` header is malformed input.
pub fn parse_hybrid<R: BufRead>(
    reader: R,
    query: &FeatureQuery,
) -> Result<(Vec<FeatureRecord>, SequenceMap), Error> {
    let mut features: Vec<FeatureRecord> = Vec::new();
    let mut sequences = SequenceMap::default();

    let mut section = Section::Annotation;
    let mut current_id: Option<String> = None;
    let mut current_sequence: Vec<u8> = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line_num = line_num + 1;
        let line = line?;
        let line = line.trim();

        match section {
            Section::Annotation => {
                match parser::parse_line(line, query)
                    .map_err(|e| Error::Parse(format!("{e} (line {line_num}: {line})")))?
                {
                    ParsedLine::Feature(record) => features.push(*record),
                    ParsedLine::Skipped => {}
                    ParsedLine::FastaStart => section = Section::Sequence,
                }
            }
            Section::Sequence => {
                if let Some(header) = line.strip_prefix('>') {
                    // Finish previous record; insert replaces, so a repeated
                    // identifier keeps only its last occurrence.
                    if let Some(id) = current_id.take() {
                        sequences.insert(id, std::mem::take(&mut current_sequence));
                    }
                    let id = header.split_whitespace().next().unwrap_or("");
                    if id.is_empty() {
                        return Err(Error::Parse(format!(
                            "empty FASTA header (line {line_num})"
                        )));
                    }
                    current_id = Some(id.to_string());
                } else if line.is_empty() {
                    continue;
                } else if current_id.is_some() {
                    current_sequence.extend_from_slice(line.as_bytes());
                } else {
                    return Err(Error::Parse(format!(
                        "sequence data before any FASTA header (line {line_num}: {line})"
                    )));
                }
            }
        }
    }

    if let Some(id) = current_id {
        sequences.insert(id, current_sequence);
    }

    Ok((features, sequences))
}
