//! Annotation-line parser and attribute predicate.

use crate::error::Error;
use crate::strand::Strand;

use super::entry::{FeatureQuery, FeatureRecord};

/// Result of examining a single line in the annotation section.
pub enum ParsedLine {
    /// The line matched the query; collect its record.
    Feature(Box<FeatureRecord>),
    /// Comment, blank line, wrong column count, wrong type, or non-matching
    /// attribute. Normal control flow, no diagnostic.
    Skipped,
    /// The `##FASTA` marker: the rest of the stream is sequence data.
    FastaStart,
}

/// Parse a single trimmed line from the annotation section.
pub fn parse_line(line: &str, query: &FeatureQuery) -> Result<ParsedLine, Error> {
    if line == "##FASTA" {
        return Ok(ParsedLine::FastaStart);
    }
    if line.is_empty() || line.starts_with('#') {
        return Ok(ParsedLine::Skipped);
    }

    let columns: Vec<&str> = line.split('\t').collect();
    if columns.len() != 9 {
        return Ok(ParsedLine::Skipped);
    }

    if columns[2] != query.feature_type {
        return Ok(ParsedLine::Skipped);
    }

    if !attribute_matches(columns[8], query)? {
        return Ok(ParsedLine::Skipped);
    }

    let start: i32 = columns[3]
        .parse()
        .map_err(|e| Error::Parse(format!("invalid start '{}': {e}", columns[3])))?;
    let end: i32 = columns[4]
        .parse()
        .map_err(|e| Error::Parse(format!("invalid end '{}': {e}", columns[4])))?;
    let strand = Strand::from_gff3(columns[6]);

    Ok(ParsedLine::Feature(Box::new(FeatureRecord {
        seqid: columns[0].to_string(),
        start,
        end,
        strand,
    })))
}

/// Test whether column 9 carries `query.attribute` with exactly `query.value`.
///
/// Tokens are `;`-separated `key=value` pairs split on the first `=`; a later
/// duplicate key overrides an earlier one. A non-empty token without `=` is
/// malformed input.
fn attribute_matches(attrs_str: &str, query: &FeatureQuery) -> Result<bool, Error> {
    let mut found: Option<&str> = None;

    for token in attrs_str.split(';') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let eq_pos = token
            .find('=')
            .ok_or_else(|| Error::Parse(format!("attribute missing '=': '{token}'")))?;
        let key = &token[..eq_pos];
        let value = &token[eq_pos + 1..];
        if key == query.attribute {
            found = Some(value);
        }
    }

    Ok(found == Some(query.value))
}
