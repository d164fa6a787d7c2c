//! Data structures for parsed annotation lines and match criteria.

use crate::strand::Strand;

/// A qualifying annotation line: the coordinates needed to slice its sequence.
///
/// Coordinates are 1-based and inclusive, as they appear in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRecord {
    pub seqid: String,
    pub start: i32,
    pub end: i32,
    pub strand: Strand,
}

/// Caller-supplied criteria a feature line must meet to be collected.
#[derive(Debug, Clone, Copy)]
pub struct FeatureQuery<'a> {
    /// GFF3 column 3, e.g. `gene` or `mRNA`.
    pub feature_type: &'a str,
    /// Attribute key in column 9, e.g. `ID` or `Name`.
    pub attribute: &'a str,
    /// Exact attribute value to match.
    pub value: &'a str,
}
