//! Sequence dictionary and coordinate-based feature extraction.

use std::collections::HashMap;

use crate::error::Error;
use crate::gff3::FeatureRecord;
use crate::nucleotide::reverse_complement;

/// Sequence dictionary built from the `##FASTA` section, indexed by identifier.
#[derive(Debug, Default)]
pub struct SequenceMap {
    sequences: HashMap<String, Vec<u8>>,
}

impl SequenceMap {
    /// Insert a finished record. An existing entry with the same identifier is
    /// replaced, so repeated headers keep only their last occurrence.
    pub fn insert(&mut self, id: String, sequence: Vec<u8>) {
        self.sequences.insert(id, sequence);
    }

    /// Get a sequence by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&[u8]> {
        self.sequences.get(id).map(|v| v.as_slice())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

/// Extract a feature's subsequence from the parsed sequence map.
///
/// The feature's 1-based inclusive coordinates are converted to the 0-based
/// half-open byte range `[start-1, end)`. Coordinates outside the sequence are
/// an error rather than a clamped slice. A reverse-strand feature's slice is
/// reverse-complemented before returning.
pub fn extract(sequences: &SequenceMap, feature: &FeatureRecord) -> Result<Vec<u8>, Error> {
    let sequence = sequences
        .get(&feature.seqid)
        .ok_or_else(|| Error::UnknownSequence(feature.seqid.clone()))?;

    let (start, end) = (feature.start, feature.end);
    if start < 1 {
        return Err(Error::Range(format!(
            "start coordinate {start} of feature on '{}' must be at least 1",
            feature.seqid
        )));
    }
    if end < start {
        return Err(Error::Range(format!(
            "feature on '{}' has end {end} before start {start}",
            feature.seqid
        )));
    }
    let end = end as usize;
    if end > sequence.len() {
        return Err(Error::Range(format!(
            "end coordinate {end} exceeds length {} of sequence '{}'",
            sequence.len(),
            feature.seqid
        )));
    }

    let slice = &sequence[start as usize - 1..end];
    if feature.strand.is_reverse() {
        reverse_complement(slice)
    } else {
        Ok(slice.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strand::Strand;

    fn map_with_chr_i() -> SequenceMap {
        let mut map = SequenceMap::default();
        map.insert("chrI".to_string(), b"ACGTACGT".to_vec());
        map
    }

    fn feature(start: i32, end: i32, strand: Strand) -> FeatureRecord {
        FeatureRecord {
            seqid: "chrI".to_string(),
            start,
            end,
            strand,
        }
    }

    #[test]
    fn one_based_inclusive() {
        let map = map_with_chr_i();
        let seq = extract(&map, &feature(2, 4, Strand::Forward)).unwrap();
        assert_eq!(seq, b"CGT");
    }

    #[test]
    fn reverse_strand_is_complemented() {
        let map = map_with_chr_i();
        let seq = extract(&map, &feature(2, 4, Strand::Reverse)).unwrap();
        assert_eq!(seq, b"ACG");
    }

    #[test]
    fn unstranded_returned_as_is() {
        let map = map_with_chr_i();
        let seq = extract(&map, &feature(1, 8, Strand::Unstranded)).unwrap();
        assert_eq!(seq, b"ACGTACGT");
    }

    #[test]
    fn full_length() {
        let map = map_with_chr_i();
        let seq = extract(&map, &feature(1, 8, Strand::Forward)).unwrap();
        assert_eq!(seq, b"ACGTACGT");
    }

    #[test]
    fn unknown_seqid() {
        let map = map_with_chr_i();
        let mut f = feature(1, 4, Strand::Forward);
        f.seqid = "chrX".to_string();
        assert!(matches!(
            extract(&map, &f),
            Err(Error::UnknownSequence(id)) if id == "chrX"
        ));
    }

    #[test]
    fn zero_start_rejected() {
        let map = map_with_chr_i();
        assert!(matches!(
            extract(&map, &feature(0, 4, Strand::Forward)),
            Err(Error::Range(_))
        ));
    }

    #[test]
    fn end_past_sequence_rejected() {
        let map = map_with_chr_i();
        assert!(matches!(
            extract(&map, &feature(2, 9, Strand::Forward)),
            Err(Error::Range(_))
        ));
    }

    #[test]
    fn inverted_coordinates_rejected() {
        let map = map_with_chr_i();
        assert!(matches!(
            extract(&map, &feature(5, 2, Strand::Forward)),
            Err(Error::Range(_))
        ));
    }
}
