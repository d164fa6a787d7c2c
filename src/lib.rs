//! Gffex: export annotated feature sequences from GFF3 files with embedded FASTA.

pub mod error;

pub mod cli;
pub mod extract;
pub mod fasta;
pub mod gff3;
pub mod nucleotide;
pub mod strand;
