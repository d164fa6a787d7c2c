use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use gffex::cli;
use gffex::extract::extract;
use gffex::fasta;
use gffex::gff3::{self, FeatureQuery};

#[derive(Parser)]
#[command(
    name = "gffex",
    about = "Export a feature's sequence from a GFF3 file with an embedded FASTA section"
)]
struct Cli {
    /// Path to the GFF3 file
    #[arg(short = 'g', long = "gff")]
    gff: PathBuf,

    /// Feature type to match (e.g. gene, mRNA)
    #[arg(short = 't', long = "type")]
    feature_type: String,

    /// Attribute key to match (e.g. ID, Name)
    #[arg(short = 'a', long = "attribute")]
    attribute: String,

    /// Attribute value to match (e.g. YAL069W)
    #[arg(short = 'v', long = "value")]
    value: String,

    /// Line width for FASTA output
    #[arg(long = "line-length", default_value_t = fasta::DEFAULT_LINE_LENGTH)]
    line_length: usize,
}

fn main() -> Result<()> {
    let start = Instant::now();
    let args = Cli::parse();

    cli::banner("Export Feature");

    // ── Query ────────────────────────────────────────────
    cli::section("Query");
    cli::kv("Input", &args.gff.display().to_string());
    if let Ok(meta) = std::fs::metadata(&args.gff) {
        cli::kv("File size", &cli::format_bytes(meta.len()));
    }
    cli::kv("Feature type", &args.feature_type);
    cli::kv("Attribute", &format!("{}={}", args.attribute, args.value));
    eprintln!();

    // ── Parsing ──────────────────────────────────────────
    cli::section("Parsing");

    let file = File::open(&args.gff)
        .with_context(|| format!("failed to open GFF3 file: {}", args.gff.display()))?;
    let query = FeatureQuery {
        feature_type: &args.feature_type,
        attribute: &args.attribute,
        value: &args.value,
    };
    let (features, sequences) = gff3::parse_hybrid(BufReader::new(file), &query)?;

    cli::kv("Matches", &features.len().to_string());
    cli::kv("Sequences", &sequences.len().to_string());
    if features.len() > 1 {
        cli::warning("multiple matches share one header; records are emitted in file order");
    }

    if features.is_empty() {
        println!(
            "No features found for {}:{}={}",
            args.feature_type, args.attribute, args.value
        );
        cli::print_summary(start);
        return Ok(());
    }
    if features.len() > 1 {
        println!(
            "Warning: More than one feature found for {}:{}={}",
            args.feature_type, args.attribute, args.value
        );
    }

    let header = format!("{}:{}:{}", args.feature_type, args.attribute, args.value);
    for feature in &features {
        let sequence = extract(&sequences, feature)?;
        let record = fasta::format_fasta(&header, &sequence, args.line_length)?;
        println!("{record}");
    }

    cli::print_summary(start);
    Ok(())
}
