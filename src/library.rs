//! k-mer library construction from a FASTA file.
//!
//! Every k-mer of every sequence is counted together with its reverse
//! complement, and the table is written as `<kmer>\t<count>` lines sorted by
//! k-mer. Sequences are uppercased and stripped of whitespace before scanning.
//!
//! The reverse complement drops characters it has no mapping for, while the
//! forward k-mer is counted as written. A k-mer containing such a character is
//! therefore counted under two different keys.

use crate::error::{CutterError, Result};
use crate::fs::atomic_write_with;
use log::{debug, info};
use regex::Regex;
use std::collections::BTreeMap;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// One FASTA record. The header keeps its leading `>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub header: Option<String>,
    pub sequence: String,
}

/// Complement of a single base, or `None` when the character has no mapping.
fn complement(base: char) -> Option<char> {
    Some(match base {
        'A' => 'T',
        'T' => 'A',
        'C' => 'G',
        'G' => 'C',
        'N' => 'N',
        'a' => 't',
        't' => 'a',
        'c' => 'g',
        'g' => 'c',
        'n' => 'n',
        '[' => ']',
        ']' => '[',
        _ => return None,
    })
}

/// Reverse complement of `seq`. Unmapped characters are dropped.
pub fn reverse_complement(seq: &str) -> String {
    seq.chars().rev().filter_map(complement).collect()
}

/// Read FASTA records line by line.
///
/// Lines before the first header form a header-less record. A header directly
/// followed by another header produces no record.
pub fn read_fasta<R: BufRead>(reader: R) -> Result<Vec<FastaRecord>> {
    let mut records = Vec::new();
    let mut header: Option<String> = None;
    let mut sequence = String::new();

    for line in reader.lines() {
        let line = line
            .map_err(|e| CutterError::UserError(format!("failed to read FASTA input: {}", e)))?;

        if line.starts_with('>') {
            if !sequence.is_empty() {
                records.push(FastaRecord {
                    header: header.take(),
                    sequence: std::mem::take(&mut sequence),
                });
            }
            header = Some(line);
            sequence.clear();
            continue;
        }

        sequence.push_str(&line);
        sequence.push('\n');
    }

    if !sequence.is_empty() || header.is_some() {
        records.push(FastaRecord { header, sequence });
    }

    Ok(records)
}

/// Normalize a raw sequence for scanning: uppercase, no whitespace.
pub fn normalize_sequence(raw: &str) -> String {
    WHITESPACE.replace_all(&raw.to_uppercase(), "").into_owned()
}

/// Count every k-mer and its reverse complement across `records`.
pub fn count_kmers(records: &[FastaRecord], kmer_length: usize) -> Result<BTreeMap<String, u64>> {
    if kmer_length == 0 {
        return Err(CutterError::UserError(
            "k-mer length must be greater than 0".to_string(),
        ));
    }

    let mut counts = BTreeMap::new();
    for record in records {
        let bases: Vec<char> = normalize_sequence(&record.sequence).chars().collect();
        debug!(
            "scanning {} bases of {}",
            bases.len(),
            record.header.as_deref().unwrap_or("unnamed sequence")
        );
        for window in bases.windows(kmer_length) {
            let kmer: String = window.iter().collect();
            let rev = reverse_complement(&kmer);
            *counts.entry(kmer).or_insert(0) += 1;
            *counts.entry(rev).or_insert(0) += 1;
        }
    }
    Ok(counts)
}

/// Build the k-mer library for `fasta` and write it to `output`.
///
/// Returns the number of distinct k-mers written.
pub fn create_kmer_file(fasta: &Path, output: &Path, kmer_length: usize) -> Result<usize> {
    let file = std::fs::File::open(fasta).map_err(|e| {
        CutterError::UserError(format!(
            "failed to open FASTA file '{}': {}",
            fasta.display(),
            e
        ))
    })?;

    let records = read_fasta(BufReader::new(file))?;
    let counts = count_kmers(&records, kmer_length)?;

    atomic_write_with(output, |out| {
        for (kmer, count) in &counts {
            writeln!(out, "{}\t{}", kmer, count)?;
        }
        Ok(())
    })?;

    info!(
        "wrote {} distinct {}-mers from {} records to {}",
        counts.len(),
        kmer_length,
        records.len(),
        output.display()
    );
    Ok(counts.len())
}
