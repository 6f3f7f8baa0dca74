//! FASTA text cleaning.
//!
//! A FASTA record body is concatenated into one uppercase sequence with
//! every byte outside the alphabet discarded. Header (`>`) and legacy
//! comment (`;`) lines are skipped entirely, so the output is ready to hand
//! straight to the aligners.

use std::fs;
use std::path::Path;

use physalia_core::Result;

use crate::alphabet::Alphabet;

/// Clean FASTA text into a single alphabet-restricted uppercase sequence.
///
/// Multiple records are concatenated; whitespace and out-of-alphabet bytes
/// are dropped silently.
pub fn clean_fasta<A: Alphabet>(text: &str) -> Vec<u8> {
    let mut seq = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.starts_with('>') || line.starts_with(';') {
            continue;
        }
        for b in line.bytes() {
            let b = b.to_ascii_uppercase();
            if A::is_valid(b) {
                seq.push(b);
            }
        }
    }
    seq
}

/// Read a FASTA file and clean it via [`clean_fasta`].
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn read_fasta<A: Alphabet>(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let text = fs::read_to_string(path)?;
    Ok(clean_fasta::<A>(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::DnaAlphabet;

    #[test]
    fn strips_headers_and_uppercases() {
        let text = ">seq1 influenza segment\nacgt\nACGT\n";
        assert_eq!(clean_fasta::<DnaAlphabet>(text), b"ACGTACGT");
    }

    #[test]
    fn drops_out_of_alphabet_bytes() {
        let text = ">x\nAC-GT 12xyz\n";
        assert_eq!(clean_fasta::<DnaAlphabet>(text), b"ACGT");
    }

    #[test]
    fn concatenates_multiple_records() {
        let text = ">a\nACG\n>b\nTTT\n";
        assert_eq!(clean_fasta::<DnaAlphabet>(text), b"ACGTTT");
    }

    #[test]
    fn skips_comment_lines() {
        let text = "; legacy comment\nACGT\n";
        assert_eq!(clean_fasta::<DnaAlphabet>(text), b"ACGT");
    }

    #[test]
    fn empty_input_yields_empty_sequence() {
        assert!(clean_fasta::<DnaAlphabet>("").is_empty());
        assert!(clean_fasta::<DnaAlphabet>(">only a header\n").is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_fasta::<DnaAlphabet>("/nonexistent/genome.fasta").unwrap_err();
        assert!(matches!(err, physalia_core::PhysaliaError::Io(_)));
    }
}
