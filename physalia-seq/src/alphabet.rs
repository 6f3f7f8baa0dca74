//! Alphabet definitions for sequence cleaning.
//!
//! Each alphabet is a zero-sized marker type that implements [`Alphabet`],
//! defining the set of valid bytes (uppercase) for a sequence type.

/// Trait for nucleotide alphabets.
///
/// Implementors define a fixed set of valid uppercase bytes. The cleaning
/// functions uppercase input first, then filter against the alphabet.
pub trait Alphabet: Clone + 'static {
    /// Human-readable name (e.g. "DNA").
    const NAME: &'static str;

    /// The set of valid uppercase bytes.
    const VALID_BYTES: &'static [u8];

    /// Check whether a byte (assumed already uppercased) is valid.
    fn is_valid(b: u8) -> bool {
        Self::VALID_BYTES.contains(&b)
    }
}

/// DNA alphabet: `ACGTN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DnaAlphabet;

impl Alphabet for DnaAlphabet {
    const NAME: &'static str = "DNA";
    const VALID_BYTES: &'static [u8] = b"ACGTN";
}

/// RNA alphabet: `ACGUN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RnaAlphabet;

impl Alphabet for RnaAlphabet {
    const NAME: &'static str = "RNA";
    const VALID_BYTES: &'static [u8] = b"ACGUN";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dna_accepts_bases_and_n() {
        for &b in b"ACGTN" {
            assert!(DnaAlphabet::is_valid(b), "DNA should accept {}", b as char);
        }
    }

    #[test]
    fn dna_rejects_u() {
        assert!(!DnaAlphabet::is_valid(b'U'));
    }

    #[test]
    fn rna_rejects_t() {
        assert!(RnaAlphabet::is_valid(b'U'));
        assert!(!RnaAlphabet::is_valid(b'T'));
    }
}
