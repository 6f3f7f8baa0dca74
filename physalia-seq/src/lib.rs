//! Sequence cleaning for the Physalia sequence-comparison workspace.
//!
//! The aligners in `physalia-align` consume plain uppercase byte slices over
//! a fixed alphabet. This crate produces them: [`filter::clean_fasta`] strips
//! FASTA headers, uppercases, and drops any byte outside the chosen
//! [`alphabet::Alphabet`].

pub mod alphabet;
pub mod filter;

pub use alphabet::{Alphabet, DnaAlphabet, RnaAlphabet};
pub use filter::{clean_fasta, read_fasta};
