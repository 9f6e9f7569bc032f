//! Standard RNA genetic code.
//!
//! Codons are indexed as `16 * b1 + 4 * b2 + b3` with `U=0, C=1, A=2, G=3`,
//! so the table reads in the textbook UCAG order. `*` marks a stop codon.

use crate::error::{EgolutionError, Result};
use serde::{Deserialize, Serialize};

const CODON_LEN: usize = 3;

static GENETIC_CODE: &[u8; 64] =
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

const STOP_MARKER: u8 = b'*';

/// Output of translating a single codon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Residue {
    Amino(u8),
    Stop,
}

/// Decoded protein.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Protein {
    pub residues: Vec<u8>,
    /// True when translation ended on a stop codon rather than genome exhaustion
    pub stopped: bool,
}

impl Protein {
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    #[cfg(test)]
    pub fn as_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.residues)
    }
}

fn base_index(base: u8) -> Option<usize> {
    match base {
        b'U' => Some(0),
        b'C' => Some(1),
        b'A' => Some(2),
        b'G' => Some(3),
        _ => None,
    }
}

/// Look up a 3-symbol window. `None` if the window holds a non-nucleotide symbol.
pub fn translate(codon: &[u8]) -> Option<Residue> {
    if codon.len() != CODON_LEN {
        return None;
    }
    let index = codon
        .iter()
        .try_fold(0usize, |acc, &base| Some(acc * 4 + base_index(base)?))?;

    match GENETIC_CODE[index] {
        STOP_MARKER => Some(Residue::Stop),
        amino => Some(Residue::Amino(amino)),
    }
}

/// Translate `genome` in non-overlapping codons from the start.
///
/// Stops before the first stop codon; a trailing partial codon is ignored.
pub fn decode(genome: &[u8]) -> Result<Protein> {
    let mut residues = Vec::with_capacity(genome.len() / CODON_LEN);

    for codon in genome.chunks_exact(CODON_LEN) {
        match translate(codon) {
            Some(Residue::Amino(amino)) => residues.push(amino),
            Some(Residue::Stop) => {
                return Ok(Protein {
                    residues,
                    stopped: true,
                })
            }
            None => {
                return Err(EgolutionError::UnknownCodon(
                    String::from_utf8_lossy(codon).into_owned(),
                ))
            }
        }
    }

    Ok(Protein {
        residues,
        stopped: false,
    })
}
