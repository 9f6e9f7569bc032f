use crate::codec::decode;
use crate::engines::evaluation::fitness::Fitness;
use crate::error::Result;

const BONUS_RESIDUES: &[u8] = b"FIK";
const BONUS_WEIGHT: f64 = 2.0;

/// Protein length plus a bonus for F, I and K residues.
///
/// A reading frame that hits a stop codon scores zero.
pub struct ProteinComposition;

impl Fitness for ProteinComposition {
    fn name(&self) -> &'static str {
        "protein-composition"
    }

    fn score(&self, genome: &[u8]) -> Result<f64> {
        let protein = decode(genome)?;
        if protein.stopped {
            return Ok(0.0);
        }

        let bonus = protein
            .residues
            .iter()
            .filter(|r| BONUS_RESIDUES.contains(r))
            .count() as f64;
        Ok(protein.len() as f64 + BONUS_WEIGHT * bonus)
    }
}

/// Plain length of the decoded protein.
pub struct ProteinLength;

impl Fitness for ProteinLength {
    fn name(&self) -> &'static str {
        "protein-length"
    }

    fn score(&self, genome: &[u8]) -> Result<f64> {
        Ok(decode(genome)?.len() as f64)
    }
}
