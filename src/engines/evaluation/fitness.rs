use crate::engines::evaluation::protein::{ProteinComposition, ProteinLength};
use crate::engines::evaluation::text::{TextSpacingV1, TextSpacingV2};
use crate::error::Result;
use crate::types::Variant;

/// Scoring strategy: maps a genome to a non-negative score, higher is better.
///
/// Implementations are pure; the same genome always scores the same.
pub trait Fitness: Send + Sync {
    fn name(&self) -> &'static str;

    fn score(&self, genome: &[u8]) -> Result<f64>;
}

/// Build the scorer a variant runs with.
///
/// `genome_size` is the fixed initial length the text heuristics normalise by.
pub fn scorer_for(variant: Variant, genome_size: usize) -> Box<dyn Fitness> {
    match variant {
        Variant::TextV1 => Box::new(TextSpacingV1::new(genome_size)),
        Variant::TextV2 => Box::new(TextSpacingV2::new(genome_size)),
        Variant::RnaComposition => Box::new(ProteinComposition),
        Variant::RnaLength => Box::new(ProteinLength),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scorer_selection() {
        assert_eq!(scorer_for(Variant::TextV1, 45).name(), "text-spacing-v1");
        assert_eq!(scorer_for(Variant::TextV2, 1000).name(), "text-spacing-v2");
        assert_eq!(scorer_for(Variant::RnaComposition, 300).name(), "protein-composition");
        assert_eq!(scorer_for(Variant::RnaLength, 300).name(), "protein-length");
    }

    #[test]
    fn test_scores_are_non_negative() {
        let genomes: [&[u8]; 3] = [b"AUGUUUAAAUAG", b"UAAUAAUAA", b"GCUGCUGCUGC"];
        for variant in [Variant::RnaComposition, Variant::RnaLength] {
            let scorer = scorer_for(variant, 300);
            for genome in genomes {
                assert!(scorer.score(genome).unwrap() >= 0.0);
            }
        }
        let texts: [&[u8]; 3] = [b"hello world", b"!!!???", b"A B C D E F"];
        for variant in [Variant::TextV1, Variant::TextV2] {
            let scorer = scorer_for(variant, 45);
            for genome in texts {
                assert!(scorer.score(genome).unwrap() >= 0.0);
            }
        }
    }
}
