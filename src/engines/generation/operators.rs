use crate::codec::sample;
use crate::error::{EgolutionError, Result};
use crate::types::{Alphabet, Genome};
use rand::Rng;

/// Infection: overwrite `k` contiguous symbols with freshly sampled ones.
///
/// `k` is clamped to the genome length, so the result always has the same
/// length as the input.
pub fn infect<R: Rng>(
    genome: &[u8],
    k: usize,
    alphabet: Alphabet,
    rng: &mut R,
) -> Result<Genome> {
    if genome.is_empty() {
        return Err(EgolutionError::LengthUnderflow {
            operation: "infect",
            length: 0,
            required: 1,
        });
    }

    let k = k.clamp(1, genome.len());
    let start = rng.gen_range(0..=genome.len() - k);
    let virus = sample(alphabet, k, rng);

    let mut infected = genome.to_vec();
    infected[start..start + k].copy_from_slice(&virus);
    Ok(infected)
}

/// Add: append `run` freshly sampled symbols to the end of the genome.
pub fn add<R: Rng>(genome: &[u8], run: usize, alphabet: Alphabet, rng: &mut R) -> Genome {
    let mut grown = Vec::with_capacity(genome.len() + run);
    grown.extend_from_slice(genome);
    grown.extend(sample(alphabet, run, rng));
    grown
}

/// Loss: delete one symbol at a position in `0..len - 1`.
///
/// The final symbol is never the one removed.
pub fn loss<R: Rng>(genome: &[u8], rng: &mut R) -> Result<Genome> {
    if genome.len() <= 1 {
        return Err(EgolutionError::LengthUnderflow {
            operation: "loss",
            length: genome.len(),
            required: 2,
        });
    }

    let position = rng.gen_range(0..genome.len() - 1);
    let mut shorter = Vec::with_capacity(genome.len() - 1);
    shorter.extend_from_slice(&genome[..position]);
    shorter.extend_from_slice(&genome[position + 1..]);
    Ok(shorter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_infect_keeps_length() {
        let mut rng = StdRng::seed_from_u64(3);
        let genome = b"the quick brown fox".to_vec();
        for k in 1..=4 {
            let infected = infect(&genome, k, Alphabet::Text, &mut rng).unwrap();
            assert_eq!(infected.len(), genome.len());
            let changed = genome.iter().zip(&infected).filter(|(a, b)| a != b).count();
            assert!(changed <= k);
        }
    }

    #[test]
    fn test_infect_clamps_to_genome() {
        let mut rng = StdRng::seed_from_u64(3);
        let infected = infect(b"AC", 5, Alphabet::Nucleotide, &mut rng).unwrap();
        assert_eq!(infected.len(), 2);
    }

    #[test]
    fn test_infect_empty_fails() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(infect(b"", 2, Alphabet::Text, &mut rng).is_err());
    }

    #[test]
    fn test_add_appends_at_end() {
        let mut rng = StdRng::seed_from_u64(4);
        let grown = add(b"abc", 1, Alphabet::Text, &mut rng);
        assert_eq!(grown.len(), 4);
        assert_eq!(&grown[..3], b"abc");

        let grown = add(b"AUG", 250, Alphabet::Nucleotide, &mut rng);
        assert_eq!(grown.len(), 253);
        assert_eq!(&grown[..3], b"AUG");
    }

    #[test]
    fn test_loss_removes_one_symbol() {
        let mut rng = StdRng::seed_from_u64(5);
        let genome = b"abcdef".to_vec();
        for _ in 0..50 {
            let shorter = loss(&genome, &mut rng).unwrap();
            assert_eq!(shorter.len(), 5);
            // the last symbol survives every deletion
            assert_eq!(shorter.last(), Some(&b'f'));
        }
    }

    #[test]
    fn test_loss_on_length_one_fails() {
        let mut rng = StdRng::seed_from_u64(5);
        let result = loss(b"a", &mut rng);
        assert!(matches!(
            result,
            Err(EgolutionError::LengthUnderflow { operation: "loss", length: 1, .. })
        ));
        assert!(loss(b"", &mut rng).is_err());
    }

    #[test]
    fn test_loss_on_length_two_removes_first() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(loss(b"xy", &mut rng).unwrap(), b"y".to_vec());
    }
}
