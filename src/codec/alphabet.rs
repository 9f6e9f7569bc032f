use crate::types::{Alphabet, Genome};
use rand::Rng;

/// Symbols of the free-text alphabet: space, letters, digits and punctuation.
pub const TEXT_SYMBOLS: &[u8] =
    b" abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789.!?:,;";

/// RNA bases.
pub const NUCLEOTIDES: &[u8] = b"ACGU";

impl Alphabet {
    pub fn symbols(&self) -> &'static [u8] {
        match self {
            Alphabet::Text => TEXT_SYMBOLS,
            Alphabet::Nucleotide => NUCLEOTIDES,
        }
    }

    #[cfg(test)]
    pub fn contains(&self, symbol: u8) -> bool {
        self.symbols().contains(&symbol)
    }
}

/// Draw `n` symbols independently and uniformly from `alphabet`.
pub fn sample<R: Rng>(alphabet: Alphabet, n: usize, rng: &mut R) -> Genome {
    let symbols = alphabet.symbols();
    (0..n)
        .map(|_| symbols[rng.gen_range(0..symbols.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_length_and_membership() {
        let mut rng = StdRng::seed_from_u64(1);
        let genome = sample(Alphabet::Text, 45, &mut rng);
        assert_eq!(genome.len(), 45);
        assert!(genome.iter().all(|&s| Alphabet::Text.contains(s)));

        let rna = sample(Alphabet::Nucleotide, 300, &mut rng);
        assert_eq!(rna.len(), 300);
        assert!(rna.iter().all(|s| b"ACGU".contains(s)));
    }

    #[test]
    fn test_sample_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample(Alphabet::Nucleotide, 0, &mut rng).is_empty());
    }

    #[test]
    fn test_sample_is_seed_deterministic() {
        let a = sample(Alphabet::Text, 64, &mut StdRng::seed_from_u64(99));
        let b = sample(Alphabet::Text, 64, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_covers_every_base() {
        let mut rng = StdRng::seed_from_u64(5);
        let rna = sample(Alphabet::Nucleotide, 1000, &mut rng);
        for base in NUCLEOTIDES {
            assert!(rna.contains(base), "base {} never drawn", *base as char);
        }
    }
}
