use crate::config::MutationConfig;
use crate::engines::generation::operators::{add, infect, loss};
use crate::error::Result;
use crate::types::{Alphabet, Genome, GrowthMode, InfectionMode, Variant};
use rand::Rng;
use std::ops::Range;

const DICE_FACES: u32 = 100;
const LOSS_MODULUS: u32 = 15;
const INFECT_MODULUS: u32 = 10;

/// Which operator produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    /// One symbol deleted
    Loss,
    /// `k` symbols overwritten
    Infect(usize),
    /// `n` symbols appended
    Add(usize),
    /// Loss was drawn on a length-1 genome; the candidate is an unchanged copy
    Skipped,
}

/// Produces one structurally mutated candidate per call.
#[derive(Debug, Clone)]
pub struct Mutator {
    alphabet: Alphabet,
    infection: InfectionMode,
    radiation: usize,
    adaptive: Range<usize>,
    growth: GrowthMode,
    growth_max: usize,
}

impl Mutator {
    pub fn from_config(config: &MutationConfig, variant: Variant) -> Self {
        Self {
            alphabet: variant.alphabet(),
            infection: config.infection.unwrap_or_else(|| variant.default_infection()),
            radiation: config.radiation.unwrap_or_else(|| variant.default_radiation()),
            adaptive: config.adaptive_min..config.adaptive_max,
            growth: config.growth.unwrap_or_else(|| variant.default_growth()),
            growth_max: config.growth_max,
        }
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Largest length change a single add can cause.
    #[cfg(test)]
    pub fn max_growth(&self) -> usize {
        match self.growth {
            GrowthMode::Single => 1,
            GrowthMode::Variable => self.growth_max,
        }
    }

    /// Roll the dice and apply exactly one operator.
    ///
    /// Branch order is load-bearing: loss (`dice % 15 == 0`) is checked before
    /// infection (`dice % 10 == 0`), so a roll of 0, 30 or 60 is a loss.
    pub fn mutate<R: Rng>(&self, genome: &[u8], rng: &mut R) -> Result<(Genome, MutationKind)> {
        let dice = rng.gen_range(0..DICE_FACES);

        if dice % LOSS_MODULUS == 0 {
            if genome.len() <= 1 {
                return Ok((genome.to_vec(), MutationKind::Skipped));
            }
            Ok((loss(genome, rng)?, MutationKind::Loss))
        } else if dice % INFECT_MODULUS == 0 {
            let k = self.infection_length(rng).min(genome.len());
            Ok((infect(genome, k, self.alphabet, rng)?, MutationKind::Infect(k)))
        } else {
            let run = self.growth_length(rng);
            Ok((add(genome, run, self.alphabet, rng), MutationKind::Add(run)))
        }
    }

    fn infection_length<R: Rng>(&self, rng: &mut R) -> usize {
        match self.infection {
            InfectionMode::Fixed => self.radiation,
            InfectionMode::Adaptive => rng.gen_range(self.adaptive.clone()),
        }
    }

    fn growth_length<R: Rng>(&self, rng: &mut R) -> usize {
        match self.growth {
            GrowthMode::Single => 1,
            GrowthMode::Variable => rng.gen_range(1..=self.growth_max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::sample;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn mutator(variant: Variant) -> Mutator {
        Mutator::from_config(&MutationConfig::default(), variant)
    }

    #[test]
    fn test_length_change_is_bounded() {
        let mut rng = StdRng::seed_from_u64(11);
        let variants = [
            Variant::TextV1,
            Variant::TextV2,
            Variant::RnaComposition,
            Variant::RnaLength,
        ];
        for variant in variants {
            let m = mutator(variant);
            let genome = sample(m.alphabet(), 60, &mut rng);
            for _ in 0..500 {
                let (candidate, kind) = m.mutate(&genome, &mut rng).unwrap();
                match kind {
                    MutationKind::Loss => assert_eq!(candidate.len(), genome.len() - 1),
                    MutationKind::Infect(k) => {
                        assert_eq!(candidate.len(), genome.len());
                        assert!((1..4).contains(&k), "{:?} infected {} symbols", variant, k);
                    }
                    MutationKind::Add(n) => {
                        assert_eq!(candidate.len(), genome.len() + n);
                        assert!(n >= 1 && n <= m.max_growth());
                    }
                    MutationKind::Skipped => panic!("length 60 genome should never skip"),
                }
            }
        }
    }

    #[test]
    fn test_single_growth_variant() {
        let mut rng = StdRng::seed_from_u64(12);
        let m = mutator(Variant::TextV1);
        let genome = b"hello world".to_vec();
        for _ in 0..200 {
            let (_, kind) = m.mutate(&genome, &mut rng).unwrap();
            match kind {
                MutationKind::Add(n) => assert_eq!(n, 1),
                MutationKind::Infect(k) => assert_eq!(k, 2),
                _ => {}
            }
        }
    }

    fn infection_lengths(variant: Variant, seed: u64) -> Vec<usize> {
        let mut rng = StdRng::seed_from_u64(seed);
        let m = mutator(variant);
        let genome = sample(m.alphabet(), 60, &mut rng);
        let mut lengths = Vec::new();
        for _ in 0..5000 {
            if let (_, MutationKind::Infect(k)) = m.mutate(&genome, &mut rng).unwrap() {
                lengths.push(k);
            }
        }
        lengths
    }

    #[test]
    fn test_adaptive_infection_range_excludes_upper_bound() {
        for variant in [Variant::TextV2, Variant::RnaLength] {
            let lengths = infection_lengths(variant, 21);
            assert!(!lengths.is_empty());
            for k in 1..4 {
                assert!(lengths.contains(&k), "{:?} never infected {} symbols", variant, k);
            }
            assert!(lengths.iter().all(|&k| (1..4).contains(&k)), "{:?}: {:?}", variant, lengths);
        }
    }

    #[test]
    fn test_fixed_infection_uses_variant_radiation() {
        let rna = infection_lengths(Variant::RnaComposition, 22);
        assert!(!rna.is_empty());
        assert!(rna.iter().all(|&k| k == 3));

        let text = infection_lengths(Variant::TextV1, 23);
        assert!(!text.is_empty());
        assert!(text.iter().all(|&k| k == 2));
    }

    #[test]
    fn test_loss_on_single_symbol_is_skipped() {
        let mut rng = StdRng::seed_from_u64(13);
        let m = mutator(Variant::TextV1);
        let mut skipped = 0;
        for _ in 0..1000 {
            let (candidate, kind) = m.mutate(b"a", &mut rng).unwrap();
            assert!(!candidate.is_empty());
            if kind == MutationKind::Skipped {
                assert_eq!(candidate, b"a".to_vec());
                skipped += 1;
            }
            if let MutationKind::Infect(k) = kind {
                assert_eq!(k, 1);
            }
        }
        assert!(skipped > 0);
    }

    #[test]
    fn test_operator_frequencies() {
        let mut rng = StdRng::seed_from_u64(14);
        let m = mutator(Variant::TextV1);
        let genome = b"some genome text".to_vec();
        let (mut losses, mut infections, mut adds) = (0, 0, 0);
        for _ in 0..20_000 {
            match m.mutate(&genome, &mut rng).unwrap().1 {
                MutationKind::Loss => losses += 1,
                MutationKind::Infect(_) => infections += 1,
                MutationKind::Add(_) => adds += 1,
                MutationKind::Skipped => {}
            }
        }
        // 7/100 losses, 6/100 infections (10, 20, 40, 50, 70, 80), 87/100 adds
        assert!(losses > 1000 && losses < 1800, "losses = {}", losses);
        assert!(infections > 1000 && infections < 1800, "infections = {}", infections);
        assert!(adds > 16_000, "adds = {}", adds);
    }
}
