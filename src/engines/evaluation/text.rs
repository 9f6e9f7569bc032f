//! Spacing heuristics for free-text genomes.
//!
//! Both reward whitespace up to an ideal density of one space per five
//! symbols and penalise punctuation, uppercase letters and digits. They are
//! normalised by the fixed initial genome size, not the current length.

use crate::engines::evaluation::fitness::Fitness;
use crate::error::Result;

const IDEAL_SPACING: f64 = 5.0;

fn is_bad_symbol(c: char) -> bool {
    c.is_ascii_punctuation() || c.is_uppercase()
}

/// Pays +1 when the truncated running `good` meets the truncated ideal count.
///
/// Checked after every symbol, so in practice the bonus lands once, at the
/// moment `good` first reaches the ideal.
fn density_bonus(good: f64, ideal: f64) -> f64 {
    if good as i64 == ideal as i64 {
        1.0
    } else {
        0.0
    }
}

pub struct TextSpacingV1 {
    genome_size: usize,
}

impl TextSpacingV1 {
    pub fn new(genome_size: usize) -> Self {
        Self { genome_size }
    }
}

impl Fitness for TextSpacingV1 {
    fn name(&self) -> &'static str {
        "text-spacing-v1"
    }

    fn score(&self, genome: &[u8]) -> Result<f64> {
        let mut good = 1.0;
        let mut bad = 1.0;
        let ideal = genome.len() as f64 / IDEAL_SPACING;

        for &symbol in genome {
            let c = symbol as char;
            if c.is_whitespace() {
                good += 0.1;
            }
            if is_bad_symbol(c) || c.is_numeric() {
                bad += 1.0;
            }
            good += density_bonus(good, ideal);
        }

        Ok(((good / bad) / self.genome_size as f64) * 100.0)
    }
}

/// Large-genome heuristic. Digits and punctuation/uppercase are two
/// independent penalty checks, so a symbol matching both is counted twice.
pub struct TextSpacingV2 {
    genome_size: usize,
}

impl TextSpacingV2 {
    pub fn new(genome_size: usize) -> Self {
        Self { genome_size }
    }
}

impl Fitness for TextSpacingV2 {
    fn name(&self) -> &'static str {
        "text-spacing-v2"
    }

    fn score(&self, genome: &[u8]) -> Result<f64> {
        let mut good = 0.0;
        let mut bad = 0.0;
        let ideal = genome.len() as f64 / IDEAL_SPACING;

        for &symbol in genome {
            let c = symbol as char;
            if c.is_whitespace() {
                good += 1.0;
            }
            if c.is_numeric() {
                bad += 1.0;
            }
            if is_bad_symbol(c) {
                bad += 1.0;
            }
            good += density_bonus(good, ideal);
        }

        Ok((good / (bad + 1.0)) / self.genome_size as f64 * 100_000.0)
    }
}
