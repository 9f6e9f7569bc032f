use serde::{Deserialize, Serialize};

/// Ordered symbol sequence explored by the search.
///
/// Genomes are replaced wholesale on acceptance; the mutation operators always
/// build a fresh vector rather than editing the current one.
pub type Genome = Vec<u8>;

/// One of the four fitness landscapes the climber can explore.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Free text scored by spacing and punctuation (small genome)
    #[default]
    TextV1,
    /// Free text scored by spacing and punctuation (large genome)
    TextV2,
    /// RNA scored by translated protein composition
    RnaComposition,
    /// RNA scored by translated protein length
    RnaLength,
}

impl Variant {
    pub fn name(&self) -> &'static str {
        match self {
            Variant::TextV1 => "text-v1",
            Variant::TextV2 => "text-v2",
            Variant::RnaComposition => "rna-composition",
            Variant::RnaLength => "rna-length",
        }
    }

    pub fn alphabet(&self) -> Alphabet {
        match self {
            Variant::TextV1 | Variant::TextV2 => Alphabet::Text,
            Variant::RnaComposition | Variant::RnaLength => Alphabet::Nucleotide,
        }
    }

    pub fn default_initial_length(&self) -> usize {
        match self {
            Variant::TextV1 => 45,
            Variant::TextV2 => 1000,
            Variant::RnaComposition | Variant::RnaLength => 300,
        }
    }

    pub fn default_iterations(&self) -> usize {
        match self {
            Variant::TextV1 => 500_000,
            _ => 50_000,
        }
    }

    pub fn default_infection(&self) -> InfectionMode {
        match self {
            Variant::TextV1 | Variant::RnaComposition => InfectionMode::Fixed,
            Variant::TextV2 | Variant::RnaLength => InfectionMode::Adaptive,
        }
    }

    pub fn default_radiation(&self) -> usize {
        match self.alphabet() {
            Alphabet::Text => 2,
            Alphabet::Nucleotide => 3,
        }
    }

    pub fn default_growth(&self) -> GrowthMode {
        match self {
            Variant::TextV1 | Variant::RnaComposition => GrowthMode::Single,
            Variant::TextV2 | Variant::RnaLength => GrowthMode::Variable,
        }
    }

    pub fn layout(&self) -> ReportLayout {
        match self {
            Variant::RnaLength => ReportLayout::ProteinSize,
            _ => ReportLayout::Genome,
        }
    }
}

/// Symbol set a genome is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alphabet {
    Text,
    Nucleotide,
}

/// How many symbols a single infection overwrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InfectionMode {
    /// Always the configured radiation level
    Fixed,
    /// Drawn uniformly from the adaptive range
    Adaptive,
}

/// How many symbols a single add appends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrowthMode {
    Single,
    /// Uniform run length in 1..=growth_max
    Variable,
}

/// Column layout of the final report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportLayout {
    /// Time, genome prefix, score, length
    Genome,
    /// Time, protein size, genome size
    ProteinSize,
}

/// Point-in-time view of the search, used for the first and last report lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub time: usize,
    pub genome: String,
    pub score: f64,
    pub length: usize,
}

impl Snapshot {
    pub fn new(time: usize, genome: &[u8], score: f64) -> Self {
        Self {
            time,
            genome: String::from_utf8_lossy(genome).into_owned(),
            score,
            length: genome.len(),
        }
    }
}

/// Outcome of a complete run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub variant: Variant,
    pub iterations: usize,
    pub accepted: usize,
    pub first: Snapshot,
    pub last: Snapshot,
}
