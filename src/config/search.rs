use super::traits::ConfigSection;
use crate::error::EgolutionError;
use crate::types::Variant;
use serde::{Deserialize, Serialize};

/// Run-level settings. Fields left as `None` fall back to the variant's defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub variant: Variant,
    pub iterations: Option<usize>,
    pub initial_length: Option<usize>,
    pub seed: Option<u64>,
    pub quiet: bool,
    /// Print a progress dot every this many iterations
    pub progress_interval: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            iterations: None,
            initial_length: None,
            seed: None,
            quiet: false,
            progress_interval: 25,
        }
    }
}

impl SearchConfig {
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn iterations(&self) -> usize {
        self.iterations
            .unwrap_or_else(|| self.variant.default_iterations())
    }

    /// Length of the initial genome; also the fixed `genomeSize` the text scorers divide by.
    pub fn initial_length(&self) -> usize {
        self.initial_length
            .unwrap_or_else(|| self.variant.default_initial_length())
    }
}

impl ConfigSection for SearchConfig {
    fn section_name() -> &'static str {
        "search"
    }

    fn validate(&self) -> Result<(), EgolutionError> {
        if self.initial_length() == 0 {
            return Err(EgolutionError::Configuration(
                "Initial genome length must be at least 1".to_string(),
            ));
        }
        if self.progress_interval == 0 {
            return Err(EgolutionError::Configuration(
                "Progress interval must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
