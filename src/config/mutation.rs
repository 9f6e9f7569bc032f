use super::traits::ConfigSection;
use crate::error::EgolutionError;
use crate::types::{GrowthMode, InfectionMode};
use serde::{Deserialize, Serialize};

/// Mutation operator settings. `None` means "use the variant's default".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MutationConfig {
    pub infection: Option<InfectionMode>,
    /// Symbols overwritten by a fixed-size infection
    pub radiation: Option<usize>,
    /// Adaptive infection length is drawn from adaptive_min..adaptive_max
    pub adaptive_min: usize,
    pub adaptive_max: usize,
    pub growth: Option<GrowthMode>,
    /// Longest run appended by a variable-growth add
    pub growth_max: usize,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            infection: None,
            radiation: None,
            adaptive_min: 1,
            adaptive_max: 4,
            growth: None,
            growth_max: 500,
        }
    }
}

impl ConfigSection for MutationConfig {
    fn section_name() -> &'static str {
        "mutation"
    }

    fn validate(&self) -> Result<(), EgolutionError> {
        if self.radiation == Some(0) {
            return Err(EgolutionError::Configuration(
                "Radiation must be at least 1".to_string(),
            ));
        }
        if self.adaptive_min == 0 || self.adaptive_min >= self.adaptive_max {
            return Err(EgolutionError::Configuration(format!(
                "Adaptive infection range {}..{} must be non-empty and start at 1 or more",
                self.adaptive_min, self.adaptive_max
            )));
        }
        if self.growth_max == 0 {
            return Err(EgolutionError::Configuration(
                "Growth max must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
