pub mod codec;
pub mod config;
pub mod engines;
pub mod error;
pub mod report;
pub mod types;

pub use engines::generation::{HillClimber, ProgressCallback};
pub use error::{EgolutionError, Result};
pub use types::{Genome, RunReport, Snapshot, Variant};
