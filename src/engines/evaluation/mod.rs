pub mod fitness;
pub mod protein;
pub mod text;

pub use fitness::{scorer_for, Fitness};
pub use protein::{ProteinComposition, ProteinLength};
pub use text::{TextSpacingV1, TextSpacingV2};
