pub mod operators;
pub mod mutator;
pub mod hill_climber;
pub mod progress;

pub use mutator::{MutationKind, Mutator};
pub use hill_climber::{HillClimber, ProgressCallback, RunState, StepOutcome};
pub use progress::{ConsoleProgressCallback, SilentProgressCallback};
