use crate::codec::sample;
use crate::config::AppConfig;
use crate::engines::evaluation::{scorer_for, Fitness};
use crate::engines::generation::mutator::{MutationKind, Mutator};
use crate::error::Result;
use crate::types::{Genome, RunReport, Snapshot, Variant};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Mutable part of a run. Only `step` touches it, and only on acceptance.
#[derive(Debug, Clone, PartialEq)]
pub struct RunState {
    pub genome: Genome,
    pub score: f64,
    pub first: Snapshot,
}

/// What happened to a single candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub kind: MutationKind,
    pub candidate_score: f64,
    pub candidate_length: usize,
    pub accepted: bool,
}

/// Observer for run progress. Never influences the search.
pub trait ProgressCallback: Send {
    fn on_start(&mut self, first: &Snapshot);
    fn on_iteration(&mut self, iteration: usize, outcome: &StepOutcome);
    fn on_finish(&mut self, last: &Snapshot);
}

impl<C: ProgressCallback + ?Sized> ProgressCallback for &mut C {
    fn on_start(&mut self, first: &Snapshot) {
        (**self).on_start(first);
    }

    fn on_iteration(&mut self, iteration: usize, outcome: &StepOutcome) {
        (**self).on_iteration(iteration, outcome);
    }

    fn on_finish(&mut self, last: &Snapshot) {
        (**self).on_finish(last);
    }
}

/// Strict greedy ascent: a candidate replaces the current genome only when its
/// score is strictly greater. Always runs the full iteration budget.
pub struct HillClimber {
    variant: Variant,
    iterations: usize,
    initial_length: usize,
    mutator: Mutator,
    fitness: Box<dyn Fitness>,
    rng: StdRng,
}

impl HillClimber {
    pub fn new(config: AppConfig) -> Result<Self> {
        let fitness = scorer_for(config.search.variant, config.search.initial_length());
        Self::with_fitness(config, fitness)
    }

    /// Build a climber around a custom scoring strategy.
    pub fn with_fitness(config: AppConfig, fitness: Box<dyn Fitness>) -> Result<Self> {
        config.validate()?;

        let variant = config.search.variant;
        let rng = match config.search.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            variant,
            iterations: config.search.iterations(),
            initial_length: config.search.initial_length(),
            mutator: Mutator::from_config(&config.mutation, variant),
            fitness,
            rng,
        })
    }

    /// Sample and score the starting genome.
    pub fn init(&mut self) -> Result<RunState> {
        let genome = sample(self.mutator.alphabet(), self.initial_length, &mut self.rng);
        let score = self.fitness.score(&genome)?;
        let first = Snapshot::new(0, &genome, score);

        Ok(RunState {
            genome,
            score,
            first,
        })
    }

    /// One mutate, score, accept-or-reject cycle.
    pub fn step(&mut self, state: &mut RunState) -> Result<StepOutcome> {
        let (candidate, kind) = self.mutator.mutate(&state.genome, &mut self.rng)?;
        let candidate_score = self.fitness.score(&candidate)?;
        let candidate_length = candidate.len();
        let accepted = candidate_score > state.score;

        if accepted {
            state.genome = candidate;
            state.score = candidate_score;
        }

        Ok(StepOutcome {
            kind,
            candidate_score,
            candidate_length,
            accepted,
        })
    }

    /// Run the search
    pub fn run<C: ProgressCallback>(&mut self, mut callback: C) -> Result<RunReport> {
        let mut state = self.init()?;
        log::info!(
            "Starting {} run: {} iterations, scorer {}, initial score {:.4}",
            self.variant.name(),
            self.iterations,
            self.fitness.name(),
            state.score
        );
        callback.on_start(&state.first);

        let mut accepted = 0;
        for iteration in 0..self.iterations {
            let outcome = self.step(&mut state)?;
            if outcome.accepted {
                accepted += 1;
                log::debug!(
                    "[{}] accepted {:?}: score {:.4}, length {}",
                    iteration,
                    outcome.kind,
                    outcome.candidate_score,
                    outcome.candidate_length
                );
            } else {
                log::trace!(
                    "[{}] rejected {:?}: {:.4} <= {:.4}",
                    iteration,
                    outcome.kind,
                    outcome.candidate_score,
                    state.score
                );
            }
            callback.on_iteration(iteration, &outcome);
        }

        let last = Snapshot::new(self.iterations, &state.genome, state.score);
        callback.on_finish(&last);
        log::info!(
            "Finished {} run: {} of {} candidates accepted, final score {:.4}, length {}",
            self.variant.name(),
            accepted,
            self.iterations,
            last.score,
            last.length
        );

        Ok(RunReport {
            variant: self.variant,
            iterations: self.iterations,
            accepted,
            first: state.first,
            last,
        })
    }
}
