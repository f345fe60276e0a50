//! Top-level roster search.
//!
//! # Algorithm
//!
//! 1. Validate the configuration (fatal errors are returned before any work).
//! 2. Seed a `StdRng` from `config.seed`, or from the OS when unset.
//! 3. Run [`Population::evolve`] and package the result.
//!
//! The random source is threaded explicitly through generation,
//! selection, crossover and mutation, so a fixed seed replays a run
//! exactly.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::RosterConfig;
use crate::error::RosterError;
use crate::ga::{
    Chromosome, EvolutionParams, GeneticOperators, Population, RosterProblem, TerminationReason,
};
use crate::report::{CostSeries, GenerationSummary, RunObserver};
use crate::validation::validate_config;

/// Outcome of one search run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Seed used, when the run was seeded explicitly.
    pub seed: Option<u64>,
    /// Every generation produced.
    pub population: Population,
}

impl RunReport {
    /// Why the search stopped.
    pub fn termination(&self) -> TerminationReason {
        self.population.termination()
    }

    /// Lowest-cost chromosome, preferring staffing-feasible ones.
    pub fn best(&self) -> Option<&Chromosome> {
        self.population.best()
    }

    /// Per-generation statistics.
    pub fn summaries(&self) -> Vec<GenerationSummary> {
        self.population.summaries()
    }

    /// Min/avg/max cost per generation, for plotting.
    pub fn cost_series(&self) -> CostSeries {
        self.population.cost_series()
    }
}

/// Validated roster search.
///
/// # Example
/// ```
/// use u_roster::config::RosterConfig;
/// use u_roster::report::Silent;
/// use u_roster::solver::RosterSolver;
///
/// let config = RosterConfig::default().with_population_size(8).with_seed(42);
/// let solver = RosterSolver::new(config).unwrap();
/// let report = solver.run(&mut Silent);
/// assert_eq!(report.population.generations().len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct RosterSolver {
    config: RosterConfig,
    problem: RosterProblem,
    operators: GeneticOperators,
    params: EvolutionParams,
}

impl RosterSolver {
    /// Validates `config` and prepares the search.
    pub fn new(config: RosterConfig) -> Result<Self, RosterError> {
        validate_config(&config)?;
        Ok(Self {
            problem: config.problem(),
            operators: config.operators(),
            params: config.evolution_params(),
            config,
        })
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, RosterError> {
        Self::new(RosterConfig::from_json(json)?)
    }

    /// Validated configuration.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Problem definition.
    pub fn problem(&self) -> &RosterProblem {
        &self.problem
    }

    /// Runs with the configured seed (or OS entropy).
    pub fn run<O: RunObserver + ?Sized>(&self, observer: &mut O) -> RunReport {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut report = self.run_with_rng(observer, &mut rng);
        report.seed = self.config.seed;
        report
    }

    /// Runs with a caller-supplied random source.
    pub fn run_with_rng<O, R>(&self, observer: &mut O, rng: &mut R) -> RunReport
    where
        O: RunObserver + ?Sized,
        R: Rng,
    {
        info!(
            "roster search: {} chromosomes, {} employees x {} days",
            self.params.population_size, self.problem.employees, self.problem.days
        );
        let population = Population::evolve(
            &self.problem,
            &self.operators,
            &self.params,
            observer,
            rng,
        );
        if let Some(best) = population.best() {
            debug!(
                "best chromosome {}: cost {}, feasible {}",
                best.id(),
                best.cost(),
                best.is_feasible()
            );
        }
        RunReport {
            seed: None,
            population,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{LogObserver, Silent};
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = RosterSolver::new(RosterConfig::default().with_population_size(1)).unwrap_err();
        match err {
            RosterError::InvalidConfig(errors) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::PopulationTooSmall);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_error_message_lists_problems() {
        let config = RosterConfig::default()
            .with_population_size(0)
            .with_min_generation_improvement(-1.0);
        let err = RosterSolver::new(config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("invalid configuration: population_size"));
        assert!(msg.contains("; min_generation_improvement"));
    }

    #[test]
    fn test_from_json() {
        let solver = RosterSolver::from_json(r#"{ "population_size": 4, "seed": 3 }"#).unwrap();
        assert_eq!(solver.config().population_size, 4);
        assert!(RosterSolver::from_json("not json").is_err());
    }

    #[test]
    fn test_seeded_runs_replay() {
        let config = RosterConfig::default().with_population_size(16).with_seed(42);
        let solver = RosterSolver::new(config).unwrap();
        let a = solver.run(&mut Silent);
        let b = solver.run(&mut LogObserver);
        assert_eq!(a.seed, Some(42));
        assert_eq!(a.cost_series(), b.cost_series());
        assert_eq!(
            a.best().map(|c| c.grid().clone()),
            b.best().map(|c| c.grid().clone())
        );
    }

    #[test]
    fn test_default_scenario_generation_zero_feasible() {
        let config = RosterConfig::default().with_population_size(32).with_seed(7);
        let report = RosterSolver::new(config).unwrap().run(&mut Silent);
        let first = &report.population.generations()[0];
        assert!(first.chromosomes().iter().all(|c| c.is_feasible()));
        assert_eq!(report.termination(), TerminationReason::SingleSurvivor);
        assert_eq!(report.summaries().len(), 6);
    }

    #[test]
    fn test_swap_mutation_run() {
        let config = RosterConfig::default()
            .with_population_size(16)
            .with_seed(5)
            .with_crossover(0.7, crate::ga::CrossoverMethod::SingleBreakpoint)
            .with_mutation(0.5, crate::ga::MutationMethod::Swap);
        let report = RosterSolver::new(config).unwrap().run(&mut Silent);
        assert_eq!(report.population.total_chromosomes(), 31);
        assert!(report.best().is_some());
    }
}
