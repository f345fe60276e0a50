//! Search configuration.
//!
//! Deserializable from JSON; missing fields take their defaults, so a
//! document only needs the options it changes.
//!
//! ```
//! use u_roster::config::RosterConfig;
//! use u_roster::ga::MutationMethod;
//!
//! let config = RosterConfig::from_json(r#"{ "population_size": 64, "mutation_method": "swap" }"#).unwrap();
//! assert_eq!(config.population_size, 64);
//! assert_eq!(config.mutation_method, MutationMethod::Swap);
//! assert_eq!(config.employees, 30);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::RosterError;
use crate::ga::{CrossoverMethod, EvolutionParams, GeneticOperators, MutationMethod, RosterProblem};
use crate::models::StaffingRequirement;

/// Options recognized by the roster search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Size of generation 0 (default: 128).
    pub population_size: usize,
    /// Grid rows (default: 30).
    pub employees: usize,
    /// Planning horizon in days (default: 14).
    pub days: usize,
    /// Required headcount per shift per day-of-week.
    pub staffing: StaffingRequirement,
    /// Probability of column crossover (default: 1.0).
    pub crossover_probability: f64,
    /// Breakpoint strategy (default: multi-breakpoint).
    pub crossover_method: CrossoverMethod,
    /// Probability of mutating a child (default: 1.0).
    pub mutation_probability: f64,
    /// Mutation strategy (default: reversal).
    pub mutation_method: MutationMethod,
    /// Early-stop threshold on mean improvement; 0 disables (default: 0).
    pub min_generation_improvement: f64,
    /// Emit one line per chromosome (default: false).
    pub verbose: bool,
    /// Random seed; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            population_size: 128,
            employees: 30,
            days: 14,
            staffing: StaffingRequirement::default(),
            crossover_probability: 1.0,
            crossover_method: CrossoverMethod::MultiBreakpoint,
            mutation_probability: 1.0,
            mutation_method: MutationMethod::Reversal,
            min_generation_improvement: 0.0,
            verbose: false,
            seed: None,
        }
    }
}

impl RosterConfig {
    /// Parses a JSON document.
    pub fn from_json(json: &str) -> Result<Self, RosterError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the generation-0 size.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets grid dimensions.
    pub fn with_grid(mut self, employees: usize, days: usize) -> Self {
        self.employees = employees;
        self.days = days;
        self
    }

    /// Sets the staffing table.
    pub fn with_staffing(mut self, staffing: StaffingRequirement) -> Self {
        self.staffing = staffing;
        self
    }

    /// Sets crossover probability and method.
    pub fn with_crossover(mut self, probability: f64, method: CrossoverMethod) -> Self {
        self.crossover_probability = probability;
        self.crossover_method = method;
        self
    }

    /// Sets mutation probability and method.
    pub fn with_mutation(mut self, probability: f64, method: MutationMethod) -> Self {
        self.mutation_probability = probability;
        self.mutation_method = method;
        self
    }

    /// Sets the early-stop threshold.
    pub fn with_min_generation_improvement(mut self, threshold: f64) -> Self {
        self.min_generation_improvement = threshold;
        self
    }

    /// Enables per-chromosome output.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Problem definition with the standard soft rules.
    pub fn problem(&self) -> RosterProblem {
        RosterProblem::new(self.employees, self.days).with_staffing(self.staffing.clone())
    }

    /// Crossover and mutation settings.
    pub fn operators(&self) -> GeneticOperators {
        GeneticOperators::default()
            .with_crossover(self.crossover_probability, self.crossover_method)
            .with_mutation(self.mutation_probability, self.mutation_method)
    }

    /// Population-level parameters.
    pub fn evolution_params(&self) -> EvolutionParams {
        EvolutionParams {
            population_size: self.population_size,
            min_generation_improvement: self.min_generation_improvement,
            verbose: self.verbose,
        }
    }
}
