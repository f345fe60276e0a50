//! GA-based roster search.
//!
//! # Encoding
//!
//! A chromosome's genotype is the roster grid itself (employee × day).
//! Day-columns are the unit of inheritance: crossover copies whole
//! columns, mutation permutes cells inside a column.
//!
//! # Submodules
//!
//! - [`operators`]: Runtime-selectable crossover and mutation strategies
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization and Machine Learning"

mod chromosome;
pub mod operators;
mod population;
mod problem;
mod selection;

pub use chromosome::{improvement_over_parents, Chromosome};
pub use operators::{CrossoverMethod, GeneticOperators, MutationMethod};
pub use population::{EvolutionParams, Generation, Population, TerminationReason};
pub use problem::{Evaluation, RosterProblem};
pub use selection::{roulette_select, selection_weights};
