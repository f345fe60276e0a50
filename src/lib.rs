//! Employee shift rostering for the U-Engine ecosystem.
//!
//! Searches for a low-penalty roster over a fixed planning horizon with a
//! genetic algorithm. Staffing headcounts are hard constraints; overtime,
//! rest, shift-sequence and weekend rules are soft constraints with
//! weighted penalties.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ShiftCode`, `Grid`, `StaffingRequirement`
//! - **`constraints`**: Hard staffing check and the soft-rule registry
//! - **`ga`**: Chromosome, operators, roulette selection, generation manager
//! - **`config`**: Serde-loadable search configuration
//! - **`validation`**: Configuration checks run before a search
//! - **`report`**: Per-chromosome and per-generation records, observers
//! - **`solver`**: Validated, seedable entry point
//!
//! # Example
//!
//! ```
//! use u_roster::config::RosterConfig;
//! use u_roster::report::Silent;
//! use u_roster::solver::RosterSolver;
//!
//! let config = RosterConfig::default().with_population_size(16).with_seed(1);
//! let report = RosterSolver::new(config).unwrap().run(&mut Silent);
//! let best = report.best().unwrap();
//! assert!(best.is_feasible());
//! ```
//!
//! # References
//!
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and Machine Learning"
//! - Burke et al. (2004), "The State of the Art of Nurse Rostering"

pub mod config;
pub mod constraints;
pub mod error;
pub mod ga;
pub mod models;
pub mod report;
pub mod solver;
pub mod validation;

pub use error::RosterError;
