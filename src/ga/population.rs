//! Generation manager.
//!
//! # Algorithm
//!
//! 1. Build generation 0: `population_size` random, feasible chromosomes.
//! 2. While the last generation holds at least two chromosomes, breed
//!    `floor(size / 2)` children into the next generation. Each child
//!    gets its own roulette-wheel parent pair.
//! 3. Stop when the new generation holds a single chromosome, or, with a
//!    positive improvement threshold, when its mean improvement over
//!    parents falls below the threshold.
//!
//! Generation sizes halve every round, so a run creates fewer than
//! `2 × population_size` chromosomes over at most `ceil(log2(population_size))`
//! breeding rounds. The population keeps every generation for reporting.

use log::{debug, trace};
use rand::Rng;

use super::chromosome::Chromosome;
use super::operators::GeneticOperators;
use super::problem::RosterProblem;
use super::selection::roulette_select;
use crate::report::{ChromosomeLine, CostSeries, GenerationSummary, RunObserver};

/// Search parameters that are not part of the problem or the operators.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionParams {
    /// Size of generation 0.
    pub population_size: usize,
    /// Early-stop threshold on mean improvement-over-parent; 0 disables it.
    pub min_generation_improvement: f64,
    /// Emit a `ChromosomeLine` for every chromosome.
    pub verbose: bool,
}

impl Default for EvolutionParams {
    fn default() -> Self {
        Self {
            population_size: 128,
            min_generation_improvement: 0.0,
            verbose: false,
        }
    }
}

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TerminationReason {
    /// Generation 0 had fewer than two chromosomes; nothing was bred.
    NoBreeding,
    /// The last generation holds exactly one chromosome.
    SingleSurvivor,
    /// Mean improvement of the last generation fell below the threshold.
    ImprovementBelowThreshold {
        /// Generation that triggered the stop.
        generation: usize,
        /// Its mean improvement-over-parent.
        average: f64,
    },
}

/// Chromosomes produced in one breeding round.
#[derive(Debug, Clone)]
pub struct Generation {
    index: usize,
    chromosomes: Vec<Chromosome>,
}

impl Generation {
    /// Creates an empty generation.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            chromosomes: Vec::new(),
        }
    }

    /// Appends a chromosome.
    pub fn push(&mut self, chromosome: Chromosome) {
        self.chromosomes.push(chromosome);
    }

    /// Generation index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Chromosomes in creation order.
    pub fn chromosomes(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    /// Number of chromosomes.
    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    /// Whether the generation is empty.
    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    /// Costs in creation order.
    pub fn costs(&self) -> Vec<u64> {
        self.chromosomes.iter().map(Chromosome::cost).collect()
    }

    /// Mean improvement-over-parent. `None` if no member was bred.
    pub fn average_improvement(&self) -> Option<f64> {
        let values: Vec<f64> = self
            .chromosomes
            .iter()
            .filter_map(Chromosome::improvement)
            .collect();
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Cost statistics.
    pub fn summary(&self) -> Option<GenerationSummary> {
        GenerationSummary::calculate(self.index, &self.chromosomes)
    }
}

/// Every generation of one search run.
#[derive(Debug, Clone)]
pub struct Population {
    generations: Vec<Generation>,
    termination: TerminationReason,
}

impl Population {
    /// Runs the search.
    ///
    /// Probabilities in `operators` must lie in `[0, 1]`; `RosterSolver`
    /// validates them before calling this.
    ///
    /// # Example
    /// ```
    /// use u_roster::ga::{EvolutionParams, GeneticOperators, Population, RosterProblem};
    /// use u_roster::report::Silent;
    /// use rand::SeedableRng;
    /// use rand::rngs::SmallRng;
    ///
    /// let problem = RosterProblem::new(30, 14);
    /// let params = EvolutionParams { population_size: 16, ..Default::default() };
    /// let mut rng = SmallRng::seed_from_u64(42);
    /// let pop = Population::evolve(
    ///     &problem,
    ///     &GeneticOperators::default(),
    ///     &params,
    ///     &mut Silent,
    ///     &mut rng,
    /// );
    /// assert_eq!(pop.generations().len(), 5);
    /// ```
    pub fn evolve<R, O>(
        problem: &RosterProblem,
        operators: &GeneticOperators,
        params: &EvolutionParams,
        observer: &mut O,
        rng: &mut R,
    ) -> Self
    where
        R: Rng,
        O: RunObserver + ?Sized,
    {
        let mut next_id = 0;
        let mut first = Generation::new(0);
        for _ in 0..params.population_size {
            let chromosome = Chromosome::random(next_id, problem, rng);
            next_id += 1;
            if params.verbose {
                observer.on_chromosome(&ChromosomeLine::from(&chromosome));
            }
            first.push(chromosome);
        }
        debug!("generation 0: {} chromosomes", first.len());

        let mut generations = vec![first];
        let termination = loop {
            let Some(current) = generations.last() else {
                break TerminationReason::NoBreeding;
            };
            if current.len() < 2 {
                break TerminationReason::NoBreeding;
            }

            let costs = current.costs();
            let mut next = Generation::new(current.index() + 1);
            for _ in 0..current.len() / 2 {
                let Some((i, j)) = roulette_select(&costs, rng) else {
                    break;
                };
                let (a, b) = (&current.chromosomes[i], &current.chromosomes[j]);
                trace!(
                    "generation {}: parents {} (cost {}) x {} (cost {})",
                    next.index(),
                    a.id(),
                    a.cost(),
                    b.id(),
                    b.cost()
                );
                let child = Chromosome::bred(next_id, next.index(), (a, b), problem, operators, rng);
                next_id += 1;
                if params.verbose {
                    observer.on_chromosome(&ChromosomeLine::from(&child));
                }
                next.push(child);
            }

            let index = next.index();
            let size = next.len();
            let average = next.average_improvement();
            debug!("generation {index}: {size} chromosomes bred");
            generations.push(next);

            if params.min_generation_improvement > 0.0 {
                if let Some(average) = average {
                    observer.on_generation_improvement(index, average);
                    if average < params.min_generation_improvement {
                        break TerminationReason::ImprovementBelowThreshold {
                            generation: index,
                            average,
                        };
                    }
                }
            }
            if size <= 1 {
                break TerminationReason::SingleSurvivor;
            }
        };
        debug!(
            "search stopped after {} generations: {termination:?}",
            generations.len()
        );

        let population = Self {
            generations,
            termination,
        };
        let summaries = population.summaries();
        for summary in &summaries {
            observer.on_generation(summary);
        }
        observer.on_finish(&CostSeries::from_summaries(&summaries));
        population
    }

    /// Generations in creation order.
    pub fn generations(&self) -> &[Generation] {
        &self.generations
    }

    /// Why the search stopped.
    pub fn termination(&self) -> TerminationReason {
        self.termination
    }

    /// Last generation produced.
    pub fn last_generation(&self) -> Option<&Generation> {
        self.generations.last()
    }

    /// Every chromosome ever created.
    pub fn chromosomes(&self) -> impl Iterator<Item = &Chromosome> + '_ {
        self.generations.iter().flat_map(|g| g.chromosomes.iter())
    }

    /// Total number of chromosomes.
    pub fn total_chromosomes(&self) -> usize {
        self.generations.iter().map(Generation::len).sum()
    }

    /// Lowest-cost chromosome, preferring staffing-feasible ones.
    pub fn best(&self) -> Option<&Chromosome> {
        self.chromosomes()
            .min_by_key(|c| (!c.is_feasible(), c.cost()))
    }

    /// Per-generation statistics (empty generations are skipped).
    pub fn summaries(&self) -> Vec<GenerationSummary> {
        self.generations.iter().filter_map(Generation::summary).collect()
    }

    /// Min/avg/max cost per generation.
    pub fn cost_series(&self) -> CostSeries {
        CostSeries::from_summaries(&self.summaries())
    }
}
