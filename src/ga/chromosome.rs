//! Roster chromosome.
//!
//! A chromosome is one candidate roster plus its identity and evaluation.
//! It is built exactly once, either randomly (generation 0) or by breeding
//! two parents (crossover, then mutation), and evaluated right after.
//! Nothing is recomputed afterwards.
//!
//! Lower cost = better roster (minimization convention).

use rand::Rng;

use super::operators::GeneticOperators;
use super::problem::{Evaluation, RosterProblem};
use crate::models::Grid;

/// An evaluated candidate roster.
#[derive(Debug, Clone)]
pub struct Chromosome {
    id: usize,
    generation: usize,
    grid: Grid,
    feasible: bool,
    cost: u64,
    improvement: Option<f64>,
}

impl Chromosome {
    /// Creates a random, staffing-feasible generation-0 chromosome.
    pub fn random<R: Rng>(id: usize, problem: &RosterProblem, rng: &mut R) -> Self {
        let grid = problem.random_grid(rng);
        let evaluation = problem.evaluate(&grid);
        Self::from_parts(id, 0, grid, evaluation, None)
    }

    /// Breeds a child from two parents.
    ///
    /// The parents are only borrowed for the duration of the call; the
    /// child keeps no link to them.
    pub fn bred<R: Rng>(
        id: usize,
        generation: usize,
        parents: (&Chromosome, &Chromosome),
        problem: &RosterProblem,
        operators: &GeneticOperators,
        rng: &mut R,
    ) -> Self {
        let (a, b) = parents;
        let mut grid = operators.crossover(&a.grid, &b.grid, rng);
        operators.mutate(&mut grid, rng);
        let evaluation = problem.evaluate(&grid);
        let improvement = improvement_over_parents(a.cost, b.cost, evaluation.cost);
        Self::from_parts(id, generation, grid, evaluation, Some(improvement))
    }

    /// Assembles a chromosome from an already evaluated grid.
    pub fn from_parts(
        id: usize,
        generation: usize,
        grid: Grid,
        evaluation: Evaluation,
        improvement: Option<f64>,
    ) -> Self {
        Self {
            id,
            generation,
            grid,
            feasible: evaluation.feasible,
            cost: evaluation.cost,
            improvement,
        }
    }

    /// Identity, unique within a population.
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Index of the generation this chromosome belongs to.
    #[inline]
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Roster grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Whether every staffing requirement is met.
    #[inline]
    pub fn is_feasible(&self) -> bool {
        self.feasible
    }

    /// Soft-constraint penalty.
    #[inline]
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Relative cost reduction versus the parents' mean cost.
    ///
    /// `None` for generation-0 chromosomes.
    #[inline]
    pub fn improvement(&self) -> Option<f64> {
        self.improvement
    }
}

/// `(mean(parent costs) - child cost) / mean(parent costs)`.
///
/// Defined as 0.0 when both parents cost nothing.
pub fn improvement_over_parents(parent_a: u64, parent_b: u64, child: u64) -> f64 {
    let mean = (parent_a as f64 + parent_b as f64) / 2.0;
    if mean == 0.0 {
        return 0.0;
    }
    (mean - child as f64) / mean
}
