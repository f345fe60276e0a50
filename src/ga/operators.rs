//! Configurable genetic operators for roster grids.
//!
//! Provides runtime-selectable crossover and mutation strategies
//! via [`GeneticOperators`].
//!
//! # Column atomicity
//! Crossover copies whole day-columns from one parent, so the per-day
//! headcount of a feasible parent survives into the child. Mutation
//! permutes cells within a column and may break feasibility; it is
//! recorded on evaluation, never repaired.
//!
//! # Usage
//!
//! ```
//! use u_roster::ga::operators::{GeneticOperators, CrossoverMethod, MutationMethod};
//!
//! let ops = GeneticOperators::default();
//! assert_eq!(ops.crossover_method, CrossoverMethod::MultiBreakpoint);
//! assert_eq!(ops.mutation_method, MutationMethod::Reversal);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Grid;

/// Probability that a day is a breakpoint under [`CrossoverMethod::MultiBreakpoint`].
pub const BREAKPOINT_PROBABILITY: f64 = 0.25;

/// Employees per allowed swap under [`MutationMethod::Swap`].
pub const EMPLOYEES_PER_SWAP: usize = 15;

/// Breakpoint strategy for column crossover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossoverMethod {
    /// Exactly one breakpoint in `[1, days - 1]`.
    SingleBreakpoint,
    /// Each day is a breakpoint with probability 0.25.
    MultiBreakpoint,
}

/// Perturbation strategy for a child grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationMethod {
    /// Per day, `0..=employees / 15` swaps of two random employees.
    Swap,
    /// Per day, reverse the employee order.
    Reversal,
}

/// Runtime-selectable genetic operators for roster grids.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneticOperators {
    /// Probability of column crossover (otherwise a parent is cloned).
    pub crossover_probability: f64,
    /// Breakpoint strategy.
    pub crossover_method: CrossoverMethod,
    /// Probability of applying mutation to a child.
    pub mutation_probability: f64,
    /// Mutation strategy.
    pub mutation_method: MutationMethod,
}

impl Default for GeneticOperators {
    fn default() -> Self {
        Self {
            crossover_probability: 1.0,
            crossover_method: CrossoverMethod::MultiBreakpoint,
            mutation_probability: 1.0,
            mutation_method: MutationMethod::Reversal,
        }
    }
}

impl GeneticOperators {
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

    /// Builds a child grid from two parents.
    ///
    /// With probability `crossover_probability` the child alternates
    /// between parents at breakpoints; otherwise it clones a parent chosen
    /// uniformly at random. Probabilities must lie in `[0, 1]`.
    pub fn crossover<R: Rng>(&self, a: &Grid, b: &Grid, rng: &mut R) -> Grid {
        if !rng.random_bool(self.crossover_probability) {
            return if rng.random_bool(0.5) { a.clone() } else { b.clone() };
        }
        let breakpoints = match self.crossover_method {
            CrossoverMethod::SingleBreakpoint => single_breakpoint(a.days(), rng),
            CrossoverMethod::MultiBreakpoint => multi_breakpoints(a.days(), rng),
        };
        column_crossover(a, b, &breakpoints, rng.random_bool(0.5))
    }

    /// Mutates a child grid in place with probability `mutation_probability`.
    pub fn mutate<R: Rng>(&self, grid: &mut Grid, rng: &mut R) {
        if !rng.random_bool(self.mutation_probability) {
            return;
        }
        match self.mutation_method {
            MutationMethod::Swap => swap_mutation(grid, rng),
            MutationMethod::Reversal => reversal_mutation(grid),
        }
    }
}

// ======================== Crossover ========================

/// One breakpoint in `[1, days - 1]`; none if the horizon is a single day.
fn single_breakpoint<R: Rng>(days: usize, rng: &mut R) -> Vec<bool> {
    let mut points = vec![false; days];
    if days >= 2 {
        points[rng.random_range(1..days)] = true;
    }
    points
}

/// Each day independently with probability [`BREAKPOINT_PROBABILITY`].
fn multi_breakpoints<R: Rng>(days: usize, rng: &mut R) -> Vec<bool> {
    (0..days)
        .map(|_| rng.random_bool(BREAKPOINT_PROBABILITY))
        .collect()
}

/// Copies whole day-columns from the active parent, switching parent at
/// every breakpoint day (before copying that day).
///
/// `start_with_a` picks the parent active at day 0.
pub fn column_crossover(a: &Grid, b: &Grid, breakpoints: &[bool], start_with_a: bool) -> Grid {
    let mut child = Grid::new(a.employees(), a.days());
    let mut use_a = start_with_a;
    for day in 0..a.days() {
        if breakpoints.get(day).copied().unwrap_or(false) {
            use_a = !use_a;
        }
        let source = if use_a { a } else { b };
        child.copy_column_from(source, day);
    }
    child
}

// ======================== Mutation ========================

/// Per day, a random number of swaps between two random employees.
pub fn swap_mutation<R: Rng>(grid: &mut Grid, rng: &mut R) {
    let employees = grid.employees();
    if employees == 0 {
        return;
    }
    let max_swaps = employees / EMPLOYEES_PER_SWAP;
    for day in 0..grid.days() {
        let swaps = rng.random_range(0..=max_swaps);
        for _ in 0..swaps {
            let i = rng.random_range(0..employees);
            let j = rng.random_range(0..employees);
            grid.swap_in_column(day, i, j);
        }
    }
}

/// Reverses the employee order in every day-column.
pub fn reversal_mutation(grid: &mut Grid) {
    for day in 0..grid.days() {
        grid.reverse_column(day);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::RosterProblem;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn parents(rng: &mut SmallRng) -> (Grid, Grid) {
        let problem = RosterProblem::new(30, 14);
        (problem.random_grid(rng), problem.random_grid(rng))
    }

    fn column(grid: &Grid, day: usize) -> Vec<crate::models::ShiftCode> {
        grid.column(day).collect()
    }

    #[test]
    fn test_default_operators() {
        let ops = GeneticOperators::default();
        assert_eq!(ops.crossover_method, CrossoverMethod::MultiBreakpoint);
        assert_eq!(ops.mutation_method, MutationMethod::Reversal);
        assert_eq!(ops.crossover_probability, 1.0);
    }

    #[test]
    fn test_column_crossover_toggles_at_breakpoints() {
        let a = Grid::parse(&["MMMM", "MMMM"]).unwrap();
        let b = Grid::parse(&["NNNN", "NNNN"]).unwrap();
        let child = column_crossover(&a, &b, &[false, true, false, true], true);
        assert_eq!(child, Grid::parse(&["MNNM", "MNNM"]).unwrap());

        let child = column_crossover(&a, &b, &[true, false, false, false], true);
        assert_eq!(child, b);
    }

    #[test]
    fn test_crossover_columns_come_from_one_parent() {
        let mut rng = SmallRng::seed_from_u64(42);
        for method in [CrossoverMethod::SingleBreakpoint, CrossoverMethod::MultiBreakpoint] {
            let ops = GeneticOperators::default().with_crossover(1.0, method);
            for _ in 0..20 {
                let (a, b) = parents(&mut rng);
                let child = ops.crossover(&a, &b, &mut rng);
                for day in 0..child.days() {
                    let c = column(&child, day);
                    assert!(c == column(&a, day) || c == column(&b, day));
                }
            }
        }
    }

    #[test]
    fn test_single_breakpoint_mixes_both_parents() {
        let a = Grid::parse(&["MMMMMMM"]).unwrap();
        let b = Grid::parse(&["NNNNNNN"]).unwrap();
        let ops = GeneticOperators::default().with_crossover(1.0, CrossoverMethod::SingleBreakpoint);
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..20 {
            let child = ops.crossover(&a, &b, &mut rng);
            let row = child.row(0);
            // breakpoint in [1, days-1]: day 0 and the last day differ
            assert_ne!(row[0], row[6]);
        }
    }

    #[test]
    fn test_crossover_off_clones_a_parent() {
        let mut rng = SmallRng::seed_from_u64(42);
        let (a, b) = parents(&mut rng);
        let ops = GeneticOperators::default().with_crossover(0.0, CrossoverMethod::MultiBreakpoint);
        for _ in 0..10 {
            let child = ops.crossover(&a, &b, &mut rng);
            assert!(child == a || child == b);
        }
    }

    #[test]
    fn test_crossover_preserves_feasibility() {
        let problem = RosterProblem::new(30, 14);
        let ops = GeneticOperators::default();
        let mut rng = SmallRng::seed_from_u64(42);
        let (a, b) = parents(&mut rng);
        let child = ops.crossover(&a, &b, &mut rng);
        assert!(problem.evaluate(&child).feasible);
    }

    #[test]
    fn test_reversal_mutation() {
        let mut grid = Grid::parse(&["MA", "N.", ".M"]).unwrap();
        reversal_mutation(&mut grid);
        assert_eq!(grid, Grid::parse(&[".M", "N.", "MA"]).unwrap());
    }

    #[test]
    fn test_swap_mutation_keeps_column_multiset() {
        let problem = RosterProblem::new(30, 14);
        let mut rng = SmallRng::seed_from_u64(42);
        let original = problem.random_grid(&mut rng);
        let mut grid = original.clone();
        swap_mutation(&mut grid, &mut rng);
        for day in 0..grid.days() {
            assert_eq!(grid.tally(day), original.tally(day));
        }
    }

    #[test]
    fn test_swap_mutation_small_grid_is_identity() {
        // fewer than 15 employees: the swap count is always 0
        let problem = RosterProblem::new(14, 7)
            .with_staffing(crate::models::StaffingRequirement::new([[2; 7], [2; 7], [2; 7]]));
        let mut rng = SmallRng::seed_from_u64(42);
        let original = problem.random_grid(&mut rng);
        let mut grid = original.clone();
        swap_mutation(&mut grid, &mut rng);
        assert_eq!(grid, original);
    }

    #[test]
    fn test_mutation_probability_zero_is_identity() {
        let mut rng = SmallRng::seed_from_u64(42);
        let (a, _) = parents(&mut rng);
        let ops = GeneticOperators::default().with_mutation(0.0, MutationMethod::Reversal);
        let mut grid = a.clone();
        ops.mutate(&mut grid, &mut rng);
        assert_eq!(grid, a);
    }
}
