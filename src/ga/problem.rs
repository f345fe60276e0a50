//! Roster GA problem definition.
//!
//! Bundles the grid dimensions, staffing table and soft-rule registry,
//! and provides the two problem-specific steps of the GA:
//! - **Generation**: a random grid that meets every staffing requirement.
//! - **Evaluation**: hard feasibility plus soft penalty cost.
//!
//! Construction and evaluation are separate so either can be tested
//! on its own.

use rand::seq::index;
use rand::Rng;

use crate::constraints::{check_hard_constraints, HardReport, SoftConstraints, SoftReport};
use crate::models::{Grid, ShiftCode, StaffingRequirement};

/// Feasibility and cost of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// All staffing requirements met exactly.
    pub feasible: bool,
    /// Summed soft-constraint penalty.
    pub cost: u64,
}

/// GA problem definition for shift rostering.
///
/// # Example
/// ```
/// use u_roster::ga::RosterProblem;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let problem = RosterProblem::new(30, 14);
/// let mut rng = SmallRng::seed_from_u64(7);
/// let grid = problem.random_grid(&mut rng);
/// assert!(problem.evaluate(&grid).feasible);
/// ```
#[derive(Debug, Clone)]
pub struct RosterProblem {
    /// Number of employees (grid rows).
    pub employees: usize,
    /// Planning horizon in days (grid columns).
    pub days: usize,
    /// Required headcount table.
    pub staffing: StaffingRequirement,
    /// Soft-rule registry.
    pub soft: SoftConstraints,
}

impl RosterProblem {
    /// Creates a problem with the default staffing table and the standard rules.
    pub fn new(employees: usize, days: usize) -> Self {
        Self {
            employees,
            days,
            staffing: StaffingRequirement::default(),
            soft: SoftConstraints::standard(),
        }
    }

    /// Sets the staffing table.
    pub fn with_staffing(mut self, staffing: StaffingRequirement) -> Self {
        self.staffing = staffing;
        self
    }

    /// Sets the soft-rule registry.
    pub fn with_soft_constraints(mut self, soft: SoftConstraints) -> Self {
        self.soft = soft;
        self
    }

    /// Generates a random grid that satisfies the staffing table.
    ///
    /// For each day, the required number of employees per working shift is
    /// drawn without replacement; everyone else is OFF. If a day requires
    /// more people than exist, only the first `employees` slots are filled
    /// (configuration validation rejects such tables up front).
    pub fn random_grid<R: Rng>(&self, rng: &mut R) -> Grid {
        let mut grid = Grid::new(self.employees, self.days);
        for day in 0..self.days {
            let required = self.staffing.for_day(day);
            let total = required
                .iter()
                .map(|&n| u64::from(n))
                .sum::<u64>()
                .min(self.employees as u64) as usize;
            let mut picked = index::sample(rng, self.employees, total).into_iter();

            for (shift, &count) in ShiftCode::WORKING.iter().zip(required.iter()) {
                let count = usize::try_from(count).unwrap_or(usize::MAX);
                for employee in picked.by_ref().take(count) {
                    grid.set(employee, day, *shift);
                }
            }
        }
        grid
    }

    /// Runs the hard-constraint check.
    pub fn check_hard(&self, grid: &Grid) -> HardReport {
        check_hard_constraints(grid, &self.staffing)
    }

    /// Runs every soft rule and keeps the breakdown.
    pub fn check_soft(&self, grid: &Grid) -> SoftReport {
        self.soft.evaluate(grid)
    }

    /// Evaluates feasibility and cost.
    pub fn evaluate(&self, grid: &Grid) -> Evaluation {
        Evaluation {
            feasible: self.check_hard(grid).is_feasible(),
            cost: self.soft.cost(grid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_grid_dimensions() {
        let problem = RosterProblem::new(30, 14);
        let mut rng = SmallRng::seed_from_u64(42);
        let grid = problem.random_grid(&mut rng);
        assert_eq!(grid.employees(), 30);
        assert_eq!(grid.days(), 14);
    }

    #[test]
    fn test_random_grid_meets_staffing_exactly() {
        let problem = RosterProblem::new(30, 14);
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..20 {
            let grid = problem.random_grid(&mut rng);
            for day in 0..grid.days() {
                let tally = grid.tally(day);
                for shift in ShiftCode::WORKING {
                    assert_eq!(
                        tally[shift.index()],
                        problem.staffing.required(shift, day),
                        "day {day}, shift {shift}"
                    );
                }
            }
            assert!(problem.check_hard(&grid).is_feasible());
        }
    }

    #[test]
    fn test_random_grid_fully_staffed_day() {
        // every employee must work every day
        let problem = RosterProblem::new(3, 7)
            .with_staffing(StaffingRequirement::new([[1; 7], [1; 7], [1; 7]]));
        let mut rng = SmallRng::seed_from_u64(42);
        let grid = problem.random_grid(&mut rng);
        assert!(grid.rows().flatten().all(|s| s.is_work()));
        assert!(problem.evaluate(&grid).feasible);
    }

    #[test]
    fn test_random_grid_oversubscribed_day_is_clamped() {
        let problem = RosterProblem::new(4, 7)
            .with_staffing(StaffingRequirement::new([[u32::MAX; 7], [1; 7], [0; 7]]));
        let mut rng = SmallRng::seed_from_u64(3);
        let grid = problem.random_grid(&mut rng);
        assert!(grid.rows().flatten().all(|s| *s == ShiftCode::Morning));
        assert!(!problem.evaluate(&grid).feasible);
    }

    #[test]
    fn test_check_soft_breakdown_matches_cost() {
        let problem = RosterProblem::new(30, 14);
        let grid = problem.random_grid(&mut SmallRng::seed_from_u64(11));
        let report = problem.check_soft(&grid);
        assert_eq!(report.rules.len(), problem.soft.len());
        assert_eq!(report.total(), problem.evaluate(&grid).cost);
        assert_eq!(report.total(), report.fired().map(|r| r.cost).sum::<u64>());
    }

    #[test]
    fn test_random_grids_differ() {
        let problem = RosterProblem::new(30, 14);
        let mut rng = SmallRng::seed_from_u64(42);
        let a = problem.random_grid(&mut rng);
        let b = problem.random_grid(&mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_same_seed_same_grid() {
        let problem = RosterProblem::new(30, 14);
        let a = problem.random_grid(&mut SmallRng::seed_from_u64(9));
        let b = problem.random_grid(&mut SmallRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_evaluate_is_orthogonal() {
        let problem = RosterProblem::new(2, 3)
            .with_staffing(StaffingRequirement::new([[1; 7], [0; 7], [0; 7]]));
        // infeasible (nobody works day 1) yet OFF-heavy rows cost little
        let grid = Grid::parse(&["M..", "..M"]).unwrap();
        let eval = problem.evaluate(&grid);
        assert!(!eval.feasible);
        assert_eq!(eval.cost, 0);
    }
}
