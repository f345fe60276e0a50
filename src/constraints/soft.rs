//! Soft-constraint registry.
//!
//! A [`SoftRule`] counts violation instances on a grid; the registry
//! multiplies each count by the rule's penalty and sums the results in
//! registration order.

use std::fmt::Debug;
use std::sync::Arc;

use serde::Serialize;

use super::rules;
use crate::models::Grid;

/// A scheduling-quality rule.
///
/// # Cost Convention
/// `violations` returns the number of distinct violation instances over
/// the whole grid; the charged cost is `violations × penalty`.
pub trait SoftRule: Send + Sync + Debug {
    /// Short rule name (e.g., "MAX_HOURS").
    fn name(&self) -> &'static str;

    /// Penalty charged per violation instance.
    fn penalty(&self) -> u64;

    /// Counts violation instances on the grid.
    fn violations(&self, grid: &Grid) -> u64;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }

    /// Cost contribution of this rule.
    fn cost(&self, grid: &Grid) -> u64 {
        self.violations(grid) * self.penalty()
    }
}

/// Cost contributed by one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleCost {
    /// Rule name.
    pub rule: &'static str,
    /// Violation instances.
    pub violations: u64,
    /// `violations × penalty`.
    pub cost: u64,
}

/// Per-rule breakdown of a soft-constraint evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SoftReport {
    /// One entry per registered rule, in registration order.
    pub rules: Vec<RuleCost>,
}

impl SoftReport {
    /// Total cost.
    pub fn total(&self) -> u64 {
        self.rules.iter().map(|r| r.cost).sum()
    }

    /// Rules that fired at least once.
    pub fn fired(&self) -> impl Iterator<Item = &RuleCost> + '_ {
        self.rules.iter().filter(|r| r.violations > 0)
    }
}

/// Ordered list of soft rules.
///
/// # Example
/// ```
/// use u_roster::constraints::{rules, SoftConstraints};
/// use u_roster::models::Grid;
///
/// let soft = SoftConstraints::new().with_rule(rules::WorkedWeekends::default());
/// assert_eq!(soft.cost(&Grid::new(3, 14)), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SoftConstraints {
    rules: Vec<Arc<dyn SoftRule>>,
}

impl SoftConstraints {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The eleven standard rostering rules.
    ///
    /// | # | Rule | Penalty |
    /// |---|------|---------|
    /// | 1 | total hours > 70 | 1000 |
    /// | 2 | > 7 consecutive workdays | 1000 |
    /// | 3 | > 4 consecutive nights | 1000 |
    /// | 4 | NIGHT → MORNING | 1000 |
    /// | 5 | AFTERNOON → MORNING | 800 |
    /// | 6 | NIGHT → AFTERNOON | 800 |
    /// | 7 | no 2 days rest after 4 nights | 100 |
    /// | 8 | no 2 days rest after 7 workdays | 100 |
    /// | 9 | OFF-WORK-OFF | 1 |
    /// | 10 | WORK-OFF-WORK | 1 |
    /// | 11 | more than one worked weekend | 1 |
    pub fn standard() -> Self {
        Self::new()
            .with_rule(rules::MaxWorkHours::default())
            .with_rule(rules::MaxConsecutiveWorkdays::default())
            .with_rule(rules::MaxConsecutiveNights::default())
            .with_rule(rules::ForbiddenSequence::night_morning())
            .with_rule(rules::ForbiddenSequence::afternoon_morning())
            .with_rule(rules::ForbiddenSequence::night_afternoon())
            .with_rule(rules::RestAfterRun::after_nights())
            .with_rule(rules::RestAfterRun::after_workdays())
            .with_rule(rules::IsolatedWorkday::default())
            .with_rule(rules::IsolatedDayOff::default())
            .with_rule(rules::WorkedWeekends::default())
    }

    /// Appends a rule.
    pub fn with_rule<R: SoftRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Registered rules.
    pub fn rules(&self) -> &[Arc<dyn SoftRule>] {
        &self.rules
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Total penalty cost of a grid.
    pub fn cost(&self, grid: &Grid) -> u64 {
        self.rules.iter().map(|r| r.cost(grid)).sum()
    }

    /// Evaluates every rule and keeps the breakdown.
    pub fn evaluate(&self, grid: &Grid) -> SoftReport {
        let rules = self
            .rules
            .iter()
            .map(|rule| {
                let violations = rule.violations(grid);
                RuleCost {
                    rule: rule.name(),
                    violations,
                    cost: violations * rule.penalty(),
                }
            })
            .collect();
        SoftReport { rules }
    }
}
