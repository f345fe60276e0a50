//! Roster constraint evaluation.
//!
//! - **Hard**: exact staffing headcount per day and shift. Violations make
//!   a grid infeasible but add no cost.
//! - **Soft**: scheduling-quality rules. Each violation instance adds the
//!   rule's penalty to the cost. Rules are independent `grid → count`
//!   functions registered in a fixed order.
//!
//! Cost and feasibility are orthogonal: an infeasible grid may cost 0,
//! a feasible one may cost thousands.

mod hard;
pub mod rules;
mod soft;

pub use hard::{check_hard_constraints, HardReport, StaffingMismatch};
pub use soft::{RuleCost, SoftConstraints, SoftReport, SoftRule};
