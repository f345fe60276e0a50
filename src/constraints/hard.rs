//! Hard constraint: exact per-day, per-shift headcount.
//!
//! A grid is feasible iff on every day, for every working shift type,
//! the number of employees holding that shift equals the requirement
//! for the day's day-of-week. Every day is checked so the report lists
//! all mismatches, not just the first.

use serde::{Deserialize, Serialize};

use crate::models::{Grid, ShiftCode, StaffingRequirement};

/// One day/shift cell where the headcount differs from the requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingMismatch {
    /// Horizon day index.
    pub day: usize,
    /// Working shift type.
    pub shift: ShiftCode,
    /// Required headcount.
    pub required: u32,
    /// Assigned headcount.
    pub actual: u32,
}

/// Result of a hard-constraint check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardReport {
    /// All mismatches, ordered by day then shift.
    pub mismatches: Vec<StaffingMismatch>,
}

impl HardReport {
    /// Whether the grid satisfies every staffing requirement.
    #[inline]
    pub fn is_feasible(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Checks a grid's headcounts against the staffing table.
pub fn check_hard_constraints(grid: &Grid, staffing: &StaffingRequirement) -> HardReport {
    let mut mismatches = Vec::new();
    for day in 0..grid.days() {
        let tally = grid.tally(day);
        for shift in ShiftCode::WORKING {
            let required = staffing.required(shift, day);
            let actual = tally[shift.index()];
            if actual != required {
                mismatches.push(StaffingMismatch {
                    day,
                    shift,
                    required,
                    actual,
                });
            }
        }
    }
    HardReport { mismatches }
}
