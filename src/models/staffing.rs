//! Staffing requirement table.
//!
//! Required headcount per working shift type per day-of-week. The table
//! repeats every seven days across the planning horizon.

use serde::{Deserialize, Serialize};

use super::grid::{day_of_week, DAYS_PER_WEEK};
use super::{ShiftCode, WORKING_SHIFT_COUNT};

/// Required headcount `required[shift][day_of_week]`.
///
/// Rows follow [`ShiftCode::WORKING`] (MORNING, AFTERNOON, NIGHT),
/// columns run Monday..Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingRequirement {
    /// Headcount table.
    pub required: [[u32; DAYS_PER_WEEK]; WORKING_SHIFT_COUNT],
}

impl Default for StaffingRequirement {
    fn default() -> Self {
        Self {
            required: [
                [10, 10, 5, 5, 5, 5, 5],
                [10, 10, 10, 5, 10, 5, 5],
                [5, 5, 5, 5, 5, 5, 5],
            ],
        }
    }
}

impl StaffingRequirement {
    /// Creates a requirement table.
    pub fn new(required: [[u32; DAYS_PER_WEEK]; WORKING_SHIFT_COUNT]) -> Self {
        Self { required }
    }

    /// Required headcount of a shift on a horizon day. OFF is never required.
    pub fn required(&self, shift: ShiftCode, day: usize) -> u32 {
        shift
            .working_index()
            .map_or(0, |row| self.required[row][day_of_week(day)])
    }

    /// Required headcount per working shift on a horizon day.
    pub fn for_day(&self, day: usize) -> [u32; WORKING_SHIFT_COUNT] {
        let dow = day_of_week(day);
        let mut out = [0; WORKING_SHIFT_COUNT];
        for (slot, row) in out.iter_mut().zip(self.required.iter()) {
            *slot = row[dow];
        }
        out
    }

    /// Total working headcount on a day-of-week.
    ///
    /// Summed in `u64` so a table of `u32::MAX` entries cannot wrap.
    pub fn daily_total(&self, dow: usize) -> u64 {
        self.required
            .iter()
            .map(|row| u64::from(row[dow % DAYS_PER_WEEK]))
            .sum()
    }

    /// Largest daily total over the week.
    pub fn max_daily_total(&self) -> u64 {
        (0..DAYS_PER_WEEK)
            .map(|d| self.daily_total(d))
            .max()
            .unwrap_or(0)
    }

    /// Whether every day can be staffed with `employees` people.
    pub fn is_satisfiable(&self, employees: usize) -> bool {
        self.max_daily_total() <= employees as u64
    }
}
