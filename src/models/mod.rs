//! Roster domain models.
//!
//! | Type | Role |
//! |------|------|
//! | `ShiftCode` | One cell: OFF, MORNING, AFTERNOON, NIGHT |
//! | `Grid` | Employee × day matrix of shift codes |
//! | `StaffingRequirement` | Required headcount per shift per day-of-week |

mod grid;
mod shift;
mod staffing;

pub use grid::{day_of_week, Grid, DAYS_PER_WEEK, SATURDAY, SUNDAY};
pub use shift::{ShiftCode, SHIFT_CODE_COUNT, WORKING_SHIFT_COUNT};
pub use staffing::StaffingRequirement;
