//! Built-in soft rules.
//!
//! # Categories
//!
//! - **Workload**: MAX_HOURS, MAX_CONSECUTIVE_WORKDAYS, MAX_CONSECUTIVE_NIGHTS
//! - **Sequence**: NIGHT_MORNING, AFTERNOON_MORNING, NIGHT_AFTERNOON
//! - **Rest**: REST_AFTER_NIGHTS, REST_AFTER_WORKDAYS
//! - **Pattern**: ISOLATED_WORKDAY, ISOLATED_DAY_OFF, WORKED_WEEKENDS
//!
//! Every rule scans each employee row independently; a grid's violation
//! count is the sum over rows.

use super::SoftRule;
use crate::models::{day_of_week, Grid, ShiftCode, SATURDAY, SUNDAY};

/// Which days count towards a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    /// Any non-OFF shift.
    Work,
    /// NIGHT shifts only.
    Night,
}

impl RunKind {
    #[inline]
    fn matches(self, shift: ShiftCode) -> bool {
        match self {
            RunKind::Work => shift.is_work(),
            RunKind::Night => shift == ShiftCode::Night,
        }
    }
}

fn per_row(grid: &Grid, count: impl Fn(&[ShiftCode]) -> u64) -> u64 {
    grid.rows().map(count).sum()
}

// ======================== Workload rules ========================

/// Total hours over the horizon above a cap.
///
/// One violation per employee whose summed shift hours exceed `max_hours`.
#[derive(Debug, Clone, Copy)]
pub struct MaxWorkHours {
    /// Hour cap (inclusive).
    pub max_hours: u32,
    /// Penalty per employee over the cap.
    pub penalty: u64,
}

impl Default for MaxWorkHours {
    fn default() -> Self {
        Self {
            max_hours: 70,
            penalty: 1000,
        }
    }
}

impl SoftRule for MaxWorkHours {
    fn name(&self) -> &'static str {
        "MAX_HOURS"
    }

    fn penalty(&self) -> u64 {
        self.penalty
    }

    fn violations(&self, grid: &Grid) -> u64 {
        per_row(grid, |row| {
            let hours: u32 = row.iter().map(|s| s.hours()).sum();
            u64::from(hours > self.max_hours)
        })
    }

    fn description(&self) -> &'static str {
        "Maximum total work hours"
    }
}

/// Counts capped runs.
///
/// The counter is checked before the current day is looked at: once it
/// exceeds `max`, one violation is charged, the counter drops to 0 and
/// that day is skipped. A run still open on the last day is never charged.
fn capped_runs(row: &[ShiftCode], kind: RunKind, max: u32) -> u64 {
    let mut run = 0u32;
    let mut violations = 0;
    for &shift in row {
        if run > max {
            violations += 1;
            run = 0;
        } else if kind.matches(shift) {
            run += 1;
        } else {
            run = 0;
        }
    }
    violations
}

/// More than `max_days` consecutive working days.
#[derive(Debug, Clone, Copy)]
pub struct MaxConsecutiveWorkdays {
    /// Longest allowed run of working days.
    pub max_days: u32,
    /// Penalty per violation.
    pub penalty: u64,
}

impl Default for MaxConsecutiveWorkdays {
    fn default() -> Self {
        Self {
            max_days: 7,
            penalty: 1000,
        }
    }
}

impl SoftRule for MaxConsecutiveWorkdays {
    fn name(&self) -> &'static str {
        "MAX_CONSECUTIVE_WORKDAYS"
    }

    fn penalty(&self) -> u64 {
        self.penalty
    }

    fn violations(&self, grid: &Grid) -> u64 {
        per_row(grid, |row| capped_runs(row, RunKind::Work, self.max_days))
    }

    fn description(&self) -> &'static str {
        "Maximum consecutive workdays"
    }
}

/// More than `max_nights` consecutive night shifts.
#[derive(Debug, Clone, Copy)]
pub struct MaxConsecutiveNights {
    /// Longest allowed run of nights.
    pub max_nights: u32,
    /// Penalty per violation.
    pub penalty: u64,
}

impl Default for MaxConsecutiveNights {
    fn default() -> Self {
        Self {
            max_nights: 4,
            penalty: 1000,
        }
    }
}

impl SoftRule for MaxConsecutiveNights {
    fn name(&self) -> &'static str {
        "MAX_CONSECUTIVE_NIGHTS"
    }

    fn penalty(&self) -> u64 {
        self.penalty
    }

    fn violations(&self, grid: &Grid) -> u64 {
        per_row(grid, |row| capped_runs(row, RunKind::Night, self.max_nights))
    }

    fn description(&self) -> &'static str {
        "Maximum consecutive night shifts"
    }
}

// ======================== Sequence rules ========================

/// A forbidden shift on day `d` followed by another on day `d + 1`.
#[derive(Debug, Clone, Copy)]
pub struct ForbiddenSequence {
    /// Shift on the first day.
    pub first: ShiftCode,
    /// Shift on the next day.
    pub second: ShiftCode,
    /// Penalty per occurrence.
    pub penalty: u64,
    name: &'static str,
}

impl ForbiddenSequence {
    /// Creates a sequence rule.
    pub fn new(name: &'static str, first: ShiftCode, second: ShiftCode, penalty: u64) -> Self {
        Self {
            first,
            second,
            penalty,
            name,
        }
    }

    /// NIGHT then MORNING (1000).
    pub fn night_morning() -> Self {
        Self::new("NIGHT_MORNING", ShiftCode::Night, ShiftCode::Morning, 1000)
    }

    /// AFTERNOON then MORNING (800).
    pub fn afternoon_morning() -> Self {
        Self::new(
            "AFTERNOON_MORNING",
            ShiftCode::Afternoon,
            ShiftCode::Morning,
            800,
        )
    }

    /// NIGHT then AFTERNOON (800).
    pub fn night_afternoon() -> Self {
        Self::new(
            "NIGHT_AFTERNOON",
            ShiftCode::Night,
            ShiftCode::Afternoon,
            800,
        )
    }
}

impl SoftRule for ForbiddenSequence {
    fn name(&self) -> &'static str {
        self.name
    }

    fn penalty(&self) -> u64 {
        self.penalty
    }

    fn violations(&self, grid: &Grid) -> u64 {
        per_row(grid, |row| {
            row.windows(2)
                .filter(|w| w[0] == self.first && w[1] == self.second)
                .count() as u64
        })
    }

    fn description(&self) -> &'static str {
        "Forbidden shift sequence"
    }
}

// ======================== Rest rules ========================

/// Missing rest after a long run.
///
/// Every window of `run_length` days that matches `kind` entirely, and is
/// followed by `rest_days` days of which at least one is worked, counts
/// once. Overlapping windows are counted independently, so a long run can
/// be charged several times. Windows whose rest days fall past the horizon
/// are not evaluated.
#[derive(Debug, Clone, Copy)]
pub struct RestAfterRun {
    /// Which days form the run.
    pub kind: RunKind,
    /// Run length that requires rest.
    pub run_length: usize,
    /// Required days off after the run.
    pub rest_days: usize,
    /// Penalty per window.
    pub penalty: u64,
}

impl RestAfterRun {
    /// Two days off after four nights (100).
    pub fn after_nights() -> Self {
        Self {
            kind: RunKind::Night,
            run_length: 4,
            rest_days: 2,
            penalty: 100,
        }
    }

    /// Two days off after seven workdays (100).
    pub fn after_workdays() -> Self {
        Self {
            kind: RunKind::Work,
            run_length: 7,
            rest_days: 2,
            penalty: 100,
        }
    }
}

impl SoftRule for RestAfterRun {
    fn name(&self) -> &'static str {
        match self.kind {
            RunKind::Night => "REST_AFTER_NIGHTS",
            RunKind::Work => "REST_AFTER_WORKDAYS",
        }
    }

    fn penalty(&self) -> u64 {
        self.penalty
    }

    fn violations(&self, grid: &Grid) -> u64 {
        let span = self.run_length + self.rest_days;
        per_row(grid, |row| {
            row.windows(span)
                .filter(|w| {
                    let (run, rest) = w.split_at(self.run_length);
                    run.iter().all(|&s| self.kind.matches(s)) && rest.iter().any(|s| s.is_work())
                })
                .count() as u64
        })
    }

    fn description(&self) -> &'static str {
        "Rest days after a long run"
    }
}

// ======================== Pattern rules ========================

/// A single working day between two days off.
#[derive(Debug, Clone, Copy)]
pub struct IsolatedWorkday {
    /// Penalty per occurrence.
    pub penalty: u64,
}

impl Default for IsolatedWorkday {
    fn default() -> Self {
        Self { penalty: 1 }
    }
}

impl SoftRule for IsolatedWorkday {
    fn name(&self) -> &'static str {
        "ISOLATED_WORKDAY"
    }

    fn penalty(&self) -> u64 {
        self.penalty
    }

    fn violations(&self, grid: &Grid) -> u64 {
        per_row(grid, |row| {
            row.windows(3)
                .filter(|w| !w[0].is_work() && w[1].is_work() && !w[2].is_work())
                .count() as u64
        })
    }

    fn description(&self) -> &'static str {
        "OFF-WORK-OFF pattern"
    }
}

/// A single day off between two working days.
#[derive(Debug, Clone, Copy)]
pub struct IsolatedDayOff {
    /// Penalty per occurrence.
    pub penalty: u64,
}

impl Default for IsolatedDayOff {
    fn default() -> Self {
        Self { penalty: 1 }
    }
}

impl SoftRule for IsolatedDayOff {
    fn name(&self) -> &'static str {
        "ISOLATED_DAY_OFF"
    }

    fn penalty(&self) -> u64 {
        self.penalty
    }

    fn violations(&self, grid: &Grid) -> u64 {
        per_row(grid, |row| {
            row.windows(3)
                .filter(|w| w[0].is_work() && !w[1].is_work() && w[2].is_work())
                .count() as u64
        })
    }

    fn description(&self) -> &'static str {
        "WORK-OFF-WORK pattern"
    }
}

/// Worked weekends beyond an allowance.
///
/// A weekend is worked when both its Saturday and Sunday are non-OFF.
/// Each worked weekend past `max_weekends` is one violation.
#[derive(Debug, Clone, Copy)]
pub struct WorkedWeekends {
    /// Allowed worked weekends per employee.
    pub max_weekends: u64,
    /// Penalty per excess weekend.
    pub penalty: u64,
}

impl Default for WorkedWeekends {
    fn default() -> Self {
        Self {
            max_weekends: 1,
            penalty: 1,
        }
    }
}

impl SoftRule for WorkedWeekends {
    fn name(&self) -> &'static str {
        "WORKED_WEEKENDS"
    }

    fn penalty(&self) -> u64 {
        self.penalty
    }

    fn violations(&self, grid: &Grid) -> u64 {
        per_row(grid, |row| {
            let worked = row
                .windows(2)
                .enumerate()
                .filter(|(day, w)| {
                    day_of_week(*day) == SATURDAY
                        && day_of_week(day + 1) == SUNDAY
                        && w[0].is_work()
                        && w[1].is_work()
                })
                .count() as u64;
            worked.saturating_sub(self.max_weekends)
        })
    }

    fn description(&self) -> &'static str {
        "Maximum worked weekends"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(lines: &[&str]) -> Grid {
        Grid::parse(lines).unwrap()
    }

    #[test]
    fn test_max_hours() {
        let rule = MaxWorkHours::default();
        // 7 nights = 70 h: at the cap, not over
        assert_eq!(rule.violations(&grid(&["NNNNNNN......."])), 0);
        // 7 nights + 1 morning = 78 h
        assert_eq!(rule.violations(&grid(&["NNNNNNNM......"])), 1);
        // one violation per employee, not per excess hour
        assert_eq!(
            rule.violations(&grid(&["MMMMMMMMMMMMMM", "NNNNNNNNNNNNNN", ".............."])),
            2
        );
    }

    #[test]
    fn test_max_consecutive_workdays_resets_after_charge() {
        let rule = MaxConsecutiveWorkdays::default();
        // exactly 7: allowed
        assert_eq!(rule.violations(&grid(&["MMMMMMM......."])), 0);
        // 8 then the check fires on the following day
        assert_eq!(rule.violations(&grid(&["MMMMMMMM......"])), 1);
        // 14 in a row: charged once on day 8, then counter restarts and
        // the remaining 5 days never reach the cap
        assert_eq!(rule.violations(&grid(&["MMMMMMMMMMMMMM"])), 1);
    }

    #[test]
    fn test_max_consecutive_workdays_ignores_open_run_at_horizon_end() {
        let rule = MaxConsecutiveWorkdays::default();
        // 8 workdays ending on the last day: never charged
        assert_eq!(rule.violations(&grid(&["......MMMMMMMM"])), 0);
    }

    #[test]
    fn test_max_consecutive_nights() {
        let rule = MaxConsecutiveNights::default();
        assert_eq!(rule.violations(&grid(&["NNNN.........."])), 0);
        assert_eq!(rule.violations(&grid(&["NNNNN........."])), 1);
        // mornings break the night run
        assert_eq!(rule.violations(&grid(&["NNNMNNN......."])), 0);
    }

    #[test]
    fn test_forbidden_sequences() {
        let g = grid(&["NMAMNA.N"]);
        assert_eq!(ForbiddenSequence::night_morning().violations(&g), 1);
        assert_eq!(ForbiddenSequence::afternoon_morning().violations(&g), 1);
        assert_eq!(ForbiddenSequence::night_afternoon().violations(&g), 1);
        // no wrap-around across rows or horizon end
        let g = grid(&["...N", "M..."]);
        assert_eq!(ForbiddenSequence::night_morning().violations(&g), 0);
    }

    #[test]
    fn test_rest_after_nights_counts_each_window() {
        let rule = RestAfterRun::after_nights();
        // 4 nights, 2 days off
        assert_eq!(rule.violations(&grid(&["NNNN.........."])), 0);
        // 4 nights then a morning
        assert_eq!(rule.violations(&grid(&["NNNNM........."])), 1);
        // 5 nights then work: windows at 0 and 1 both fire
        assert_eq!(rule.violations(&grid(&["NNNNNM........"])), 2);
        // rest days past the horizon are not evaluated
        assert_eq!(rule.violations(&grid(&["..........NNNN"])), 0);
    }

    #[test]
    fn test_rest_after_workdays() {
        let rule = RestAfterRun::after_workdays();
        assert_eq!(rule.violations(&grid(&["MMMMMMM......."])), 0);
        assert_eq!(rule.violations(&grid(&["MMMMMMM.M....."])), 1);
        // 14 workdays: windows 0..=5 each fire
        assert_eq!(rule.violations(&grid(&["MMMMMMMMMMMMMM"])), 6);
    }

    #[test]
    fn test_isolated_patterns() {
        let work = IsolatedWorkday::default();
        let off = IsolatedDayOff::default();
        assert_eq!(work.violations(&grid(&[".M."])), 1);
        assert_eq!(off.violations(&grid(&[".M."])), 0);
        assert_eq!(off.violations(&grid(&["M.N"])), 1);
        assert_eq!(work.violations(&grid(&["M.N"])), 0);
        // alternating: M.M.M has two WORK-OFF-WORK and one OFF-WORK-OFF
        assert_eq!(off.violations(&grid(&["M.M.M"])), 2);
        assert_eq!(work.violations(&grid(&["M.M.M"])), 1);
    }

    #[test]
    fn test_worked_weekends() {
        let rule = WorkedWeekends::default();
        assert_eq!(rule.violations(&grid(&[".....MM......."])), 0);
        assert_eq!(rule.violations(&grid(&[".....MM.....MM"])), 1);
        // Saturday only does not count
        assert_eq!(rule.violations(&grid(&[".....M......MM"])), 0);
        // Sunday + Monday is not a weekend
        assert_eq!(rule.violations(&grid(&["......MM....MM"])), 0);
        assert_eq!(rule.violations(&grid(&[".....MM.....MM.....MM"])), 2);
    }

    #[test]
    fn test_cost_multiplies_penalty() {
        let rule = ForbiddenSequence::afternoon_morning();
        assert_eq!(rule.cost(&grid(&["AMAM"])), 1600);
    }
}
