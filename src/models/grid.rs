//! Roster grid (employee × day matrix of shift codes).
//!
//! A grid is the genotype of the roster GA. Dimensions are fixed at
//! construction; operators only permute or copy cells.
//!
//! # Layout
//! Row-major: cell `(employee, day)` lives at `employee * days + day`.
//! Day-of-week is `day % 7` with day 0 a Monday.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ShiftCode;

/// Days in the repeating week.
pub const DAYS_PER_WEEK: usize = 7;

/// Day-of-week index of Saturday.
pub const SATURDAY: usize = 5;

/// Day-of-week index of Sunday.
pub const SUNDAY: usize = 6;

/// Day-of-week of a horizon day index.
#[inline]
pub fn day_of_week(day: usize) -> usize {
    day % DAYS_PER_WEEK
}

/// Employee × day matrix of shift codes.
///
/// Deserialization rejects documents whose cell count is not
/// `employees * days`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridRepr")]
pub struct Grid {
    employees: usize,
    days: usize,
    cells: Vec<ShiftCode>,
}

/// Unchecked wire form of [`Grid`].
#[derive(Deserialize)]
struct GridRepr {
    employees: usize,
    days: usize,
    cells: Vec<ShiftCode>,
}

impl TryFrom<GridRepr> for Grid {
    type Error = String;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        let expected = repr.employees.checked_mul(repr.days);
        if expected != Some(repr.cells.len()) {
            return Err(format!(
                "grid {} x {} needs {} cells, got {}",
                repr.employees,
                repr.days,
                expected.map_or_else(|| "overflowing".to_string(), |n| n.to_string()),
                repr.cells.len()
            ));
        }
        Ok(Self {
            employees: repr.employees,
            days: repr.days,
            cells: repr.cells,
        })
    }
}

impl Grid {
    /// Creates a grid with every cell OFF.
    pub fn new(employees: usize, days: usize) -> Self {
        Self {
            employees,
            days,
            cells: vec![ShiftCode::Off; employees * days],
        }
    }

    /// Builds a grid from rows (one per employee).
    ///
    /// Returns `None` if the rows have different lengths.
    pub fn from_rows(rows: Vec<Vec<ShiftCode>>) -> Option<Self> {
        let employees = rows.len();
        let days = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != days) {
            return None;
        }
        Some(Self {
            employees,
            days,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Parses the text format produced by `Display` (one line per employee).
    ///
    /// Whitespace inside a line is ignored. Returns `None` on an unknown
    /// symbol or ragged rows.
    pub fn parse(lines: &[&str]) -> Option<Self> {
        let rows = lines
            .iter()
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(ShiftCode::from_symbol)
                    .collect::<Option<Vec<_>>>()
            })
            .collect::<Option<Vec<_>>>()?;
        Self::from_rows(rows)
    }

    /// Number of employees (rows).
    #[inline]
    pub fn employees(&self) -> usize {
        self.employees
    }

    /// Number of days (columns).
    #[inline]
    pub fn days(&self) -> usize {
        self.days
    }

    #[inline]
    fn offset(&self, employee: usize, day: usize) -> usize {
        debug_assert!(employee < self.employees && day < self.days);
        employee * self.days + day
    }

    /// Shift of `employee` on `day`.
    #[inline]
    pub fn get(&self, employee: usize, day: usize) -> ShiftCode {
        self.cells[self.offset(employee, day)]
    }

    /// Sets the shift of `employee` on `day`.
    #[inline]
    pub fn set(&mut self, employee: usize, day: usize, shift: ShiftCode) {
        let idx = self.offset(employee, day);
        self.cells[idx] = shift;
    }

    /// All shifts of one employee across the horizon.
    #[inline]
    pub fn row(&self, employee: usize) -> &[ShiftCode] {
        let start = employee * self.days;
        &self.cells[start..start + self.days]
    }

    /// Iterates over employee rows.
    pub fn rows(&self) -> impl Iterator<Item = &[ShiftCode]> + '_ {
        // chunks_exact panics on 0; a grid without days has no cells either way.
        self.cells.chunks_exact(self.days.max(1))
    }

    /// Iterates over the shifts of one day (top to bottom).
    pub fn column(&self, day: usize) -> impl Iterator<Item = ShiftCode> + '_ {
        (0..self.employees).map(move |e| self.get(e, day))
    }

    /// Headcount per shift code on one day, indexed by [`ShiftCode::index`].
    pub fn tally(&self, day: usize) -> [u32; super::SHIFT_CODE_COUNT] {
        let mut counts = [0u32; super::SHIFT_CODE_COUNT];
        for shift in self.column(day) {
            counts[shift.index()] += 1;
        }
        counts
    }

    /// Copies one whole day-column from `other` (same dimensions).
    pub fn copy_column_from(&mut self, other: &Grid, day: usize) {
        debug_assert_eq!(self.employees, other.employees);
        for e in 0..self.employees {
            self.set(e, day, other.get(e, day));
        }
    }

    /// Swaps the shifts of two employees on one day.
    pub fn swap_in_column(&mut self, day: usize, a: usize, b: usize) {
        let ia = self.offset(a, day);
        let ib = self.offset(b, day);
        self.cells.swap(ia, ib);
    }

    /// Reverses the employee order within one day-column.
    pub fn reverse_column(&mut self, day: usize) {
        let n = self.employees;
        for e in 0..n / 2 {
            self.swap_in_column(day, e, n - 1 - e);
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in 0..self.employees {
            for shift in self.row(e) {
                write!(f, "{}", shift.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
