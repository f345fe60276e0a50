//! Shift codes.
//!
//! Every roster cell holds exactly one of four codes. The three working
//! codes are also the rows of the staffing requirement table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of distinct shift codes (including OFF).
pub const SHIFT_CODE_COUNT: usize = 4;

/// Number of working shift types (MORNING, AFTERNOON, NIGHT).
pub const WORKING_SHIFT_COUNT: usize = 3;

/// Shift assigned to one employee on one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftCode {
    /// Day off.
    #[default]
    Off,
    /// Morning shift (8 h).
    Morning,
    /// Afternoon shift (8 h).
    Afternoon,
    /// Night shift (10 h).
    Night,
}

impl ShiftCode {
    /// All codes, ordered by [`ShiftCode::index`].
    pub const ALL: [ShiftCode; SHIFT_CODE_COUNT] = [
        ShiftCode::Off,
        ShiftCode::Morning,
        ShiftCode::Afternoon,
        ShiftCode::Night,
    ];

    /// Working codes, ordered like the rows of a staffing table.
    pub const WORKING: [ShiftCode; WORKING_SHIFT_COUNT] =
        [ShiftCode::Morning, ShiftCode::Afternoon, ShiftCode::Night];

    /// Dense index (OFF = 0, MORNING = 1, AFTERNOON = 2, NIGHT = 3).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            ShiftCode::Off => 0,
            ShiftCode::Morning => 1,
            ShiftCode::Afternoon => 2,
            ShiftCode::Night => 3,
        }
    }

    /// Row in the staffing table, `None` for OFF.
    #[inline]
    pub fn working_index(self) -> Option<usize> {
        self.index().checked_sub(1)
    }

    /// Paid hours of this shift.
    #[inline]
    pub fn hours(self) -> u32 {
        match self {
            ShiftCode::Off => 0,
            ShiftCode::Morning | ShiftCode::Afternoon => 8,
            ShiftCode::Night => 10,
        }
    }

    /// Whether this is a working shift.
    #[inline]
    pub fn is_work(self) -> bool {
        self != ShiftCode::Off
    }

    /// Single-character symbol used by the text grid format.
    pub fn symbol(self) -> char {
        match self {
            ShiftCode::Off => '.',
            ShiftCode::Morning => 'M',
            ShiftCode::Afternoon => 'A',
            ShiftCode::Night => 'N',
        }
    }

    /// Parses a grid symbol. Accepts `.`, `-`, `O` for OFF.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            '.' | '-' | 'O' => Some(ShiftCode::Off),
            'M' => Some(ShiftCode::Morning),
            'A' => Some(ShiftCode::Afternoon),
            'N' => Some(ShiftCode::Night),
            _ => None,
        }
    }
}

impl fmt::Display for ShiftCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShiftCode::Off => "OFF",
            ShiftCode::Morning => "MORNING",
            ShiftCode::Afternoon => "AFTERNOON",
            ShiftCode::Night => "NIGHT",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours() {
        assert_eq!(ShiftCode::Off.hours(), 0);
        assert_eq!(ShiftCode::Morning.hours(), 8);
        assert_eq!(ShiftCode::Afternoon.hours(), 8);
        assert_eq!(ShiftCode::Night.hours(), 10);
    }

    #[test]
    fn test_indices_are_dense() {
        for (i, code) in ShiftCode::ALL.iter().enumerate() {
            assert_eq!(code.index(), i);
        }
        assert_eq!(ShiftCode::Off.working_index(), None);
        assert_eq!(ShiftCode::Night.working_index(), Some(2));
    }

    #[test]
    fn test_symbols() {
        for code in ShiftCode::ALL {
            assert_eq!(ShiftCode::from_symbol(code.symbol()), Some(code));
        }
        assert_eq!(ShiftCode::from_symbol('n'), Some(ShiftCode::Night));
        assert_eq!(ShiftCode::from_symbol('x'), None);
    }
}
