//! Rotation schedule (output) model.
//!
//! A shift schedule is a presenter-major grid: one row per eligible
//! presenter, one column per 20-minute slot, each cell holding either a
//! table assignment or a break. A daily schedule is exactly three such
//! grids, one per shift.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::{Shift, TimeOfDay};

/// What a presenter does during one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Assignment {
    /// Staffing the table with this floor number.
    Table(u32),
    /// Off the floor.
    Break,
}

impl Assignment {
    /// Whether this is a break slot.
    #[inline]
    pub fn is_break(self) -> bool {
        matches!(self, Assignment::Break)
    }

    /// The assigned table number, if any.
    #[inline]
    pub fn table_number(self) -> Option<u32> {
        match self {
            Assignment::Table(n) => Some(n),
            Assignment::Break => None,
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assignment::Table(n) => write!(f, "Table {n}"),
            Assignment::Break => f.write_str("Break"),
        }
    }
}

/// One presenter's assignment for one time slot.
///
/// The interval is half-open: [time, end_time). Presenter identity is
/// denormalized into every cell so a single row renders without lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationSlot {
    /// Slot start (inclusive).
    pub time: TimeOfDay,
    /// Slot end (exclusive).
    pub end_time: TimeOfDay,
    /// Assigned presenter ID.
    pub presenter_id: String,
    /// Assigned presenter name.
    pub presenter_name: String,
    /// Table or break.
    pub assignment: Assignment,
}

/// A complete rotation grid for one shift.
///
/// Rows are ordered by the eligible-presenter order the scheduler was
/// given; every row has the same number of slots. An empty schedule
/// (no rows) means there was nothing to rotate, not that generation failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShiftSchedule {
    /// Presenter-major grid: `rows[presenter][slot]`.
    pub rows: Vec<Vec<RotationSlot>>,
}

impl ShiftSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a schedule from a presenter-major grid.
    pub fn from_rows(rows: Vec<Vec<RotationSlot>>) -> Self {
        Self { rows }
    }

    /// Whether the schedule has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of presenter rows.
    pub fn presenter_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of slots per row (0 for an empty schedule).
    pub fn slot_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Finds the row for a given presenter.
    pub fn row_for(&self, presenter_id: &str) -> Option<&[RotationSlot]> {
        self.rows
            .iter()
            .find(|row| row.first().is_some_and(|slot| slot.presenter_id == presenter_id))
            .map(Vec::as_slice)
    }

    /// Table numbers staffed at a given slot index, across all rows.
    pub fn tables_at(&self, slot_index: usize) -> BTreeSet<u32> {
        self.rows
            .iter()
            .filter_map(|row| row.get(slot_index))
            .filter_map(|slot| slot.assignment.table_number())
            .collect()
    }

    /// Every table number that appears anywhere in the grid.
    pub fn tables_in_rotation(&self) -> BTreeSet<u32> {
        self.rows
            .iter()
            .flatten()
            .filter_map(|slot| slot.assignment.table_number())
            .collect()
    }

    /// Number of break slots in a row.
    pub fn break_count(&self, row_index: usize) -> usize {
        self.rows.get(row_index).map_or(0, |row| {
            row.iter().filter(|slot| slot.assignment.is_break()).count()
        })
    }
}

/// One day of rotations: all three shifts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySchedule {
    /// The 07:00 shift.
    pub morning: ShiftSchedule,
    /// The 15:00 shift.
    pub afternoon: ShiftSchedule,
    /// The 23:00 shift.
    pub night: ShiftSchedule,
}

impl DailySchedule {
    /// Returns the grid for a given shift.
    pub fn get(&self, shift: Shift) -> &ShiftSchedule {
        match shift {
            Shift::Morning => &self.morning,
            Shift::Afternoon => &self.afternoon,
            Shift::Night => &self.night,
        }
    }
}
