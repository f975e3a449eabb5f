//! Round-robin rotation engine.
//!
//! # Algorithm
//!
//! 1. Filter presenters to the target shift and drop inactive entities.
//! 2. Resolve the table subset in rotation ([`capacity`](super::capacity)).
//! 3. For presenter `i` at slot `s`, compute `position = (i + s) mod C`
//!    where `C = tables-in-rotation + 1`. Positions below the table count
//!    map to that table; the last position is the break.
//!
//! Over any `C` consecutive slots each presenter visits every table
//! position exactly once and takes exactly one break, and for a fixed slot
//! no two presenters land on the same table as long as the presenter count
//! does not exceed `C`. With more than `C` presenters the mapping is no
//! longer injective per slot and presenters share tables; the engine keeps
//! that behavior rather than guessing an overflow policy (see
//! `test_overflow_presenters_share_tables`).
//!
//! # Complexity
//! O(presenters × slots); pure, no state across calls.

use thiserror::Error;

use crate::models::{
    Assignment, DailySchedule, Presenter, RotationSlot, Shift, ShiftSchedule, Table,
};

use super::capacity::{self, CapacityPolicy};
use super::slots;

/// Failure to generate a rotation for one shift.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotationError {
    /// Strict policy: fewer eligible presenters than active tables.
    #[error("not enough presenters for the {shift} shift: need at least {required}, have {available}")]
    InsufficientPresenters {
        /// Shift that could not be staffed.
        shift: Shift,
        /// Active table count for the shift.
        required: usize,
        /// Eligible presenter count.
        available: usize,
    },
}

/// Per-shift results of one daily generation.
///
/// Every shift is attempted independently, so a strict-mode failure in one
/// shift neither blocks the other two nor masquerades as an empty grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyOutcome {
    /// Morning shift result.
    pub morning: Result<ShiftSchedule, RotationError>,
    /// Afternoon shift result.
    pub afternoon: Result<ShiftSchedule, RotationError>,
    /// Night shift result.
    pub night: Result<ShiftSchedule, RotationError>,
}

impl DailyOutcome {
    /// Returns the result for a given shift.
    pub fn get(&self, shift: Shift) -> &Result<ShiftSchedule, RotationError> {
        match shift {
            Shift::Morning => &self.morning,
            Shift::Afternoon => &self.afternoon,
            Shift::Night => &self.night,
        }
    }

    /// Whether every shift generated a schedule.
    pub fn is_complete(&self) -> bool {
        self.morning.is_ok() && self.afternoon.is_ok() && self.night.is_ok()
    }

    /// Collapses into a [`DailySchedule`], surfacing the first failure.
    ///
    /// Infallible under [`CapacityPolicy::Graceful`].
    pub fn into_schedule(self) -> Result<DailySchedule, RotationError> {
        Ok(DailySchedule {
            morning: self.morning?,
            afternoon: self.afternoon?,
            night: self.night?,
        })
    }
}

/// Generates rotation timetables for shifts.
///
/// The scheduler is a pure value: it holds only the capacity policy, reads
/// its inputs as an immutable snapshot, and allocates fresh output per
/// call. Identical inputs always produce identical grids.
///
/// # Example
///
/// ```
/// use casino_rotation::models::{Presenter, Shift, Table};
/// use casino_rotation::scheduler::RotationScheduler;
///
/// let presenters = vec![
///     Presenter::new("P1", Shift::Morning).with_name("John"),
///     Presenter::new("P2", Shift::Morning).with_name("Jane"),
/// ];
/// let tables = vec![Table::new("T1", 1).with_name("Blackjack")];
///
/// let schedule = RotationScheduler::new()
///     .shift_schedule(&presenters, &tables, Shift::Morning)
///     .unwrap();
/// assert_eq!(schedule.presenter_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RotationScheduler {
    policy: CapacityPolicy,
}

impl RotationScheduler {
    /// Creates a scheduler with the graceful capacity policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the capacity policy.
    pub fn with_policy(mut self, policy: CapacityPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Generates the rotation grid for one shift.
    ///
    /// Presenters not on `shift` and inactive presenters/tables are
    /// ignored. Zero eligible presenters or zero active tables yields an
    /// empty schedule, never an error. Under [`CapacityPolicy::Strict`] a
    /// non-zero presenter count below the active table count is refused.
    pub fn shift_schedule(
        &self,
        presenters: &[Presenter],
        tables: &[Table],
        shift: Shift,
    ) -> Result<ShiftSchedule, RotationError> {
        let on_shift: Vec<&Presenter> =
            presenters.iter().filter(|p| p.is_on_shift(shift)).collect();
        let active_tables: Vec<Table> = tables.iter().filter(|t| t.active).cloned().collect();

        if on_shift.is_empty() || active_tables.is_empty() {
            log::debug!("no eligible presenters or tables for {shift} shift");
            return Ok(ShiftSchedule::new());
        }

        if self.policy == CapacityPolicy::Strict && on_shift.len() < active_tables.len() {
            return Err(RotationError::InsufficientPresenters {
                shift,
                required: active_tables.len(),
                available: on_shift.len(),
            });
        }

        let rotation = capacity::tables_in_rotation(on_shift.len(), &active_tables);
        let cycle = rotation.len() + 1;
        let starts = slots::shift_slots(shift);

        let mut rows = Vec::with_capacity(on_shift.len());
        for (i, presenter) in on_shift.iter().enumerate() {
            let mut row = Vec::with_capacity(starts.len());
            for (s, &start) in starts.iter().enumerate() {
                let position = (i + s) % cycle;
                let assignment = match rotation.get(position) {
                    Some(table) => Assignment::Table(table.number),
                    None => Assignment::Break,
                };
                row.push(RotationSlot {
                    time: start,
                    end_time: slots::slot_end(start),
                    presenter_id: presenter.id.clone(),
                    presenter_name: presenter.name.clone(),
                    assignment,
                });
            }
            rows.push(row);
        }

        Ok(ShiftSchedule::from_rows(rows))
    }

    /// Generates all three shifts of one day, each independently.
    pub fn daily_schedule(&self, presenters: &[Presenter], tables: &[Table]) -> DailyOutcome {
        DailyOutcome {
            morning: self.shift_schedule(presenters, tables, Shift::Morning),
            afternoon: self.shift_schedule(presenters, tables, Shift::Afternoon),
            night: self.shift_schedule(presenters, tables, Shift::Night),
        }
    }
}
