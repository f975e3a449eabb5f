//! Time-slot generation.
//!
//! Every shift is divided into fixed 20-minute slots. Slot start times are
//! derived from the shift's start hour alone, so generation is pure and
//! total: the same shift always yields the same sequence. The night shift
//! wraps past midnight (23:00 ... 06:40).

use crate::models::{Shift, TimeOfDay};

/// Length of one rotation slot.
pub const SLOT_DURATION_MINUTES: u32 = 20;

/// Length of one shift.
pub const SHIFT_DURATION_HOURS: u32 = 8;

/// Slots per shift: 8h of 20-minute slots = 24.
pub const SLOTS_PER_SHIFT: usize = (SHIFT_DURATION_HOURS * 60 / SLOT_DURATION_MINUTES) as usize;

/// Ordered slot start times for a shift.
pub fn shift_slots(shift: Shift) -> Vec<TimeOfDay> {
    let start = TimeOfDay::new(shift.start_hour(), 0);
    (0..SLOTS_PER_SHIFT)
        .map(|i| start.plus_minutes(i as u32 * SLOT_DURATION_MINUTES))
        .collect()
}

/// End of the slot beginning at `start`, one slot duration later.
#[inline]
pub fn slot_end(start: TimeOfDay) -> TimeOfDay {
    start.plus_minutes(SLOT_DURATION_MINUTES)
}

/// End of a shift's final slot.
pub fn shift_end(shift: Shift) -> TimeOfDay {
    TimeOfDay::new(shift.start_hour(), 0).plus_minutes(SHIFT_DURATION_HOURS * 60)
}
