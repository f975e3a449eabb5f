//! Rotation generation pipeline.
//!
//! Three pure stages, run once per shift:
//!
//! 1. [`slots`] — the ordered 20-minute slot sequence for the shift.
//! 2. [`capacity`] — which tables take part, given presenter and table
//!    counts.
//! 3. [`rotation`] — the `(i + s) mod C` round-robin assignment producing
//!    the presenter-major grid.
//!
//! [`RotationKpi`] summarizes a generated grid (break distribution, table
//! coverage).

pub mod capacity;
mod kpi;
mod rotation;
pub mod slots;

pub use capacity::CapacityPolicy;
pub use kpi::RotationKpi;
pub use rotation::{DailyOutcome, RotationError, RotationScheduler};
pub use slots::{SHIFT_DURATION_HOURS, SLOTS_PER_SHIFT, SLOT_DURATION_MINUTES};
