//! Rotation domain models.
//!
//! Core data types for the casino floor: the roster entities the
//! scheduler consumes (`Presenter`, `Table`), the timetable it produces
//! (`RotationSlot`, `ShiftSchedule`, `DailySchedule`), and the dashboard
//! accounts the store seeds (`User`).
//!
//! All entities are plain serde-friendly values. The scheduler treats
//! them as an immutable snapshot for the duration of one generation.

mod presenter;
mod schedule;
mod table;
mod time;
mod user;

pub use presenter::{Presenter, Shift};
pub use schedule::{Assignment, DailySchedule, RotationSlot, ShiftSchedule};
pub use table::Table;
pub use time::TimeOfDay;
pub use user::{Role, User};
