//! Rotation scheduling for live casino floors.
//!
//! Given a roster of game presenters grouped by shift and a set of active
//! tables, produces a fair, gap-free, break-guaranteed rotation timetable
//! for each of the three daily shifts. Scheduling is a pure function of
//! its inputs; persistence and UI belong to the hosting dashboard.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Presenter`, `Table`, `Shift`,
//!   `RotationSlot`, `ShiftSchedule`, `DailySchedule`
//! - **`scheduler`**: The three-stage pipeline — time slots, capacity
//!   resolution, round-robin assignment — plus rotation KPIs
//! - **`store`**: Injected key-value persistence with a seeded `Roster`
//!   facade
//! - **`validation`**: Roster integrity checks for defensive callers
//!
//! # Example
//!
//! ```
//! use casino_rotation::scheduler::RotationScheduler;
//! use casino_rotation::store::Roster;
//!
//! let roster = Roster::in_memory().unwrap();
//! let outcome = roster.daily_schedule(&RotationScheduler::new()).unwrap();
//! assert!(outcome.is_complete());
//! ```

pub mod models;
pub mod scheduler;
pub mod store;
pub mod validation;
