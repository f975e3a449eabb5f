//! Presenter model.
//!
//! Game presenters are the people rotated across live tables. Each
//! presenter belongs to exactly one of the three daily shifts and can be
//! deactivated without being removed from the roster.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three daily shifts.
///
/// Shifts are fixed 8-hour windows; each knows its wall-clock start hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    /// 07:00 – 15:00.
    Morning,
    /// 15:00 – 23:00.
    Afternoon,
    /// 23:00 – 07:00 (wraps past midnight).
    Night,
}

impl Shift {
    /// All shifts in daily order.
    pub const ALL: [Shift; 3] = [Shift::Morning, Shift::Afternoon, Shift::Night];

    /// Wall-clock hour at which the shift starts.
    #[inline]
    pub fn start_hour(self) -> u8 {
        match self {
            Shift::Morning => 7,
            Shift::Afternoon => 15,
            Shift::Night => 23,
        }
    }

    /// Lowercase shift name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Shift::Morning => "morning",
            Shift::Afternoon => "afternoon",
            Shift::Night => "night",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A game presenter on the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presenter {
    /// Unique presenter identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Shift this presenter works.
    pub shift: Shift,
    /// Whether the presenter currently takes part in rotations.
    pub active: bool,
}

impl Presenter {
    /// Creates an active presenter with the given ID and shift.
    pub fn new(id: impl Into<String>, shift: Shift) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            shift,
            active: true,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the contact phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Whether this presenter is eligible for a rotation on the given shift.
    #[inline]
    pub fn is_on_shift(&self, shift: Shift) -> bool {
        self.active && self.shift == shift
    }
}
