//! Table model.
//!
//! A live game table on the casino floor. The table number doubles as the
//! display label ("Table 3") and as the priority key when there are not
//! enough presenters to staff every table.

use serde::{Deserialize, Serialize};

/// A live game table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Unique table identifier.
    pub id: String,
    /// Game name (e.g. "Blackjack").
    pub name: String,
    /// Positive floor number. Lower numbers win when tables must be dropped
    /// from a rotation.
    pub number: u32,
    /// Whether the table currently takes part in rotations.
    pub active: bool,
}

impl Table {
    /// Creates an active table with the given ID and floor number.
    pub fn new(id: impl Into<String>, number: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            number,
            active: true,
        }
    }

    /// Sets the game name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Display label used in rotation grids.
    pub fn label(&self) -> String {
        format!("Table {}", self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_builder() {
        let t = Table::new("T1", 3).with_name("Poker");
        assert_eq!(t.id, "T1");
        assert_eq!(t.number, 3);
        assert_eq!(t.name, "Poker");
        assert!(t.active);
    }

    #[test]
    fn test_table_label() {
        assert_eq!(Table::new("T1", 7).label(), "Table 7");
    }

    #[test]
    fn test_inactive_table() {
        let t = Table::new("T1", 1).with_active(false);
        assert!(!t.active);
    }
}
