//! Capacity resolution.
//!
//! Decides which tables take part in a shift's rotation given how many
//! presenters are eligible. The rotation cycle is one slot longer than the
//! table set (the break slot), so with P presenters at most `P - 1` tables
//! can be staffed while still guaranteeing everyone a break. When tables
//! must be dropped, lower floor numbers win.

use crate::models::Table;

/// How the scheduler reacts when there are fewer presenters than tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CapacityPolicy {
    /// Shrink the rotation to `max(1, P - 1)` tables, lowest numbers first.
    #[default]
    Graceful,
    /// Refuse to generate, reporting the shortfall.
    Strict,
}

/// Resolves the ordered table subset for one shift's rotation.
///
/// - Zero presenters or zero tables: empty rotation.
/// - `P >= T`: every table, in the order given.
/// - `P < T`: the `max(1, P - 1)` lowest-numbered tables. The single-table
///   floor means one lone presenter still staffs one table, with no break
///   guaranteed.
pub fn tables_in_rotation(presenter_count: usize, tables: &[Table]) -> Vec<Table> {
    if presenter_count == 0 || tables.is_empty() {
        return Vec::new();
    }
    if presenter_count >= tables.len() {
        return tables.to_vec();
    }

    let mut by_number = tables.to_vec();
    by_number.sort_by_key(|t| t.number);
    let keep = (presenter_count - 1).max(1);
    by_number.truncate(keep);

    log::warn!(
        "rotation reduced to {} of {} tables for {} presenters",
        by_number.len(),
        tables.len(),
        presenter_count
    );
    by_number
}
