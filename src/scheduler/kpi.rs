//! Rotation quality metrics.
//!
//! Computes summary indicators from a generated [`ShiftSchedule`]:
//! how many presenters and slots it covers, how many tables stayed in the
//! rotation, and how break time is distributed across presenters.

use std::collections::HashMap;

use crate::models::ShiftSchedule;

/// Summary indicators for one shift's rotation grid.
#[derive(Debug, Clone, Default)]
pub struct RotationKpi {
    /// Number of presenter rows.
    pub presenter_count: usize,
    /// Slots per row.
    pub slot_count: usize,
    /// Distinct tables appearing in the rotation.
    pub tables_in_rotation: usize,
    /// Fewest break slots any presenter received.
    pub min_breaks: usize,
    /// Most break slots any presenter received.
    pub max_breaks: usize,
    /// Fraction of all cells that are breaks (0.0..1.0).
    pub break_share: f64,
    /// Break slots per presenter ID.
    pub breaks_by_presenter: HashMap<String, usize>,
}

impl RotationKpi {
    /// Computes KPIs from a shift schedule.
    pub fn calculate(schedule: &ShiftSchedule) -> Self {
        if schedule.is_empty() {
            return Self::default();
        }

        let mut breaks_by_presenter = HashMap::new();
        let mut total_breaks = 0usize;
        let mut min_breaks = usize::MAX;
        let mut max_breaks = 0usize;

        for (row_index, row) in schedule.rows.iter().enumerate() {
            let breaks = schedule.break_count(row_index);
            total_breaks += breaks;
            min_breaks = min_breaks.min(breaks);
            max_breaks = max_breaks.max(breaks);
            if let Some(slot) = row.first() {
                breaks_by_presenter.insert(slot.presenter_id.clone(), breaks);
            }
        }

        let cells = schedule.presenter_count() * schedule.slot_count();
        let break_share = if cells == 0 {
            0.0
        } else {
            total_breaks as f64 / cells as f64
        };

        Self {
            presenter_count: schedule.presenter_count(),
            slot_count: schedule.slot_count(),
            tables_in_rotation: schedule.tables_in_rotation().len(),
            min_breaks,
            max_breaks,
            break_share,
            breaks_by_presenter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Presenter, Shift, Table};
    use crate::scheduler::RotationScheduler;

    fn generated(presenter_count: usize, table_numbers: &[u32]) -> ShiftSchedule {
        let presenters: Vec<Presenter> = (1..=presenter_count)
            .map(|i| Presenter::new(format!("P{i}"), Shift::Morning))
            .collect();
        let tables: Vec<Table> = table_numbers
            .iter()
            .map(|&n| Table::new(format!("T{n}"), n))
            .collect();
        RotationScheduler::new()
            .shift_schedule(&presenters, &tables, Shift::Morning)
            .unwrap()
    }

    #[test]
    fn test_kpi_shape() {
        let kpi = RotationKpi::calculate(&generated(4, &[1, 2, 3]));
        assert_eq!(kpi.presenter_count, 4);
        assert_eq!(kpi.slot_count, 24);
        assert_eq!(kpi.tables_in_rotation, 3);
        assert_eq!(kpi.breaks_by_presenter.len(), 4);
    }

    #[test]
    fn test_kpi_break_distribution() {
        // 4 presenters, cycle length 4, 24 slots: exactly 6 breaks each
        let kpi = RotationKpi::calculate(&generated(4, &[1, 2, 3]));
        assert_eq!(kpi.min_breaks, 6);
        assert_eq!(kpi.max_breaks, 6);
        assert!((kpi.break_share - 0.25).abs() < 1e-10);
        assert_eq!(kpi.breaks_by_presenter["P1"], 6);
    }

    #[test]
    fn test_kpi_empty_schedule() {
        let kpi = RotationKpi::calculate(&ShiftSchedule::new());
        assert_eq!(kpi.presenter_count, 0);
        assert_eq!(kpi.min_breaks, 0);
        assert_eq!(kpi.break_share, 0.0);
    }
}
