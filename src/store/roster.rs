//! Roster facade over an injected storage backend.
//!
//! Owns the keys under which presenters, tables and users live, seeds an
//! empty backend on open, reconciles stale collections, and offers the
//! entity operations the hosting dashboard needs. The scheduler never
//! touches storage; [`Roster::daily_schedule`] hands it a snapshot.

use uuid::Uuid;

use crate::models::{Presenter, Table, User};
use crate::scheduler::{DailyOutcome, RotationScheduler};

use super::seed;
use super::storage::{self, MemoryStorage, Storage, StoreError};

/// Key for the presenter collection.
pub const PRESENTERS_KEY: &str = "casino-rotation-presenters";
/// Key for the table collection.
pub const TABLES_KEY: &str = "casino-rotation-tables";
/// Key for the user collection.
pub const USERS_KEY: &str = "casino-rotation-users";

/// The persistent roster: presenters, tables and dashboard users.
pub struct Roster {
    storage: Box<dyn Storage>,
}

impl Roster {
    /// Opens a roster over the given backend.
    ///
    /// Absent collections are seeded; present ones are reconciled against
    /// the seed shape (see [`storage::reconcile`]).
    pub fn open(storage: Box<dyn Storage>) -> Result<Self, StoreError> {
        let mut roster = Self { storage };

        let presenters = seed::initial_presenters();
        let tables = seed::initial_tables();
        let users = seed::initial_users();

        let seeded = storage::initialize(roster.storage.as_mut(), PRESENTERS_KEY, &presenters)?
            | storage::initialize(roster.storage.as_mut(), TABLES_KEY, &tables)?
            | storage::initialize(roster.storage.as_mut(), USERS_KEY, &users)?;
        if seeded {
            log::debug!("seeded empty roster backend");
        }

        storage::reconcile(roster.storage.as_mut(), PRESENTERS_KEY, &presenters)?;
        storage::reconcile(roster.storage.as_mut(), TABLES_KEY, &tables)?;

        Ok(roster)
    }

    /// Opens a roster over a fresh in-memory backend.
    pub fn in_memory() -> Result<Self, StoreError> {
        Self::open(Box::new(MemoryStorage::new()))
    }

    /// All presenters on the roster.
    pub fn presenters(&self) -> Result<Vec<Presenter>, StoreError> {
        Ok(storage::get_item(self.storage.as_ref(), PRESENTERS_KEY)?.unwrap_or_default())
    }

    /// All tables on the floor.
    pub fn tables(&self) -> Result<Vec<Table>, StoreError> {
        Ok(storage::get_item(self.storage.as_ref(), TABLES_KEY)?.unwrap_or_default())
    }

    /// All dashboard users.
    pub fn users(&self) -> Result<Vec<User>, StoreError> {
        Ok(storage::get_item(self.storage.as_ref(), USERS_KEY)?.unwrap_or_default())
    }

    /// Finds a presenter by ID.
    pub fn presenter(&self, id: &str) -> Result<Option<Presenter>, StoreError> {
        Ok(self.presenters()?.into_iter().find(|p| p.id == id))
    }

    /// Finds a table by ID.
    pub fn table(&self, id: &str) -> Result<Option<Table>, StoreError> {
        Ok(self.tables()?.into_iter().find(|t| t.id == id))
    }

    /// Adds a presenter, minting a fresh ID.
    pub fn create_presenter(&mut self, mut presenter: Presenter) -> Result<Presenter, StoreError> {
        presenter.id = Uuid::new_v4().to_string();
        let mut all = self.presenters()?;
        all.push(presenter.clone());
        storage::set_item(self.storage.as_mut(), PRESENTERS_KEY, &all)?;
        log::debug!("created presenter '{}'", presenter.id);
        Ok(presenter)
    }

    /// Replaces the presenter with `updated.id`.
    pub fn update_presenter(&mut self, updated: &Presenter) -> Result<(), StoreError> {
        let mut all = self.presenters()?;
        let slot = all
            .iter_mut()
            .find(|p| p.id == updated.id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "presenter",
                id: updated.id.clone(),
            })?;
        *slot = updated.clone();
        storage::set_item(self.storage.as_mut(), PRESENTERS_KEY, &all)
    }

    /// Removes a presenter by ID.
    pub fn delete_presenter(&mut self, id: &str) -> Result<(), StoreError> {
        let mut all = self.presenters()?;
        let before = all.len();
        all.retain(|p| p.id != id);
        if all.len() == before {
            return Err(StoreError::NotFound {
                entity: "presenter",
                id: id.to_string(),
            });
        }
        storage::set_item(self.storage.as_mut(), PRESENTERS_KEY, &all)
    }

    /// Adds a table, minting a fresh ID.
    pub fn create_table(&mut self, mut table: Table) -> Result<Table, StoreError> {
        table.id = Uuid::new_v4().to_string();
        let mut all = self.tables()?;
        all.push(table.clone());
        storage::set_item(self.storage.as_mut(), TABLES_KEY, &all)?;
        log::debug!("created table '{}'", table.id);
        Ok(table)
    }

    /// Replaces the table with `updated.id`.
    pub fn update_table(&mut self, updated: &Table) -> Result<(), StoreError> {
        let mut all = self.tables()?;
        let slot = all
            .iter_mut()
            .find(|t| t.id == updated.id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "table",
                id: updated.id.clone(),
            })?;
        *slot = updated.clone();
        storage::set_item(self.storage.as_mut(), TABLES_KEY, &all)
    }

    /// Removes a table by ID.
    pub fn delete_table(&mut self, id: &str) -> Result<(), StoreError> {
        let mut all = self.tables()?;
        let before = all.len();
        all.retain(|t| t.id != id);
        if all.len() == before {
            return Err(StoreError::NotFound {
                entity: "table",
                id: id.to_string(),
            });
        }
        storage::set_item(self.storage.as_mut(), TABLES_KEY, &all)
    }

    /// Wipes the roster's collections from the backend.
    ///
    /// Only the roster's own keys are removed; anything else stored in the
    /// backend is left alone. The next [`Roster::open`] re-seeds.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.storage.remove(PRESENTERS_KEY)?;
        self.storage.remove(TABLES_KEY)?;
        self.storage.remove(USERS_KEY)?;
        log::debug!("cleared roster collections");
        Ok(())
    }

    /// Runs the scheduler over the current roster snapshot.
    pub fn daily_schedule(&self, scheduler: &RotationScheduler) -> Result<DailyOutcome, StoreError> {
        let presenters = self.presenters()?;
        let tables = self.tables()?;
        Ok(scheduler.daily_schedule(&presenters, &tables))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Shift;

    #[test]
    fn test_open_seeds_empty_backend() {
        let roster = Roster::in_memory().unwrap();
        assert_eq!(roster.presenters().unwrap().len(), 12);
        assert_eq!(roster.tables().unwrap().len(), 8);
        assert_eq!(roster.users().unwrap().len(), 3);
    }

    #[test]
    fn test_open_keeps_edited_data() {
        let mut roster = Roster::in_memory().unwrap();
        let mut presenter = roster.presenters().unwrap().remove(0);
        presenter.name = "Renamed".to_string();
        roster.update_presenter(&presenter).unwrap();

        // Reopen over the same backend: the collection shape matches the
        // seed, so reconciliation leaves the edit alone.
        let reopened = Roster::open(roster.storage).unwrap();
        let found = reopened.presenter(&presenter.id).unwrap();
        assert_eq!(found.unwrap().name, "Renamed");
    }

    #[test]
    fn test_create_mints_id() {
        let mut roster = Roster::in_memory().unwrap();
        let created = roster
            .create_presenter(Presenter::new("ignored", Shift::Morning))
            .unwrap();
        assert_ne!(created.id, "ignored");
        assert!(roster.presenter(&created.id).unwrap().is_some());
    }

    #[test]
    fn test_update_presenter() {
        let mut roster = Roster::in_memory().unwrap();
        let mut presenter = roster.presenters().unwrap().remove(0);
        presenter.active = false;

        roster.update_presenter(&presenter).unwrap();
        let stored = roster.presenter(&presenter.id).unwrap().unwrap();
        assert!(!stored.active);
    }

    #[test]
    fn test_update_missing_presenter() {
        let mut roster = Roster::in_memory().unwrap();
        let ghost = Presenter::new("no-such-id", Shift::Morning);
        let err = roster.update_presenter(&ghost).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { entity: "presenter", .. }));
    }

    #[test]
    fn test_delete_table() {
        let mut roster = Roster::in_memory().unwrap();
        let id = roster.tables().unwrap()[0].id.clone();

        roster.delete_table(&id).unwrap();
        assert_eq!(roster.tables().unwrap().len(), 7);
        assert!(roster.table(&id).unwrap().is_none());
        assert!(matches!(
            roster.delete_table(&id).unwrap_err(),
            StoreError::NotFound { entity: "table", .. }
        ));
    }

    #[test]
    fn test_clear_wipes_collections_only() {
        let mut roster = Roster::in_memory().unwrap();
        roster
            .storage
            .write("unrelated-key", "kept")
            .unwrap();

        roster.clear().unwrap();
        assert!(roster.presenters().unwrap().is_empty());
        assert!(roster.tables().unwrap().is_empty());
        assert!(roster.users().unwrap().is_empty());
        assert_eq!(
            roster.storage.read("unrelated-key").unwrap().as_deref(),
            Some("kept")
        );

        // Reopening a cleared backend seeds from scratch
        let reopened = Roster::open(roster.storage).unwrap();
        assert_eq!(reopened.presenters().unwrap().len(), 12);
    }

    #[test]
    fn test_daily_schedule_from_snapshot() {
        let roster = Roster::in_memory().unwrap();
        let outcome = roster.daily_schedule(&RotationScheduler::new()).unwrap();

        assert!(outcome.is_complete());
        // 4 seeded presenters per shift
        for shift in Shift::ALL {
            let schedule = outcome.get(shift).as_ref().unwrap();
            assert_eq!(schedule.presenter_count(), 4);
        }
    }
}
