//! Roster persistence.
//!
//! The hosting dashboard treats a key-value store as its backend. This
//! module reimplements that as an injected [`Storage`] trait plus a typed
//! [`Roster`] facade with lazy seed-and-reconcile initialization, keeping
//! the scheduler itself storage-agnostic.

mod roster;
pub mod seed;
mod storage;

pub use roster::{Roster, PRESENTERS_KEY, TABLES_KEY, USERS_KEY};
pub use storage::{
    get_item, initialize, reconcile, set_item, MemoryStorage, Storage, StoreError,
};
