//! Initial roster data.
//!
//! Seeds written into an empty backend the first time a
//! [`Roster`](super::Roster) opens it: a full floor of tables, presenters
//! spread across all three shifts, and the three dashboard accounts.

use uuid::Uuid;

use crate::models::{Presenter, Role, Shift, Table, User};

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// The seed table floor.
pub fn initial_tables() -> Vec<Table> {
    let games = [
        "Blackjack",
        "Roulettes",
        "Poker",
        "Craps",
        "Bacarrat",
        "Pai Gow Poker",
        "Bagamon",
        "Bridge",
    ];
    games
        .iter()
        .enumerate()
        .map(|(i, name)| Table::new(fresh_id(), i as u32 + 1).with_name(*name))
        .collect()
}

/// The seed presenter roster: four presenters per shift.
pub fn initial_presenters() -> Vec<Presenter> {
    let roster = [
        ("John Smith", Shift::Morning),
        ("Jane Doe", Shift::Morning),
        ("Bob Johnson", Shift::Morning),
        ("Alice Brown", Shift::Morning),
        ("Carlos Diaz", Shift::Afternoon),
        ("Mei Chen", Shift::Afternoon),
        ("Liam Murphy", Shift::Afternoon),
        ("Sofia Rossi", Shift::Afternoon),
        ("Elena Petrova", Shift::Night),
        ("David Kim", Shift::Night),
        ("Amara Okafor", Shift::Night),
        ("Noah Berg", Shift::Night),
    ];
    roster
        .iter()
        .enumerate()
        .map(|(i, (name, shift))| {
            let slug = name.to_lowercase().replace(' ', ".");
            Presenter::new(fresh_id(), *shift)
                .with_name(*name)
                .with_email(format!("{slug}@example.com"))
                .with_phone(format!("123-456-{}", 7890 + i))
        })
        .collect()
}

/// The seed dashboard accounts.
pub fn initial_users() -> Vec<User> {
    [
        ("admin", Role::Admin),
        ("manager", Role::Manager),
        ("viewer", Role::Viewer),
    ]
    .iter()
    .map(|(username, role)| {
        User::new(fresh_id(), *username, *role).with_email(format!("{username}@example.com"))
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tables_numbered_sequentially() {
        let tables = initial_tables();
        assert_eq!(tables.len(), 8);
        for (i, table) in tables.iter().enumerate() {
            assert_eq!(table.number, i as u32 + 1);
            assert!(table.active);
        }
    }

    #[test]
    fn test_presenters_cover_all_shifts() {
        let presenters = initial_presenters();
        assert_eq!(presenters.len(), 12);
        for shift in Shift::ALL {
            let count = presenters.iter().filter(|p| p.shift == shift).count();
            assert_eq!(count, 4);
        }
    }

    #[test]
    fn test_presenters_have_contact_details() {
        for p in initial_presenters() {
            assert!(!p.email.is_empty());
            assert!(!p.phone.is_empty());
        }
    }

    #[test]
    fn test_ids_unique() {
        let ids: HashSet<String> = initial_presenters()
            .into_iter()
            .map(|p| p.id)
            .chain(initial_tables().into_iter().map(|t| t.id))
            .chain(initial_users().into_iter().map(|u| u.id))
            .collect();
        assert_eq!(ids.len(), 12 + 8 + 3);
    }

    #[test]
    fn test_users_one_per_role() {
        let users = initial_users();
        assert_eq!(users.len(), 3);
        assert!(users.iter().any(|u| u.role == Role::Admin));
        assert!(users.iter().any(|u| u.role == Role::Manager));
        assert!(users.iter().any(|u| u.role == Role::Viewer));
    }
}
