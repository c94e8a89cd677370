//! In-memory user store.
//!
//! # Responsibilities
//! - Own the record set and the next-ID counter
//! - Assign sequential IDs on create
//! - Serialize every read and mutation through one lock
//!
//! # Design Decisions
//! - A `Vec` scanned linearly keeps insertion order for listing
//! - Lock is never held across an await point
//! - Poisoned locks are recovered; no operation panics while holding one

use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::users::{User, UserError};

/// What an update does when the target ID does not exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateMissing {
    /// Insert the submitted names under a freshly assigned ID.
    #[default]
    Insert,
    /// Report the ID as not found.
    NotFound,
}

/// Result of a successful update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// An existing record was overwritten.
    Updated(User),
    /// No record matched and the submitted one was inserted instead.
    Inserted(User),
}

impl UpdateOutcome {
    /// The record as it now exists in the store.
    pub fn into_user(self) -> User {
        match self {
            UpdateOutcome::Updated(u) | UpdateOutcome::Inserted(u) => u,
        }
    }
}

#[derive(Debug)]
struct Inner {
    users: Vec<User>,
    next_id: u64,
}

impl Inner {
    fn position(&self, id: u64) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }

    fn insert(&mut self, mut user: User) -> User {
        user.id = self.next_id;
        self.next_id += 1;
        self.users.push(user.clone());
        user
    }
}

/// Thread-safe store owning every user record.
#[derive(Debug)]
pub struct UserStore {
    inner: Mutex<Inner>,
    update_missing: UpdateMissing,
}

impl UserStore {
    /// Create an empty store with the given update fallback policy.
    pub fn new(update_missing: UpdateMissing) -> Self {
        Self {
            inner: Mutex::new(Inner {
                users: Vec::new(),
                next_id: 1,
            }),
            update_missing,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of all records in insertion order.
    pub fn list(&self) -> Vec<User> {
        self.lock().users.clone()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.lock().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a record by ID.
    pub fn get(&self, id: u64) -> Result<User, UserError> {
        let inner = self.lock();
        inner
            .position(id)
            .map(|i| inner.users[i].clone())
            .ok_or(UserError::NotFound(id))
    }

    /// Store a new record under the next sequential ID.
    ///
    /// The submitted ID must be 0.
    pub fn create(&self, user: User) -> Result<User, UserError> {
        if user.id != 0 {
            return Err(UserError::IdAssigned);
        }
        Ok(self.lock().insert(user))
    }

    /// Replace the names of record `id`.
    ///
    /// When no record matches, the configured [`UpdateMissing`] policy
    /// decides between inserting under a new ID and failing with
    /// [`UserError::NotFound`]. Lookup and fallback share one lock scope.
    pub fn update(&self, id: u64, user: User) -> Result<UpdateOutcome, UserError> {
        let mut inner = self.lock();
        if let Some(i) = inner.position(id) {
            let existing = &mut inner.users[i];
            existing.first_name = user.first_name;
            existing.last_name = user.last_name;
            return Ok(UpdateOutcome::Updated(existing.clone()));
        }

        match self.update_missing {
            UpdateMissing::Insert => Ok(UpdateOutcome::Inserted(inner.insert(user))),
            UpdateMissing::NotFound => Err(UserError::NotFound(id)),
        }
    }

    /// Remove record `id`, returning it.
    pub fn delete(&self, id: u64) -> Result<User, UserError> {
        let mut inner = self.lock();
        let i = inner.position(id).ok_or(UserError::NotFound(id))?;
        Ok(inner.users.remove(i))
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new(UpdateMissing::default())
    }
}
