//! User records and their in-memory store.
//!
//! # Data Flow
//! ```text
//! action handler
//!     → store.rs (single lock scope: list/get/create/update/delete)
//!     → model.rs (User, cloned out to callers)
//!     → error.rs (closed UserError, mapped to a status at the HTTP boundary)
//! ```
//!
//! # Design Decisions
//! - IDs are assigned by the store, start at 1 and are never reused
//! - Callers never hold a reference into the record set
//! - Every operation, including ID assignment, runs under one mutex

pub mod error;
pub mod model;
pub mod store;

pub use error::UserError;
pub use model::User;
pub use store::{UpdateMissing, UpdateOutcome, UserStore};
