//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → matcher.rs (path shape: collection / resource(id) / no match)
//!     → router.rs (method table per shape)
//!     → Return: Action or Rejection
//! ```
//!
//! # Design Decisions
//! - No regex: paths are matched segment by segment
//! - Deterministic: same input always yields the same action
//! - Rejections carry no body, only a status

pub mod matcher;
pub mod router;

pub use matcher::{PathMatcher, Target};
pub use router::{Action, Dispatcher, Rejection};
