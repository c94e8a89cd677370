//! Domain errors for user operations.

use thiserror::Error;

/// Closed set of failures an action can hit.
///
/// The `Display` text of each variant is the exact plain-text body written
/// to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    /// No record with this ID exists.
    #[error("user with id {0} not found")]
    NotFound(u64),

    /// A create request carried a non-zero ID.
    #[error("new user must not include ID or it must be set to zero")]
    IdAssigned,

    /// The ID in an update body differs from the ID in the path.
    #[error("ID of submitted user must match ID in URL")]
    IdMismatch,

    /// The request body could not be read or decoded as a user.
    #[error("Could not parse user object")]
    Parse,
}
