//! Error types for the core cache engine.

use thiserror::Error;

/// Result type alias for the core cache engine.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors a [`crate::Group`] can surface to a caller.
///
/// `ProgrammerFault` conditions (a nil loader, a double peer registration)
/// are not represented here: they indicate an unrepairable setup bug and
/// are raised as panics at the construction site instead, matching the
/// "Fatal; abort" recovery policy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// `Group::get` was called with an empty key.
    #[error("key required")]
    EmptyKey,

    /// The source loader reported that the key does not exist.
    #[error("source miss: {0}")]
    SourceMiss(String),

    /// The source loader failed for a reason other than "not found".
    #[error("source fault: {0}")]
    SourceFault(String),

    /// A peer transport call failed or returned an error.
    ///
    /// Never propagated to a caller of [`crate::Group::get`] directly: a
    /// `PeerFault` is logged and triggers the local-load fallback.
    #[error("peer fault: {0}")]
    PeerFault(String),
}
