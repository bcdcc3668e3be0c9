// SPDX-License-Identifier: AGPL-3.0-or-later

/// Errors which can occur when interpreting a `SliceQuery`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SliceQueryError {
    /// Neither `before` nor `after` were given.
    #[error("Either 'before' or 'after' is required")]
    MissingBoundary,

    /// Both `before` and `after` were given.
    #[error("Only one of 'before' or 'after' can be set")]
    AmbiguousBoundary,

    /// Limit was zero or negative.
    #[error("Limit needs to be a positive number, got {0}")]
    InvalidLimit(i32),

    /// Cursor does not point at any item of the collection.
    #[error("Unknown cursor '{0}'")]
    UnknownCursor(String),
}

/// Errors which can occur when recording or configuring tags.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    /// Tags can not be empty or consist only of whitespace.
    #[error("Tags can not be empty")]
    EmptyTag,

    /// Tag trees can only be rooted in one of the configured main tags.
    #[error("'{0}' is not a main tag")]
    UnknownMainTag(String),

    /// Main tags are reserved for the root of the tag tree.
    #[error("Main tag '{0}' can not be used as a sub tag")]
    MainTagAsSubTag(String),

    /// Main tag was configured more than once.
    #[error("Main tag '{0}' is configured more than once")]
    DuplicateMainTag(String),
}
