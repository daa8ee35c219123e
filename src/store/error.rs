//! Error types for the order store.

use thiserror::Error;

/// Errors surfaced by the order store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// Submission with no cart lines; the caller must correct and retry.
    #[error("cannot submit an empty cart")]
    EmptyCart,

    /// Submission without a table selection.
    #[error("no table selected")]
    NoTable,

    /// The store actor's request channel is closed.
    #[error("order store is no longer running")]
    StoreClosed,

    /// The store actor dropped the response channel.
    #[error("order store dropped the response")]
    StoreDropped,
}
