//! Handlers for the menu entries
//!
//! Each handler performs one menu interaction against a [`Session`] and
//! reports whether the menu loop should keep going.
//!
//! [`Session`]: crate::cli::session::Session

pub mod course;
pub mod notify;
pub mod search;

/// What the menu loop does after a handler returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Show the menu again
    Continue,
    /// Leave the loop (Exit chosen or input closed)
    Exit,
}
