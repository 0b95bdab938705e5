//! Coursedesk - an interactive course catalog with per-course notifications
//!
//! The [`catalog`] and [`notifications`] modules hold the data; [`cli`]
//! drives them from a numbered menu on standard input.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod notifications;
pub mod state;

pub use error::{CourseDeskError, Result};
pub use state::CourseDesk;
