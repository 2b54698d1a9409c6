//! Role-based record filtering.
//!
//! Every screen that lists interns, projects or tasks goes through
//! [`Visibility`] so the rules live in one place.

pub mod visibility;

pub use visibility::{ProjectVisibility, RecordFilter, TaskVisibility, Visibility};
