//! Shared contracts for the goods admin front-end.
//!
//! Everything here is target-independent: the navigation tree and its route
//! projection, label humanization, form schema construction, and the
//! date/media formatting helpers used by the pages.

pub mod shared;
