//! Golden section search over a bounded interval.
//!
//! [`objective`] wraps a callable with the search direction and the domain
//! check, [`golden`] runs the interval reduction, [`report`] converts a raw
//! solution into user-facing output, and [`sample`] builds the grid that
//! backs visualization.
//!
//! Everything here is synchronous and pure: each search owns its working
//! state, shares nothing, and the iteration cap is the only runtime bound.

pub mod golden;
pub mod objective;
pub mod report;
pub mod sample;

pub use objective::{DomainError, Goal, Objective};
pub use report::Report;
