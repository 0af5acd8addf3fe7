//! HTTP layer over the goldsect solver.
//!
//! Routes, request/response schemas, and the in-memory session history.
//! All algorithmic work lives in `goldsect-solve`; this crate is glue.

mod api;
mod history;

pub use api::{routes, PlotData, SolveRequest, SolveResponse};
pub use history::{Entry, History};
