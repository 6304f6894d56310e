//! Shared test utilities for stormtrack integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Builders panic on bad input; fixtures are plain
//! `&'static str` payloads in each source shape.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
