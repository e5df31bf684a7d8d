//! Development and testing utilities for mdlite converters.
//!
//! - [`generate_fixtures`] - Fixture generation for integration tests
//! - [`output`] - Output normalization for test comparisons

pub mod generate_fixtures;
pub mod output;
