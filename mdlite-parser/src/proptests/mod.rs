//! Property-based tests for the tokenizer and parser
//!
//! Fixture tests pin down specific inputs; these check invariants that must hold for
//! any input at all.

mod generators;
mod invariants;
