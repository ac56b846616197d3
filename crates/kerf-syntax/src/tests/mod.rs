//! Crate-internal test suites.

mod behaviour;
