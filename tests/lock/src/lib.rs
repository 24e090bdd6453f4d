//! Shared helpers for the lock tests and the fixture binary.

pub mod plan_test_helpers;
