//! Test modules for the fixed-set library.
//!
//! This module contains the crate-internal test suites:
//! - Unit tests for configuration and error handling
//! - Property-based tests of the perfect hash set using proptest
//! - Test fixtures and utilities shared with the per-module unit tests
