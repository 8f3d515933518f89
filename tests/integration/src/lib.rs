//! Integration test utilities for the role administration backend
//!
//! Provides an in-memory implementation of every repository trait so the
//! service layer can be exercised end to end without a database.

pub mod fakes;

pub use fakes::*;
