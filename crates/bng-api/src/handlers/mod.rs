//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod access;
pub mod health;
pub mod roles;
