//! Business logic services
//!
//! This module contains the service layer implementations that handle
//! validation and orchestration of domain operations.

pub mod access_scope;
pub mod context;
pub mod error;
pub mod role_assignment;

// Re-export all services for convenience
pub use access_scope::AccessScopeService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use role_assignment::RoleAssignmentService;
