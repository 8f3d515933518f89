//! # bng-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AccessScopeService, RoleAssignmentService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
