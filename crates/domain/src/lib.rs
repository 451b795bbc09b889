//! Domain layer for the Gaia backend.
//!
//! This crate contains:
//! - Entity models and request DTOs (Group, User, Customer, App)
//! - Lifecycle services owning validation, uniqueness and soft-delete rules
//! - Storage and container-engine collaborator traits
//! - Domain error types

pub mod engine;
pub mod error;
pub mod models;
pub mod normalize;
pub mod services;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;
