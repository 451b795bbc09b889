//! Persistence layer for the Gaia backend.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - PostgreSQL implementations of the domain store traits

pub mod db;
pub mod entities;
pub mod repositories;
