//! Shared utilities for the Gaia backend.
//!
//! This crate provides the leaf collaborators used across the other crates:
//! - Password hashing with Argon2id
//! - Epoch-second clock for lifecycle timestamps

pub mod clock;
pub mod password;
