//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod app;
pub mod customer;
pub mod group;
pub mod user;

pub use app::AppEntity;
pub use customer::CustomerEntity;
pub use group::GroupEntity;
pub use user::UserEntity;
