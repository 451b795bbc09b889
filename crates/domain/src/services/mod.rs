//! Lifecycle services.
//!
//! One service per entity, owning that entity's create/read/update/
//! soft-delete/restore rules. Services validate, consult the per-field
//! existence checks, stamp epoch-second timestamps, and persist through the
//! storage collaborator. Each operation is expected to run inside one
//! transaction boundary; the storage-level unique indexes are the backstop
//! for concurrent writers racing the in-service uniqueness checks.

pub mod app;
pub mod customer;
pub mod group;
pub mod seed;
pub mod user;

pub use app::AppProvisioner;
pub use customer::CustomerService;
pub use group::GroupService;
pub use user::UserService;
