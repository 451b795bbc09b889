//! PostgreSQL implementations of the domain store traits.

pub mod app;
pub mod bootstrap;
pub mod customer;
pub mod group;
pub mod user;

pub use app::PgAppStore;
pub use bootstrap::PgBootstrapStore;
pub use customer::PgCustomerStore;
pub use group::PgGroupStore;
pub use user::PgUserStore;
