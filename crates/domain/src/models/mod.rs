//! Domain models for the Gaia backend.

pub mod app;
pub mod customer;
pub mod group;
pub mod user;

pub use app::{App, CreateAppRequest, NewApp};
pub use customer::{Contact, Customer, CustomerRequest, NewCustomer};
pub use group::{Group, GroupRequest, NewGroup};
pub use user::{NewUser, User, UserRequest};
