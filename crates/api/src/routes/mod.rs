pub mod apps;
pub mod customers;
pub mod groups;
pub mod health;
pub mod users;
