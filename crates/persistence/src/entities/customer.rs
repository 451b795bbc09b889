//! Customer entity (database row mapping).

use domain::models::{Contact, Customer};
use sqlx::types::Json;
use sqlx::FromRow;

/// Database row mapping for the customers table. Contacts are embedded in a
/// JSONB column; they have no table of their own.
#[derive(Debug, Clone, FromRow)]
pub struct CustomerEntity {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub document: String,
    pub address: String,
    pub contacts: Json<Vec<Contact>>,
    pub active: bool,
    pub created_at: i64,
    pub updated_at: i64,
    pub deleted_at: i64,
}

impl From<CustomerEntity> for Customer {
    fn from(entity: CustomerEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            phone: entity.phone,
            email: entity.email,
            document: entity.document,
            address: entity.address,
            contacts: entity.contacts.0,
            active: entity.active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        }
    }
}
