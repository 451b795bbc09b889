//! Customer entity, embedded contacts, and request DTO.

use serde::{Deserialize, Serialize};

/// A customer record with an embedded contact list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    /// Stored uppercased; unique store-wide (including soft-deleted rows).
    pub name: String,
    pub phone: String,
    /// Stored uppercased (unlike user emails, which are lowercased).
    pub email: String,
    pub document: String,
    pub address: String,
    pub contacts: Vec<Contact>,
    pub active: bool,
    pub created_at: i64,
    pub updated_at: i64,
    /// Epoch second of soft deletion; 0 means the row is live.
    pub deleted_at: i64,
}

impl Customer {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at != 0
    }
}

/// A contact person embedded in a customer record. Contacts carry no
/// identity of their own and are stored as part of the customer row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub job_title: Option<String>,
}

/// Insert payload for a customer; the id is storage-generated.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub document: String,
    pub address: String,
    pub contacts: Vec<Contact>,
    pub active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Request payload for creating or updating a customer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub document: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub active: bool,
}
