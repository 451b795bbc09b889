//! Customer lifecycle service.

use shared::clock::{epoch_seconds, NOT_DELETED};
use tracing::info;

use crate::error::DomainError;
use crate::models::{Contact, Customer, CustomerRequest, NewCustomer};
use crate::normalize::{is_blank, is_valid_document, is_valid_email, uppercased};
use crate::store::CustomerStore;

/// Owns the customer lifecycle: richer field validation than the other
/// entities (email and document formats, non-empty contact list) plus the
/// store-wide name uniqueness rule.
#[derive(Clone)]
pub struct CustomerService<S> {
    store: S,
}

/// Normalized candidate fields shared by the create and update paths.
/// Name and email are both stored uppercased.
struct Candidate {
    name: String,
    phone: String,
    email: String,
    document: String,
    address: String,
    contacts: Vec<Contact>,
    active: bool,
}

impl Candidate {
    fn from_request(req: CustomerRequest) -> Self {
        Self {
            name: req.name.as_deref().map(uppercased).unwrap_or_default(),
            phone: req.phone.unwrap_or_default(),
            email: req.email.as_deref().map(uppercased).unwrap_or_default(),
            document: req.document.unwrap_or_default(),
            address: req.address.unwrap_or_default(),
            contacts: req.contacts,
            active: req.active,
        }
    }
}

impl<S: CustomerStore> CustomerService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Rules run in a fixed order and stop at the first failure:
    /// name, phone, email format, document format, address, contacts,
    /// name uniqueness. The uniqueness check spans soft-deleted rows.
    async fn validate(&self, candidate: &Candidate, exclude_id: Option<i64>) -> Result<(), DomainError> {
        if is_blank(Some(&candidate.name)) {
            return Err(DomainError::validation("name is required"));
        }
        if is_blank(Some(&candidate.phone)) {
            return Err(DomainError::validation("phone is required"));
        }
        if is_blank(Some(&candidate.email)) {
            return Err(DomainError::validation("email is required"));
        }
        if !is_valid_email(&candidate.email) {
            return Err(DomainError::validation("email is invalid"));
        }
        if is_blank(Some(&candidate.document)) {
            return Err(DomainError::validation("document is required"));
        }
        if !is_valid_document(&candidate.document) {
            return Err(DomainError::validation("document is invalid"));
        }
        if is_blank(Some(&candidate.address)) {
            return Err(DomainError::validation("address is required"));
        }
        if candidate.contacts.is_empty() {
            return Err(DomainError::validation("contacts is required"));
        }
        if self.store.name_exists(&candidate.name, exclude_id).await? {
            return Err(DomainError::validation("name already exists"));
        }
        Ok(())
    }

    /// All live customers; customers carry no visibility flag.
    pub async fn list(&self) -> Result<Vec<Customer>, DomainError> {
        Ok(self.store.list_live().await?)
    }

    /// Live customer by id.
    pub async fn get(&self, id: i64) -> Result<Customer, DomainError> {
        self.store
            .find_live(id)
            .await?
            .ok_or_else(|| DomainError::not_found("customer not found"))
    }

    /// Customer by id regardless of deletion state (restore path).
    pub async fn get_any(&self, id: i64) -> Result<Customer, DomainError> {
        self.store
            .find_any(id)
            .await?
            .ok_or_else(|| DomainError::not_found("customer not found"))
    }

    pub async fn create(&self, req: CustomerRequest) -> Result<Customer, DomainError> {
        let candidate = Candidate::from_request(req);
        self.validate(&candidate, None).await?;

        let now = epoch_seconds();
        let customer = self
            .store
            .insert(NewCustomer {
                name: candidate.name,
                phone: candidate.phone,
                email: candidate.email,
                document: candidate.document,
                address: candidate.address,
                contacts: candidate.contacts,
                active: candidate.active,
                created_at: now,
                updated_at: now,
            })
            .await?;
        info!(customer_id = customer.id, name = %customer.name, "customer created");
        Ok(customer)
    }

    pub async fn update(&self, id: i64, req: CustomerRequest) -> Result<Customer, DomainError> {
        let mut customer = self.get(id).await?;
        let candidate = Candidate::from_request(req);
        self.validate(&candidate, Some(id)).await?;

        customer.name = candidate.name;
        customer.phone = candidate.phone;
        customer.email = candidate.email;
        customer.document = candidate.document;
        customer.address = candidate.address;
        customer.contacts = candidate.contacts;
        customer.active = candidate.active;
        customer.updated_at = epoch_seconds();
        self.store.update(&customer).await?;
        Ok(customer)
    }

    /// Soft delete: stamps `deleted_at` only, leaving `updated_at` as the
    /// last content change.
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut customer = self.get(id).await?;
        customer.deleted_at = epoch_seconds();
        self.store.update(&customer).await?;
        info!(customer_id = id, "customer deleted");
        Ok(())
    }

    /// Restore by id regardless of deletion state.
    pub async fn restore(&self, id: i64) -> Result<Customer, DomainError> {
        let mut customer = self.get_any(id).await?;
        customer.deleted_at = NOT_DELETED;
        self.store.update(&customer).await?;
        info!(customer_id = id, "customer restored");
        Ok(customer)
    }
}
