use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::BackofficeError;
use crate::models::{Invoice, User};
use crate::storage::{InvoiceStorage, UserStorage};

/// In-memory implementation of the `UserStorage` interface, used by tests and
/// as the behavioral reference for the database backend. Keys are time-ordered
/// ids, so map iteration order is creation order.
pub struct InMemoryUserStorage {
    users: Mutex<BTreeMap<Uuid, User>>,
}

impl InMemoryUserStorage {
    pub fn new() -> Self {
        InMemoryUserStorage {
            users: Mutex::new(BTreeMap::new()),
        }
    }

    /// Storage pre-populated with the given users.
    pub fn seeded(users: impl IntoIterator<Item = User>) -> Self {
        InMemoryUserStorage {
            users: Mutex::new(users.into_iter().map(|user| (user.id, user)).collect()),
        }
    }
}

#[async_trait]
impl UserStorage for InMemoryUserStorage {
    async fn insert(&self, user: User) -> Result<(), BackofficeError> {
        let mut users = self.users.lock().await;
        if users.values().any(|existing| existing.email == user.email) {
            return Err(BackofficeError::EmailAlreadyRegistered(user.email));
        }
        users.insert(user.id, user);
        Ok(())
    }

    async fn update(&self, user: User) -> Result<(), BackofficeError> {
        let mut users = self.users.lock().await;
        if let Some(slot) = users.get_mut(&user.id) {
            *slot = user;
        }
        Ok(())
    }

    async fn fetch_by(&self, email: &str) -> Result<Option<User>, BackofficeError> {
        let users = self.users.lock().await;
        Ok(users.values().find(|user| user.email == email).cloned())
    }

    async fn fetch_all(&self, limit: i64, offset: i64) -> Result<Vec<User>, BackofficeError> {
        // Slicing semantics: an offset past the end or a limit of 0 yields an
        // empty result. Negative inputs are passed through unvalidated.
        let users = self.users.lock().await;
        Ok(users
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn delete(&self, user: &User) -> Result<(), BackofficeError> {
        self.users.lock().await.remove(&user.id);
        Ok(())
    }
}

/// In-memory implementation of the `InvoiceStorage` interface.
pub struct InMemoryInvoiceStorage {
    invoices: Mutex<BTreeMap<Uuid, Invoice>>,
}

impl InMemoryInvoiceStorage {
    pub fn new() -> Self {
        InMemoryInvoiceStorage {
            invoices: Mutex::new(BTreeMap::new()),
        }
    }

    /// Storage pre-populated with the given invoices.
    pub fn seeded(invoices: impl IntoIterator<Item = Invoice>) -> Self {
        InMemoryInvoiceStorage {
            invoices: Mutex::new(
                invoices
                    .into_iter()
                    .map(|invoice| (invoice.id, invoice))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl InvoiceStorage for InMemoryInvoiceStorage {
    async fn insert(&self, invoice: Invoice) -> Result<(), BackofficeError> {
        self.invoices.lock().await.insert(invoice.id, invoice);
        Ok(())
    }

    async fn fetch_all(&self, limit: i64, offset: i64) -> Result<Vec<Invoice>, BackofficeError> {
        let invoices = self.invoices.lock().await;
        Ok(invoices
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .copied()
            .collect())
    }

    async fn delete(&self, invoice: &Invoice) -> Result<(), BackofficeError> {
        self.invoices.lock().await.remove(&invoice.id);
        Ok(())
    }
}
