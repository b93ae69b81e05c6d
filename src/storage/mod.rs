use async_trait::async_trait;

use crate::error::BackofficeError;
use crate::models::{Invoice, User};

/// Persistence contract for users. Backends must behave identically so tests
/// can swap the in-memory implementation for the database one.
#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Stores a new user. Fails with `EmailAlreadyRegistered` when the email
    /// is already taken.
    async fn insert(&self, user: User) -> Result<(), BackofficeError>;

    /// Stores the given user. Affects zero rows when the id is unknown; a
    /// missing target is not an error.
    async fn update(&self, user: User) -> Result<(), BackofficeError>;

    /// Fetches one user by email, case-sensitive exact match.
    async fn fetch_by(&self, email: &str) -> Result<Option<User>, BackofficeError>;

    /// Fetches users ordered by creation time ascending. `limit` and `offset`
    /// are passed through to the store unvalidated.
    async fn fetch_all(&self, limit: i64, offset: i64) -> Result<Vec<User>, BackofficeError>;

    /// Deletes the given user. No-op when absent.
    async fn delete(&self, user: &User) -> Result<(), BackofficeError>;
}

/// Persistence contract for invoices. No update, no single-fetch.
#[async_trait]
pub trait InvoiceStorage: Send + Sync {
    /// Stores a new invoice.
    async fn insert(&self, invoice: Invoice) -> Result<(), BackofficeError>;

    /// Fetches invoices ordered by id ascending, which is chronological for
    /// time-ordered ids.
    async fn fetch_all(&self, limit: i64, offset: i64) -> Result<Vec<Invoice>, BackofficeError>;

    /// Deletes the given invoice. No-op when absent.
    async fn delete(&self, invoice: &Invoice) -> Result<(), BackofficeError>;
}

pub mod database;
pub mod in_memory;
