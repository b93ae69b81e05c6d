use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Sqlite;
use sqlx::pool::PoolConnection;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::BackofficeError;
use crate::models::{Invoice, User};
use crate::storage::{InvoiceStorage, UserStorage};

/// Database implementation of the `UserStorage` interface.
///
/// The connection is supplied by the boundary layer, which acquires it before
/// invoking a handler; dropping the storage returns it to the pool. The
/// backend itself never begins or commits a transaction.
pub struct DatabaseUserStorage {
    conn: Mutex<PoolConnection<Sqlite>>,
}

impl DatabaseUserStorage {
    pub fn new(conn: PoolConnection<Sqlite>) -> Self {
        DatabaseUserStorage {
            conn: Mutex::new(conn),
        }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    first_name: String,
    last_name: String,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            email: row.email,
            first_name: row.first_name,
            last_name: row.last_name,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl UserStorage for DatabaseUserStorage {
    async fn insert(&self, user: User) -> Result<(), BackofficeError> {
        let mut conn = self.conn.lock().await;
        sqlx::query(
            "INSERT INTO users (id, email, first_name, last_name, created_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.created_at)
        .execute(&mut **conn)
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                BackofficeError::EmailAlreadyRegistered(user.email.clone())
            }
            _ => BackofficeError::from(err),
        })?;
        Ok(())
    }

    async fn update(&self, user: User) -> Result<(), BackofficeError> {
        // Affects zero rows when the id is unknown; that is not an error.
        let mut conn = self.conn.lock().await;
        sqlx::query("UPDATE users SET email = ?, first_name = ?, last_name = ? WHERE id = ?")
            .bind(&user.email)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(user.id)
            .execute(&mut **conn)
            .await?;
        Ok(())
    }

    async fn fetch_by(&self, email: &str) -> Result<Option<User>, BackofficeError> {
        let mut conn = self.conn.lock().await;
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, first_name, last_name, created_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&mut **conn)
        .await?;
        Ok(row.map(User::from))
    }

    async fn fetch_all(&self, limit: i64, offset: i64) -> Result<Vec<User>, BackofficeError> {
        let mut conn = self.conn.lock().await;
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, first_name, last_name, created_at FROM users \
             ORDER BY created_at LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut **conn)
        .await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn delete(&self, user: &User) -> Result<(), BackofficeError> {
        let mut conn = self.conn.lock().await;
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(user.id)
            .execute(&mut **conn)
            .await?;
        Ok(())
    }
}

/// Database implementation of the `InvoiceStorage` interface.
pub struct DatabaseInvoiceStorage {
    conn: Mutex<PoolConnection<Sqlite>>,
}

impl DatabaseInvoiceStorage {
    pub fn new(conn: PoolConnection<Sqlite>) -> Self {
        DatabaseInvoiceStorage {
            conn: Mutex::new(conn),
        }
    }
}

#[derive(sqlx::FromRow)]
struct InvoiceRow {
    id: Uuid,
}

#[async_trait]
impl InvoiceStorage for DatabaseInvoiceStorage {
    async fn insert(&self, invoice: Invoice) -> Result<(), BackofficeError> {
        let mut conn = self.conn.lock().await;
        sqlx::query("INSERT INTO invoices (id) VALUES (?)")
            .bind(invoice.id)
            .execute(&mut **conn)
            .await?;
        Ok(())
    }

    async fn fetch_all(&self, limit: i64, offset: i64) -> Result<Vec<Invoice>, BackofficeError> {
        // Time-ordered ids make id order chronological order.
        let mut conn = self.conn.lock().await;
        let rows = sqlx::query_as::<_, InvoiceRow>(
            "SELECT id FROM invoices ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut **conn)
        .await?;
        Ok(rows.into_iter().map(|row| Invoice { id: row.id }).collect())
    }

    async fn delete(&self, invoice: &Invoice) -> Result<(), BackofficeError> {
        let mut conn = self.conn.lock().await;
        sqlx::query("DELETE FROM invoices WHERE id = ?")
            .bind(invoice.id)
            .execute(&mut **conn)
            .await?;
        Ok(())
    }
}
