use sqlx::SqlitePool;

use crate::db;
use crate::error::BackofficeError;
use crate::models::{Invoice, User};
use crate::storage::database::{DatabaseInvoiceStorage, DatabaseUserStorage};
use crate::storage::{InvoiceStorage, UserStorage};
use crate::tests::tick;

async fn pool() -> SqlitePool {
    db::connect("sqlite::memory:").await.unwrap()
}

fn user(email: &str) -> User {
    User::new(email.to_string(), "Ada".to_string(), "Lovelace".to_string())
}

#[tokio::test]
async fn insert_then_fetch_by_round_trips_all_fields() {
    let pool = pool().await;
    let storage = DatabaseUserStorage::new(pool.acquire().await.unwrap());

    let inserted = user("ada@example.com");
    storage.insert(inserted.clone()).await.unwrap();

    let fetched = storage.fetch_by("ada@example.com").await.unwrap();
    assert_eq!(fetched, Some(inserted));
}

#[tokio::test]
async fn duplicate_email_hits_unique_constraint() {
    let pool = pool().await;
    let storage = DatabaseUserStorage::new(pool.acquire().await.unwrap());

    storage.insert(user("ada@example.com")).await.unwrap();
    let err = storage.insert(user("ada@example.com")).await.unwrap_err();

    assert!(matches!(err, BackofficeError::EmailAlreadyRegistered(_)));
    assert_eq!(storage.fetch_all(10, 0).await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_of_unknown_id_affects_zero_rows() {
    let pool = pool().await;
    let storage = DatabaseUserStorage::new(pool.acquire().await.unwrap());

    storage.update(user("ghost@example.com")).await.unwrap();

    assert_eq!(storage.fetch_by("ghost@example.com").await.unwrap(), None);
}

#[tokio::test]
async fn update_overwrites_mutable_fields() {
    let pool = pool().await;
    let storage = DatabaseUserStorage::new(pool.acquire().await.unwrap());

    let mut stored = user("ada@example.com");
    storage.insert(stored.clone()).await.unwrap();

    stored.first_name = "Augusta".to_string();
    stored.last_name = "King".to_string();
    storage.update(stored.clone()).await.unwrap();

    let fetched = storage.fetch_by("ada@example.com").await.unwrap();
    assert_eq!(fetched, Some(stored));
}

#[tokio::test]
async fn delete_removes_row_and_tolerates_absence() {
    let pool = pool().await;
    let storage = DatabaseUserStorage::new(pool.acquire().await.unwrap());

    let stored = user("ada@example.com");
    storage.insert(stored.clone()).await.unwrap();

    storage.delete(&stored).await.unwrap();
    storage.delete(&stored).await.unwrap();

    assert_eq!(storage.fetch_by("ada@example.com").await.unwrap(), None);
}

#[tokio::test]
async fn fetch_all_orders_by_creation_and_paginates() {
    let pool = pool().await;
    let storage = DatabaseUserStorage::new(pool.acquire().await.unwrap());

    let a = user("a@example.com");
    tick().await;
    let b = user("b@example.com");
    tick().await;
    let c = user("c@example.com");

    // Insertion order deliberately differs from creation order.
    storage.insert(c.clone()).await.unwrap();
    storage.insert(a.clone()).await.unwrap();
    storage.insert(b.clone()).await.unwrap();

    let page = storage.fetch_all(2, 1).await.unwrap();
    assert_eq!(page, vec![b, c]);
}

#[tokio::test]
async fn invoices_order_by_id_and_paginate() {
    let pool = pool().await;
    let storage = DatabaseInvoiceStorage::new(pool.acquire().await.unwrap());

    let a = Invoice::new();
    tick().await;
    let b = Invoice::new();
    tick().await;
    let c = Invoice::new();

    storage.insert(b).await.unwrap();
    storage.insert(c).await.unwrap();
    storage.insert(a).await.unwrap();

    assert_eq!(storage.fetch_all(100, 0).await.unwrap(), vec![a, b, c]);
    assert_eq!(storage.fetch_all(1, 1).await.unwrap(), vec![b]);

    storage.delete(&b).await.unwrap();
    assert_eq!(storage.fetch_all(100, 0).await.unwrap(), vec![a, c]);
}
