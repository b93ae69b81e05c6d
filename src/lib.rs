pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod service;
pub mod storage;

pub use error::BackofficeError;
pub use storage::database::{DatabaseInvoiceStorage, DatabaseUserStorage};
pub use storage::in_memory::{InMemoryInvoiceStorage, InMemoryUserStorage};

#[cfg(test)]
mod tests;
