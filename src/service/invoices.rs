use crate::error::BackofficeError;
use crate::models::Invoice;
use crate::storage::InvoiceStorage;

/// The fetch all invoices query payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchAllInvoices {
    pub limit: i64,
    pub offset: i64,
}

/// The fetch all invoices query handler.
pub struct FetchAllInvoicesHandler<'a> {
    invoices: &'a dyn InvoiceStorage,
}

impl<'a> FetchAllInvoicesHandler<'a> {
    pub fn new(invoices: &'a dyn InvoiceStorage) -> Self {
        Self { invoices }
    }

    pub async fn handle(&self, query: FetchAllInvoices) -> Result<Vec<Invoice>, BackofficeError> {
        self.invoices.fetch_all(query.limit, query.offset).await
    }
}
