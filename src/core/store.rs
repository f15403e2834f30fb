//! Store contract: one asynchronous resource handle per entity type

use crate::core::bill::{Bill, BillPayload};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Multipart-equivalent payload of the receipt upload phase
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptUpload {
    /// Owner of the bill being created, read from the session
    pub email: String,
    pub file_name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

/// What the store hands back once a receipt is persisted
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedReceipt {
    /// Where the uploaded image can be fetched from
    pub file_url: String,
    /// Key of the partial bill holding the receipt; the selector for the
    /// update phase
    pub key: String,
}

/// Asynchronous CRUD operations over the bill resource.
///
/// Implementations are free to put anything behind this: a REST client, an
/// in-memory table, a test double. All operations error by rejection.
#[async_trait]
pub trait BillResource: Send + Sync {
    /// Fetch every raw bill record
    async fn list(&self) -> Result<Vec<Bill>>;

    /// First persistence phase: store the receipt and mint the bill's key
    async fn create(&self, upload: ReceiptUpload) -> Result<CreatedReceipt>;

    /// Second persistence phase: attach the form fields to a previously
    /// created bill
    async fn update(&self, selector: &str, payload: BillPayload) -> Result<Bill>;
}

/// A remote store exposing one resource handle per entity type
pub trait Store: Send + Sync {
    fn bills(&self) -> Arc<dyn BillResource>;
}
