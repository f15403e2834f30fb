//! In-memory implementation of the store contract for testing and development

use crate::core::bill::{Bill, BillPayload};
use crate::core::store::{BillResource, CreatedReceipt, ReceiptUpload, Store};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// A receipt waiting for its update phase
#[derive(Debug, Clone)]
struct PendingReceipt {
    file_name: String,
    file_url: String,
}

#[derive(Default)]
struct Tables {
    bills: HashMap<String, Bill>,
    receipts: HashMap<String, PendingReceipt>,
}

/// In-memory bill store
///
/// Useful for testing and development hosts. Uses RwLock for thread-safe
/// access. Both persistence phases behave like the remote store: `create`
/// mints the key and keeps the receipt aside, `update` attaches the form
/// fields to it and rejects a key no `create` ever returned.
#[derive(Clone, Default)]
pub struct InMemoryBillStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryBillStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for InMemoryBillStore {
    fn bills(&self) -> Arc<dyn BillResource> {
        Arc::new(self.clone())
    }
}

#[async_trait]
impl BillResource for InMemoryBillStore {
    async fn list(&self) -> Result<Vec<Bill>> {
        let tables = self
            .tables
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(tables.bills.values().cloned().collect())
    }

    async fn create(&self, upload: ReceiptUpload) -> Result<CreatedReceipt> {
        let mut tables = self
            .tables
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let key = Uuid::new_v4().to_string();
        let file_url = format!("https://storage.local/receipts/{}/{}", key, upload.file_name);
        tables.receipts.insert(
            key.clone(),
            PendingReceipt {
                file_name: upload.file_name,
                file_url: file_url.clone(),
            },
        );

        Ok(CreatedReceipt { file_url, key })
    }

    async fn update(&self, selector: &str, payload: BillPayload) -> Result<Bill> {
        let mut tables = self
            .tables
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let receipt = tables
            .receipts
            .get(selector)
            .cloned()
            .ok_or_else(|| anyhow!("No bill created under key '{}'", selector))?;

        let bill = Bill {
            id: selector.to_string(),
            email: payload.email,
            bill_type: payload.bill_type,
            name: payload.name,
            amount: payload.amount,
            date: payload.date,
            vat: payload.vat,
            pct: Some(payload.pct),
            commentary: payload.commentary,
            file_url: payload.file_url.or(Some(receipt.file_url)),
            file_name: payload.file_name.or(Some(receipt.file_name)),
            status: payload.status,
            comment_admin: None,
        };
        tables.bills.insert(bill.id.clone(), bill.clone());

        Ok(bill)
    }
}
