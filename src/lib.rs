//! # Billed Core
//!
//! Bill lifecycle management for an employee expense-report product.
//!
//! The crate owns the two stateful workflows of the product's employee
//! surface and nothing else:
//!
//! - **Listing**: fetch every submitted bill, normalize dates and statuses
//!   for display, and wire the row-level actions (new-bill navigation,
//!   receipt preview).
//! - **Creation**: validate and upload a receipt image, then persist the
//!   bill itself in a second phase and redirect back to the list.
//!
//! Everything the workflows touch — the remote store, route navigation, the
//! session record, the rendered page — is reached through an injected
//! capability trait, so hosts and tests decide what sits behind each seam.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use billed::prelude::*;
//!
//! let controller = BillsController::new(BillsDependencies {
//!     navigator: navigator.clone(),
//!     store: Some(store.clone()),
//!     modal: modal.clone(),
//! });
//!
//! let rows = controller.get_bills().await?;
//! for row in &rows {
//!     println!("{} — {} ({})", row.date, row.name, row.status);
//! }
//! ```

pub mod controllers;
pub mod core;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types and Seams ===
    pub use crate::core::{
        bill::{Bill, BillPayload, BillStatus},
        error::BilledError,
        navigation::{Navigator, Route},
        receipt::SelectedFile,
        session::{SessionStorage, SessionUser},
        store::{BillResource, CreatedReceipt, ReceiptUpload, Store},
        view::{FormSnapshot, ModalPresenter, NewBillPage, ReceiptIcon},
    };

    // === Controllers ===
    pub use crate::controllers::{
        bills::{BillRow, BillsController, BillsDependencies},
        new_bill::{NewBillController, NewBillDependencies, RECEIPT_FORMAT_ALERT},
    };

    // === Storage ===
    #[cfg(feature = "in-memory")]
    pub use crate::storage::InMemoryBillStore;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
}
