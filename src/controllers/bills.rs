//! Bill list controller: fetch, normalize, present

use crate::core::bill::Bill;
use crate::core::format;
use crate::core::navigation::{Navigator, Route};
use crate::core::store::Store;
use crate::core::view::{ModalPresenter, ReceiptIcon};
use anyhow::Result;
use serde::Serialize;
use std::sync::Arc;

/// One displayed row of the bill list.
///
/// A read projection of [`Bill`]: the date reformatted for display, the
/// status replaced by its French label. Never written back to the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillRow {
    pub id: String,
    pub email: String,
    #[serde(rename = "type")]
    pub bill_type: String,
    pub name: String,
    pub amount: f64,
    /// Display date; the raw stored value when it does not parse
    pub date: String,
    pub status: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
}

/// Capabilities the list controller runs against
pub struct BillsDependencies {
    pub navigator: Arc<dyn Navigator>,
    /// Absent before authentication data exists; the controller then
    /// short-circuits instead of erroring
    pub store: Option<Arc<dyn Store>>,
    pub modal: Arc<dyn ModalPresenter>,
}

/// Controller behind the bill list view
pub struct BillsController {
    navigator: Arc<dyn Navigator>,
    store: Option<Arc<dyn Store>>,
    modal: Arc<dyn ModalPresenter>,
}

impl BillsController {
    pub fn new(deps: BillsDependencies) -> Self {
        Self {
            navigator: deps.navigator,
            store: deps.store,
            modal: deps.modal,
        }
    }

    /// Fetch every bill and project it for display, earliest first.
    ///
    /// A record whose date cannot be parsed keeps its raw value and stays in
    /// the list. The store's own rejection is the one error that reaches the
    /// caller, message text intact, for the hosting view to render.
    pub async fn get_bills(&self) -> Result<Vec<BillRow>> {
        let Some(store) = &self.store else {
            return Ok(Vec::new());
        };

        let mut bills = store.bills().list().await?;
        // ISO dates compare chronologically as plain strings.
        bills.sort_by(|a, b| a.date.cmp(&b.date));

        Ok(bills.into_iter().map(Self::into_row).collect())
    }

    fn into_row(bill: Bill) -> BillRow {
        let date = match format::format_date(&bill.date) {
            Ok(formatted) => formatted,
            Err(err) => {
                tracing::warn!(
                    bill_id = %bill.id,
                    date = %bill.date,
                    error = %err,
                    "unparseable bill date, falling back to the raw value"
                );
                bill.date.clone()
            }
        };

        BillRow {
            id: bill.id,
            email: bill.email,
            bill_type: bill.bill_type,
            name: bill.name,
            amount: bill.amount,
            date,
            status: bill.status.label().to_string(),
            file_url: bill.file_url,
            file_name: bill.file_name,
        }
    }

    /// Jump to the creation form
    pub fn handle_click_new_bill(&self) {
        self.navigator.navigate(Route::NewBill);
    }

    /// Preview the receipt behind a list row.
    ///
    /// Display-only: the URL is injected as an image source, never fetched
    /// or validated here. An icon without a URL attribute is a no-op.
    pub fn handle_click_icon_eye(&self, icon: &dyn ReceiptIcon) {
        let Some(url) = icon.bill_url() else {
            return;
        };

        let img_width = self.modal.width() / 2;
        self.modal.inject_body(&format!(
            r#"<div style='text-align: center;' class="bill-proof-container"><img width={img_width} src={url} alt="Bill" /></div>"#
        ));
        self.modal.show();
    }
}
