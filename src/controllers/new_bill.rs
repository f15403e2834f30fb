//! New bill controller: receipt upload, validation, two-phase submission

use crate::core::bill::{BillPayload, BillStatus};
use crate::core::error::BilledError;
use crate::core::navigation::{Navigator, Route};
use crate::core::receipt;
use crate::core::session::{self, SessionStorage};
use crate::core::store::{ReceiptUpload, Store};
use crate::core::view::NewBillPage;
use std::sync::Arc;

/// Alert shown when the selected receipt is not an allowed image format
pub const RECEIPT_FORMAT_ALERT: &str = "Le document doit être une image .jpg, .jpeg ou .png";

/// Capabilities the creation workflow runs against
pub struct NewBillDependencies {
    pub navigator: Arc<dyn Navigator>,
    pub store: Option<Arc<dyn Store>>,
    pub session: Arc<dyn SessionStorage>,
    pub page: Arc<dyn NewBillPage>,
}

/// Controller owning the creation form's lifecycle.
///
/// Persistence happens in two phases: a successful receipt upload mints the
/// bill's key (`create`), then submission attaches the remaining fields to
/// that key (`update`). The three state fields stay `None` until the first
/// phase succeeds, which is what keeps an update from ever targeting a bill
/// the store has not created.
pub struct NewBillController {
    navigator: Arc<dyn Navigator>,
    store: Option<Arc<dyn Store>>,
    session: Arc<dyn SessionStorage>,
    page: Arc<dyn NewBillPage>,
    file_url: Option<String>,
    file_name: Option<String>,
    bill_id: Option<String>,
}

impl NewBillController {
    pub fn new(deps: NewBillDependencies) -> Self {
        Self {
            navigator: deps.navigator,
            store: deps.store,
            session: deps.session,
            page: deps.page,
            file_url: None,
            file_name: None,
            bill_id: None,
        }
    }

    /// Receipt URL captured by a successful upload
    pub fn file_url(&self) -> Option<&str> {
        self.file_url.as_deref()
    }

    /// Original name of the uploaded receipt
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Key minted by the store for the bill under creation
    pub fn bill_id(&self) -> Option<&str> {
        self.bill_id.as_deref()
    }

    /// React to a file being picked in the receipt input.
    ///
    /// An invalid format is rejected locally: blocking alert, input cleared,
    /// no store call, so no partial bill can exist server-side for it. A
    /// valid file is uploaded immediately; only a successful upload sets
    /// `file_url`/`file_name`/`bill_id`.
    pub async fn handle_change_file(&mut self) {
        let Some(file) = self.page.selected_file() else {
            return;
        };

        if let Err(err) = receipt::validate(&file) {
            tracing::warn!(error = %err, code = err.code(), "receipt rejected");
            self.page.alert(RECEIPT_FORMAT_ALERT);
            self.page.clear_file_input();
            return;
        }

        let Some(store) = &self.store else {
            tracing::warn!("no store bound, receipt upload skipped");
            return;
        };

        let user = match session::current_user(self.session.as_ref()) {
            Ok(user) => user,
            Err(err) => {
                tracing::error!(
                    error = %err,
                    code = err.code(),
                    "cannot read the session user, receipt upload skipped"
                );
                return;
            }
        };

        let upload = ReceiptUpload {
            email: user.email,
            file_name: file.name.clone(),
            mime: file.mime.clone(),
            bytes: file.bytes,
        };

        match store.bills().create(upload).await {
            Ok(created) => {
                self.file_url = Some(created.file_url);
                self.bill_id = Some(created.key);
                self.file_name = Some(file.name);
            }
            Err(err) => {
                // Non-fatal for the form: the bill simply stays unfinished.
                tracing::error!(error = %err, "receipt upload failed");
            }
        }
    }

    /// Submit the filled form.
    ///
    /// The host prevents the default form submission before delegating here.
    /// Success redirects to the bill list; a store rejection is logged and
    /// the user stays on the form, free to resubmit.
    pub async fn handle_submit(&mut self) {
        let Some(store) = &self.store else {
            tracing::warn!("no store bound, bill submission skipped");
            return;
        };

        let Some(bill_id) = self.bill_id.clone() else {
            let err = BilledError::ReceiptNotUploaded;
            tracing::error!(error = %err, code = err.code(), "bill submission skipped");
            return;
        };

        let user = match session::current_user(self.session.as_ref()) {
            Ok(user) => user,
            Err(err) => {
                tracing::error!(
                    error = %err,
                    code = err.code(),
                    "cannot read the session user, bill submission skipped"
                );
                return;
            }
        };

        let form = self.page.form_snapshot();
        let amount = form.amount_value();
        let vat = form.vat_value();
        let pct = form.pct_value();
        let commentary = form.commentary_value();
        let payload = BillPayload {
            email: user.email,
            bill_type: form.bill_type,
            name: form.name,
            amount,
            date: form.date,
            vat,
            pct,
            commentary,
            file_url: self.file_url.clone(),
            file_name: self.file_name.clone(),
            status: BillStatus::Pending,
        };

        match store.bills().update(&bill_id, payload).await {
            Ok(_) => self.navigator.navigate(Route::Bills),
            Err(err) => {
                tracing::error!(error = %err, "failed to persist the bill");
            }
        }
    }
}
