//! Shared test harness for the controller integration tests
//!
//! Provides a scriptable mock store recording every call it receives,
//! recording implementations of the navigation/page/modal seams, a log
//! capture helper, and bill fixtures shaped like the remote store's records.

#![allow(dead_code)]

use billed::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// ---------------------------------------------------------------------------
// Mock store
// ---------------------------------------------------------------------------

/// Scriptable bill resource.
///
/// Defaults mirror a healthy remote store: `list` resolves empty, `create`
/// answers with a fixed receipt URL and key, `update` echoes the payload.
/// The `failing_*` constructors flip one operation into a rejection carrying
/// the given message verbatim.
pub struct MockBillResource {
    list_response: Mutex<Result<Vec<Bill>, String>>,
    create_response: Mutex<Result<CreatedReceipt, String>>,
    update_rejection: Mutex<Option<String>>,
    pub list_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
    pub created: Mutex<Vec<ReceiptUpload>>,
    pub updated: Mutex<Vec<(String, BillPayload)>>,
}

impl Default for MockBillResource {
    fn default() -> Self {
        Self {
            list_response: Mutex::new(Ok(Vec::new())),
            create_response: Mutex::new(Ok(CreatedReceipt {
                file_url: "https://localhost:3456/images/test.jpg".to_string(),
                key: "1234".to_string(),
            })),
            update_rejection: Mutex::new(None),
            list_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
            created: Mutex::new(Vec::new()),
            updated: Mutex::new(Vec::new()),
        }
    }
}

impl MockBillResource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_bills(bills: Vec<Bill>) -> Arc<Self> {
        let resource = Self::default();
        *resource.list_response.lock().unwrap() = Ok(bills);
        Arc::new(resource)
    }

    pub fn failing_list(message: &str) -> Arc<Self> {
        let resource = Self::default();
        *resource.list_response.lock().unwrap() = Err(message.to_string());
        Arc::new(resource)
    }

    pub fn failing_create(message: &str) -> Arc<Self> {
        let resource = Self::default();
        *resource.create_response.lock().unwrap() = Err(message.to_string());
        Arc::new(resource)
    }

    pub fn failing_update(message: &str) -> Arc<Self> {
        let resource = Self::default();
        *resource.update_rejection.lock().unwrap() = Some(message.to_string());
        Arc::new(resource)
    }
}

#[async_trait]
impl BillResource for MockBillResource {
    async fn list(&self) -> Result<Vec<Bill>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        match &*self.list_response.lock().unwrap() {
            Ok(bills) => Ok(bills.clone()),
            Err(message) => Err(anyhow::anyhow!("{message}")),
        }
    }

    async fn create(&self, upload: ReceiptUpload) -> Result<CreatedReceipt> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.created.lock().unwrap().push(upload);
        match &*self.create_response.lock().unwrap() {
            Ok(receipt) => Ok(receipt.clone()),
            Err(message) => Err(anyhow::anyhow!("{message}")),
        }
    }

    async fn update(&self, selector: &str, payload: BillPayload) -> Result<Bill> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.updated
            .lock()
            .unwrap()
            .push((selector.to_string(), payload.clone()));
        if let Some(message) = &*self.update_rejection.lock().unwrap() {
            return Err(anyhow::anyhow!("{message}"));
        }
        Ok(Bill {
            id: selector.to_string(),
            email: payload.email,
            bill_type: payload.bill_type,
            name: payload.name,
            amount: payload.amount,
            date: payload.date,
            vat: payload.vat,
            pct: Some(payload.pct),
            commentary: payload.commentary,
            file_url: payload.file_url,
            file_name: payload.file_name,
            status: payload.status,
            comment_admin: None,
        })
    }
}

/// Wrap a mock resource behind the store seam
pub struct MockStore {
    resource: Arc<MockBillResource>,
}

impl MockStore {
    pub fn wrap(resource: &Arc<MockBillResource>) -> Arc<dyn Store> {
        Arc::new(Self {
            resource: Arc::clone(resource),
        })
    }
}

impl Store for MockStore {
    fn bills(&self) -> Arc<dyn BillResource> {
        Arc::clone(&self.resource) as Arc<dyn BillResource>
    }
}

// ---------------------------------------------------------------------------
// Navigation, session, and page fakes
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn visited(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

pub struct MemorySession {
    items: Mutex<HashMap<String, String>>,
}

impl MemorySession {
    /// Session of a logged-in employee, the way the login flow writes it
    pub fn employee() -> Arc<Self> {
        Self::with_user(r#"{"type":"Employee","email":"employee@test.tld"}"#)
    }

    pub fn with_user(raw: &str) -> Arc<Self> {
        let mut items = HashMap::new();
        items.insert("user".to_string(), raw.to_string());
        Arc::new(Self {
            items: Mutex::new(items),
        })
    }

    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            items: Mutex::new(HashMap::new()),
        })
    }
}

impl SessionStorage for MemorySession {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().unwrap().get(key).cloned()
    }
}

#[derive(Default)]
pub struct FakeNewBillPage {
    file: Mutex<Option<SelectedFile>>,
    form: Mutex<FormSnapshot>,
    alerts: Mutex<Vec<String>>,
    pub cleared: AtomicUsize,
}

impl FakeNewBillPage {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn select_file(&self, name: &str, mime: Option<&str>) {
        *self.file.lock().unwrap() = Some(SelectedFile {
            name: name.to_string(),
            mime: mime.map(str::to_string),
            bytes: b"dummy content".to_vec(),
        });
    }

    pub fn fill(&self, form: FormSnapshot) {
        *self.form.lock().unwrap() = form;
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn selected(&self) -> Option<SelectedFile> {
        self.file.lock().unwrap().clone()
    }
}

impl NewBillPage for FakeNewBillPage {
    fn selected_file(&self) -> Option<SelectedFile> {
        self.file.lock().unwrap().clone()
    }

    fn clear_file_input(&self) {
        self.cleared.fetch_add(1, Ordering::SeqCst);
        *self.file.lock().unwrap() = None;
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn form_snapshot(&self) -> FormSnapshot {
        self.form.lock().unwrap().clone()
    }
}

#[derive(Default)]
pub struct FakeModal {
    bodies: Mutex<Vec<String>>,
    shows: AtomicUsize,
}

impl FakeModal {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn bodies(&self) -> Vec<String> {
        self.bodies.lock().unwrap().clone()
    }

    pub fn show_count(&self) -> usize {
        self.shows.load(Ordering::SeqCst)
    }
}

impl ModalPresenter for FakeModal {
    fn width(&self) -> u32 {
        400
    }

    fn inject_body(&self, html: &str) {
        self.bodies.lock().unwrap().push(html.to_string());
    }

    fn show(&self) {
        self.shows.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct FixedIcon {
    url: Option<String>,
}

impl FixedIcon {
    pub fn with_url(url: &str) -> Self {
        Self {
            url: Some(url.to_string()),
        }
    }

    pub fn without_url() -> Self {
        Self { url: None }
    }
}

impl ReceiptIcon for FixedIcon {
    fn bill_url(&self) -> Option<String> {
        self.url.clone()
    }
}

// ---------------------------------------------------------------------------
// Log capture
// ---------------------------------------------------------------------------

/// `io::Write` sink collecting formatted log lines in memory
#[derive(Clone, Default)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Install a thread-default subscriber capturing everything the controllers
/// log; keep the guard alive for the duration of the test.
pub fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(buffer.clone())
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn bill(id: &str, bill_type: &str, name: &str, amount: f64, date: &str, status: BillStatus) -> Bill {
    Bill {
        id: id.to_string(),
        email: "a@a".to_string(),
        bill_type: bill_type.to_string(),
        name: name.to_string(),
        amount,
        date: date.to_string(),
        vat: Some(70.0),
        pct: Some(20),
        commentary: None,
        file_url: Some(format!("https://test.storage.tld/receipts/{id}.jpg")),
        file_name: Some(format!("{id}.jpg")),
        status,
        comment_admin: None,
    }
}

/// Four bills in non-chronological order, the shape the remote store
/// actually hands back
pub fn bill_fixtures() -> Vec<Bill> {
    vec![
        bill(
            "47qAXb6fIm2zOKkLzMro",
            "Hôtel et logement",
            "encore",
            400.0,
            "2004-04-04",
            BillStatus::Pending,
        ),
        bill(
            "BeKy5Mo4jkmdfPGYpTxZ",
            "Transports",
            "test1",
            100.0,
            "2001-01-01",
            BillStatus::Refused,
        ),
        bill(
            "UIUZtnPQvnbFnB0ozvJh",
            "Services en ligne",
            "test3",
            300.0,
            "2003-03-03",
            BillStatus::Accepted,
        ),
        bill(
            "qcCK3SzECmaZAGRrHjaC",
            "Restaurants et bars",
            "test2",
            200.0,
            "2002-02-02",
            BillStatus::Refused,
        ),
    ]
}
