//! Core module containing the domain model and the capability seams

pub mod bill;
pub mod error;
pub mod format;
pub mod navigation;
pub mod receipt;
pub mod session;
pub mod store;
pub mod view;

pub use bill::{Bill, BillPayload, BillStatus};
pub use error::BilledError;
pub use navigation::{Navigator, Route};
pub use receipt::SelectedFile;
pub use session::{SessionStorage, SessionUser};
pub use store::{BillResource, CreatedReceipt, ReceiptUpload, Store};
pub use view::{FormSnapshot, ModalPresenter, NewBillPage, ReceiptIcon};
