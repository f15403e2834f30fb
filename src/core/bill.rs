//! Bill record and its wire representation

use serde::{Deserialize, Serialize};

/// Lifecycle status of a bill.
///
/// Assigned server-side: the core only ever attaches [`BillStatus::Pending`]
/// at submission; `accepted` and `refused` come back from the store after an
/// administrator ruled on the bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    /// French display label used by the list projection
    pub fn label(&self) -> &'static str {
        match self {
            BillStatus::Pending => "En attente",
            BillStatus::Accepted => "Accepté",
            BillStatus::Refused => "Refusé",
        }
    }
}

/// An employee expense report as stored remotely.
///
/// Field names follow the store's camelCase wire format; `type` is mapped to
/// `bill_type` because of the Rust keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// Opaque identifier, assigned by the store on creation
    pub id: String,
    /// Owner, taken from the session at creation time
    pub email: String,
    /// Expense category (free-form string from a fixed set)
    #[serde(rename = "type")]
    pub bill_type: String,
    pub name: String,
    /// Amount in currency units
    pub amount: f64,
    /// Calendar date, ISO-like (`YYYY-MM-DD`). Kept as a string: corrupt
    /// values coming back from the store must survive listing untouched.
    pub date: String,
    #[serde(default)]
    pub vat: Option<f64>,
    #[serde(default)]
    pub pct: Option<u32>,
    #[serde(default)]
    pub commentary: Option<String>,
    /// URL of the uploaded receipt; null until the upload completed
    #[serde(default)]
    pub file_url: Option<String>,
    /// Original receipt file name; null until the upload completed
    #[serde(default)]
    pub file_name: Option<String>,
    pub status: BillStatus,
    /// Set by an administrator when ruling on the bill
    #[serde(default)]
    pub comment_admin: Option<String>,
}

/// Body of the update phase: everything the creation form collects,
/// addressed to the id minted by the receipt upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPayload {
    pub email: String,
    #[serde(rename = "type")]
    pub bill_type: String,
    pub name: String,
    pub amount: f64,
    pub date: String,
    pub vat: Option<f64>,
    pub pct: u32,
    pub commentary: Option<String>,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub status: BillStatus,
}
