//! Page-surface capabilities consumed by the controllers
//!
//! Every DOM touchpoint is a trait the host implements, so the controllers
//! never see a concrete widget tree and tests can stand in for the page.

use crate::core::receipt::SelectedFile;

/// Raw field values of the creation form, read in one shot at submit time.
///
/// Values stay strings the way the page carries them; the numeric accessors
/// apply the product's lenient coercions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSnapshot {
    pub bill_type: String,
    pub name: String,
    pub amount: String,
    pub date: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

impl FormSnapshot {
    /// Amount in currency units; an unreadable value counts as zero
    pub fn amount_value(&self) -> f64 {
        self.amount.trim().parse().unwrap_or(0.0)
    }

    /// VAT, absent when the field is empty or unreadable
    pub fn vat_value(&self) -> Option<f64> {
        self.vat.trim().parse().ok()
    }

    /// Percentage, defaulting to 20 the way the product always has
    pub fn pct_value(&self) -> u32 {
        self.pct.trim().parse().unwrap_or(20)
    }

    /// Commentary, absent when the field is blank
    pub fn commentary_value(&self) -> Option<String> {
        let trimmed = self.commentary.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

/// The creation view's surface: file input, form fields, blocking alert
pub trait NewBillPage: Send + Sync {
    /// File currently selected in the receipt input, if any
    fn selected_file(&self) -> Option<SelectedFile>;

    /// Reset the receipt input so no invalid file lingers visibly selected
    fn clear_file_input(&self);

    /// Blocking user alert
    fn alert(&self, message: &str);

    /// Read the current form field values as a plain record
    fn form_snapshot(&self) -> FormSnapshot;
}

/// The receipt preview modal: an imperative presentation surface with a
/// single `show` operation
pub trait ModalPresenter: Send + Sync {
    /// Rendered width, used to size the injected image
    fn width(&self) -> u32;

    /// Replace the modal body's markup
    fn inject_body(&self, html: &str);

    /// Present the modal
    fn show(&self);
}

/// A clicked list-row icon carrying the receipt URL attribute
pub trait ReceiptIcon {
    fn bill_url(&self) -> Option<String>;
}
