//! Stateful controllers owning the bill lifecycle workflows

pub mod bills;
pub mod new_bill;

pub use bills::{BillRow, BillsController, BillsDependencies};
pub use new_bill::{NewBillController, NewBillDependencies};
