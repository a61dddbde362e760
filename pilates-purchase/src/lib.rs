pub mod ledger;
pub mod models;

pub use ledger::{PurchaseError, PurchaseLedger};
pub use models::PurchaseRecord;
