pub mod account;
pub mod pii;

pub use account::{Account, AccountProvider, AccountSession};
pub use pii::Masked;
