pub mod money;
pub mod receipt;

pub use money::Money;
pub use receipt::{Entry, ReceiptData};
