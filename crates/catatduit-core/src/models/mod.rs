//! Data models produced by the parsing components.

pub mod config;
pub mod receipt;
pub mod transaction;

pub use config::ExtractionConfig;
pub use receipt::{ReceiptData, ReceiptItem};
pub use transaction::{Intent, ParsedTransaction};
