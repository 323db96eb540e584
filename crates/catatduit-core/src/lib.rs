//! Core library for CatatDuit transaction parsing.
//!
//! This crate provides:
//! - Indonesian free-text transaction parsing (intent, amount, category,
//!   wallet, confidence)
//! - Rule-based receipt extraction from OCR text (merchant, total, line
//!   items, date, confidence)
//! - Shared Rupiah amount normalization
//! - A seedable synthetic-receipt generator for demo mode
//!
//! Both parsers are pure and stateless: they never fail on malformed input,
//! degrading to low-confidence results instead, and may be called
//! concurrently without coordination. The only hard failure in this crate is
//! the recognition capability being absent ([`RecognitionError`]).

pub mod amount;
pub mod error;
pub mod models;
pub mod nlp;
pub mod receipt;

pub use amount::{format_rupiah, normalize_amount};
pub use error::{CatatduitError, RecognitionError, Result};
pub use models::{ExtractionConfig, Intent, ParsedTransaction, ReceiptData, ReceiptItem};
pub use nlp::{KeywordRule, TransactionParser};
pub use receipt::{
    FallbackGenerator, ReceiptScanner, ReceiptTextParser, TextRecognizer, FALLBACK_CONFIDENCE,
};
