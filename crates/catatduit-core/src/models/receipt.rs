//! Receipt data model produced by the receipt extractor.

use serde::{Deserialize, Serialize};

/// A single line item recognized on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptItem {
    /// Item name as printed (cleaned of trailing punctuation).
    pub name: String,

    /// Quantity, at least 1.
    pub quantity: u32,

    /// Unit price in whole Rupiah, always positive.
    pub price: u64,

    /// Auto-assigned category, "Lainnya" when nothing matches.
    pub category: String,
}

/// Structured interpretation of a receipt.
///
/// `total == 0` is the caller-visible signal that extraction failed and the
/// transaction needs manual entry; it must never be recorded as a zero-value
/// transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptData {
    /// Best-guess store/vendor name, title-cased.
    pub merchant: Option<String>,

    /// Total amount in whole Rupiah. Zero means "could not determine".
    pub total: u64,

    /// Recognized line items, in document order. May be empty.
    pub items: Vec<ReceiptItem>,

    /// Transaction date as printed, shape-checked only (D/M/YY(YY) or
    /// YYYY-M-D).
    pub date: Option<String>,

    /// Heuristic trust score in [0, 1]: 0.2 merchant + 0.5 total
    /// + 0.2 items + 0.1 date.
    pub confidence: f32,

    /// Full recognized text, preserved for audit and debugging.
    #[serde(rename = "rawText")]
    pub raw_text: String,
}

impl ReceiptData {
    /// An empty result for text that yielded nothing usable.
    pub fn empty(raw_text: impl Into<String>) -> Self {
        Self {
            merchant: None,
            total: 0,
            items: Vec::new(),
            date: None,
            confidence: 0.0,
            raw_text: raw_text.into(),
        }
    }

    /// Whether the caller should fall back to manual entry.
    pub fn needs_manual_entry(&self) -> bool {
        self.total == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_text_field_name() {
        let receipt = ReceiptData::empty("INDOMARET\nTotal: Rp 45.000");
        let json = serde_json::to_string(&receipt).unwrap();
        assert!(json.contains("\"rawText\""));
        assert!(!json.contains("\"raw_text\""));
    }

    #[test]
    fn test_empty_needs_manual_entry() {
        let receipt = ReceiptData::empty("");
        assert!(receipt.needs_manual_entry());
        assert_eq!(receipt.confidence, 0.0);
        assert!(receipt.items.is_empty());
    }
}
