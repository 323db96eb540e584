//! Configuration for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Tunable bounds for receipt extraction.
///
/// Defaults encode the plausible ranges for Indonesian retail receipts; the
/// tables of category/wallet/merchant keywords live in
/// [`crate::nlp::keywords`] and [`crate::receipt`] and are injected through
/// the parser builders instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Smallest believable receipt total, in Rupiah.
    pub min_total: u64,

    /// Largest believable receipt total, in Rupiah.
    pub max_total: u64,

    /// Smallest believable line-item unit price, in Rupiah.
    pub min_item_price: u64,

    /// Largest believable line-item unit price, in Rupiah.
    pub max_item_price: u64,

    /// Largest believable line-item quantity.
    pub max_item_quantity: u32,

    /// How many leading lines to scan for a store name when no known
    /// merchant pattern matches.
    pub merchant_scan_lines: usize,

    /// Lines longer than this are treated as noise, not items.
    pub max_item_line_len: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_total: 1_000,
            max_total: 10_000_000,
            min_item_price: 100,
            max_item_price: 1_000_000,
            max_item_quantity: 100,
            merchant_scan_lines: 5,
            max_item_line_len: 60,
        }
    }
}

impl ExtractionConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }

    /// Whether an amount is a believable receipt total.
    pub fn total_in_range(&self, amount: u64) -> bool {
        (self.min_total..=self.max_total).contains(&amount)
    }

    /// Whether a unit price is a believable line-item price.
    pub fn price_in_range(&self, price: u64) -> bool {
        (self.min_item_price..=self.max_item_price).contains(&price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ranges() {
        let config = ExtractionConfig::default();
        assert!(config.total_in_range(45_000));
        assert!(!config.total_in_range(999));
        assert!(!config.total_in_range(10_000_001));
        assert!(config.price_in_range(100));
        assert!(!config.price_in_range(99));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ExtractionConfig = serde_json::from_str(r#"{"min_total": 500}"#).unwrap();
        assert_eq!(config.min_total, 500);
        assert_eq!(config.max_total, 10_000_000);
    }
}
