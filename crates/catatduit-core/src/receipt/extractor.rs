//! Rule-based receipt text extraction.

use tracing::debug;

use crate::amount::normalize_amount;
use crate::models::config::ExtractionConfig;
use crate::models::receipt::ReceiptData;
use crate::nlp::keywords::KeywordRule;

use super::items::{default_item_categories, extract_items};
use super::patterns::{
    ADDRESS_LINE, BARCODE, DATE_DMY, DATE_YMD, DIGIT_RUN, HEADER_WORDS, MERCHANT_PATTERNS,
    PHONE_LINE, PURE_DATETIME, TOTAL_LABELED, TOTAL_NEARBY, TOTAL_PAID, TRAILING_RP,
};

/// Rule-based parser for OCR-recognized receipt text.
///
/// Pure and stateless: `parse` never fails, worst case is a zero-confidence
/// result with `total == 0`.
pub struct ReceiptTextParser {
    config: ExtractionConfig,
    item_categories: Vec<KeywordRule>,
}

impl ReceiptTextParser {
    /// Create a parser with default bounds and item-category table.
    pub fn new() -> Self {
        Self {
            config: ExtractionConfig::default(),
            item_categories: default_item_categories(),
        }
    }

    /// Replace the extraction bounds.
    pub fn with_config(mut self, config: ExtractionConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the item-category table. Order is first-match-wins.
    pub fn with_item_categories(mut self, categories: Vec<KeywordRule>) -> Self {
        self.item_categories = categories;
        self
    }

    /// Parse noisy multi-line OCR text into structured receipt data.
    pub fn parse(&self, text: &str) -> ReceiptData {
        let merchant = self.extract_merchant(text);
        let total = self.extract_total(text);
        let items = extract_items(text, &self.config, &self.item_categories);
        let date = extract_date(text);

        // Additive indicator weights, summed in f64 so 0.2+0.5+0.2+0.1
        // reaches exactly 1.0 as an f32.
        let mut confidence = 0.0f64;
        if merchant.is_some() {
            confidence += 0.2;
        }
        if total > 0 {
            confidence += 0.5;
        }
        if !items.is_empty() {
            confidence += 0.2;
        }
        if date.is_some() {
            confidence += 0.1;
        }
        let confidence = confidence as f32;

        debug!(
            merchant = merchant.as_deref().unwrap_or("-"),
            total,
            items = items.len(),
            confidence,
            "parsed receipt text"
        );

        ReceiptData {
            merchant,
            total,
            items,
            date,
            confidence,
            raw_text: text.to_string(),
        }
    }

    /// Known-merchant table first, scored by position and specificity; then
    /// a scan of the leading lines for a plausible store name.
    fn extract_merchant(&self, text: &str) -> Option<String> {
        let mut best: Option<(i32, String)> = None;

        for pattern in MERCHANT_PATTERNS.iter() {
            if let Some(m) = pattern.find(text) {
                // Receipts put the store name near the top, and longer
                // matches are more specific.
                let position_bonus = if m.start() < 100 {
                    50
                } else if m.start() < 300 {
                    30
                } else {
                    0
                };
                let score = 100 + position_bonus + 2 * m.len() as i32;

                if best.as_ref().map_or(true, |(s, _)| score > *s) {
                    best = Some((score, title_case(m.as_str())));
                }
            }
        }

        if let Some((score, name)) = best {
            debug!(merchant = %name, score, "matched known merchant");
            return Some(name);
        }

        self.scan_store_name_line(text)
    }

    /// Look at the first few non-empty lines for something that reads like a
    /// store name: short, has letters, and is not an address, phone number,
    /// date, barcode, or receipt header.
    fn scan_store_name_line(&self, text: &str) -> Option<String> {
        text.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .take(self.config.merchant_scan_lines)
            .find(|line| {
                let lower = line.to_lowercase();
                line.len() >= 3
                    && line.len() <= 40
                    && line.chars().any(|c| c.is_alphabetic())
                    && !PURE_DATETIME.is_match(line)
                    && !ADDRESS_LINE.is_match(line)
                    && !PHONE_LINE.is_match(line)
                    && !DATE_DMY.is_match(line)
                    && !BARCODE.is_match(line)
                    && !HEADER_WORDS.iter().any(|w| lower.contains(w))
            })
            .map(title_case)
    }

    /// Candidate patterns by descending reliability, each with a base score;
    /// candidates near the bottom of the text get a bonus, since that is
    /// where totals conventionally sit.
    fn extract_total(&self, text: &str) -> u64 {
        let candidates: [(&regex::Regex, i32); 4] = [
            (&TOTAL_LABELED, 100),
            (&TOTAL_PAID, 90),
            (&TOTAL_NEARBY, 70),
            (&TRAILING_RP, 50),
        ];

        let bottom_cutoff = text.len().saturating_mul(7) / 10;
        let mut best: Option<(i32, u64)> = None;

        for (pattern, base) in candidates {
            for caps in pattern.captures_iter(text) {
                let Some(amount) = normalize_amount(&caps[1]) else {
                    continue;
                };
                if !self.config.total_in_range(amount) {
                    continue;
                }

                let pos = caps.get(0).unwrap().start();
                let score = base + if pos >= bottom_cutoff { 20 } else { 0 };

                if best.as_ref().map_or(true, |(s, _)| score > *s) {
                    best = Some((score, amount));
                }
            }
        }

        if let Some((score, amount)) = best {
            debug!(total = amount, score, "matched labeled total");
            return amount;
        }

        self.fallback_total(text)
    }

    /// No labeled total: take the largest plausible digit run, preferring
    /// runs whose line lies in the bottom half of the document.
    fn fallback_total(&self, text: &str) -> u64 {
        let midpoint = text.len() / 2;
        let mut best_bottom: u64 = 0;
        let mut best_overall: u64 = 0;

        for m in DIGIT_RUN.find_iter(text) {
            let Some(amount) = normalize_amount(m.as_str()) else {
                continue;
            };
            if !self.config.total_in_range(amount) {
                continue;
            }

            best_overall = best_overall.max(amount);
            // Classify by the containing line, not the run itself, so a run
            // at the end of a long top-half line stays in the top half.
            let line_start = text[..m.start()].rfind('\n').map_or(0, |p| p + 1);
            if line_start >= midpoint {
                best_bottom = best_bottom.max(amount);
            }
        }

        if best_bottom > 0 {
            best_bottom
        } else {
            best_overall
        }
    }
}

impl Default for ReceiptTextParser {
    fn default() -> Self {
        Self::new()
    }
}

/// First date-shaped match anywhere in the text, unvalidated beyond shape.
fn extract_date(text: &str) -> Option<String> {
    DATE_DMY
        .find(text)
        .or_else(|| DATE_YMD.find(text))
        .map(|m| m.as_str().to_string())
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const INDOMARET_RECEIPT: &str = "\
INDOMARET
Jl. Kemang Raya No. 8
Telp 021-7191234
12/03/2024 18:45
Nasi Goreng 2 x 15.000
Teh Botol 5.000
Sabun Lifebuoy 4.500
TOTAL : Rp 39.500
TUNAI 50.000
KEMBALI 10.500
Terima kasih atas kunjungan anda";

    #[test]
    fn test_full_receipt() {
        let parser = ReceiptTextParser::new();
        let receipt = parser.parse(INDOMARET_RECEIPT);

        assert_eq!(receipt.merchant.as_deref(), Some("Indomaret"));
        assert_eq!(receipt.total, 39_500);
        assert_eq!(receipt.items.len(), 3);
        assert_eq!(receipt.date.as_deref(), Some("12/03/2024"));
        assert_eq!(receipt.confidence, 1.0);
    }

    #[test]
    fn test_labeled_total_beats_numeric_noise() {
        let text = "\
Warung Pak Budi
Ayam Bakar 25.000
Es Teh 5.000
Total: Rp 45.000
NPWP 9912345678";

        let parser = ReceiptTextParser::new();
        let receipt = parser.parse(text);
        assert_eq!(receipt.total, 45_000);
    }

    #[test]
    fn test_merchant_from_known_table() {
        let parser = ReceiptTextParser::new();

        let receipt = parser.parse("ALFAMART MINIMARKET\nTotal: Rp 20.000");
        assert_eq!(receipt.merchant.as_deref(), Some("Alfamart"));

        let receipt = parser.parse("Kopi Kenangan Grand Indonesia\nTotal: Rp 36.000");
        assert_eq!(receipt.merchant.as_deref(), Some("Kopi Kenangan"));
    }

    #[test]
    fn test_merchant_from_leading_line() {
        let text = "\
Warung Makan Sederhana
Jl. Melati 4
Nasi Campur 18.000
Total: Rp 18.000";

        let parser = ReceiptTextParser::new();
        let receipt = parser.parse(text);
        assert_eq!(receipt.merchant.as_deref(), Some("Warung Makan Sederhana"));
    }

    #[test]
    fn test_header_line_not_taken_as_merchant() {
        let text = "\
STRUK PEMBELIAN
08/01/2025
Mie Ayam 12.000
Total: Rp 12.000";

        let parser = ReceiptTextParser::new();
        let receipt = parser.parse(text);
        // The header and date lines are skipped; the first plausible line
        // wins even when it carries a price.
        assert_eq!(receipt.merchant.as_deref(), Some("Mie Ayam 12.000"));
    }

    #[test]
    fn test_no_numeric_content() {
        let parser = ReceiptTextParser::new();
        let receipt = parser.parse("ALFAMART\nterima kasih");

        assert_eq!(receipt.total, 0);
        assert!(receipt.needs_manual_entry());
        assert!(receipt.confidence <= 0.3);
    }

    #[test]
    fn test_fallback_total_prefers_bottom_half() {
        // No labeled total; among plausible digit runs the largest one in
        // the bottom half wins.
        let text = "\
Toko Jaya
Barang A 20000
Barang B 15000
35000";

        let parser = ReceiptTextParser::new();
        let receipt = parser.parse(text);
        assert_eq!(receipt.total, 35_000);
    }

    #[test]
    fn test_fallback_total_classifies_runs_by_line() {
        // The 50000 run sits past the byte midpoint, but its line starts in
        // the top half; only the 2000 line is a bottom-half candidate.
        let text = "\
Daftar harga paket lengkap toko 50000
2000";

        let parser = ReceiptTextParser::new();
        let receipt = parser.parse(text);
        assert_eq!(receipt.total, 2_000);
    }

    #[test]
    fn test_empty_input() {
        let parser = ReceiptTextParser::new();
        let receipt = parser.parse("");

        assert_eq!(receipt.total, 0);
        assert!(receipt.items.is_empty());
        assert_eq!(receipt.merchant, None);
        assert_eq!(receipt.confidence, 0.0);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("INDOMARET"), "Indomaret");
        assert_eq!(title_case("kopi kenangan"), "Kopi Kenangan");
    }
}
