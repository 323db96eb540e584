//! Line-item extraction from receipt text.

use tracing::debug;

use crate::amount::normalize_amount;
use crate::models::config::ExtractionConfig;
use crate::models::receipt::ReceiptItem;
use crate::nlp::keywords::KeywordRule;

use super::patterns::{
    ADDRESS_LINE, BARCODE, ITEM_AT_PRICE, ITEM_NAME_PRICE, ITEM_PRICE_QTY, ITEM_QTY_X_PRICE,
    NOISE_LINE_KEYWORDS, NOISE_NAME_KEYWORDS, PHONE_LINE, PURE_DATETIME, SOCIAL,
};

/// Default item-category table for receipt lines. Ordered, first-match-wins.
pub fn default_item_categories() -> Vec<KeywordRule> {
    vec![
        KeywordRule::new(
            "Makanan",
            &["nasi", "mie", "roti", "kue", "snack", "ayam", "sate", "bakso", "gorengan"],
        ),
        KeywordRule::new(
            "Minuman",
            &["kopi", "teh", "jus", "air", "susu", "minuman", "es"],
        ),
        KeywordRule::new(
            "Keperluan Rumah Tangga",
            &["sabun", "detergen", "shampo", "tissue", "pasta gigi"],
        ),
        KeywordRule::new("Belanja", &["baju", "celana", "sepatu", "tas"]),
    ]
}

/// Extract plausible line items, skipping headers, footers, promotions, and
/// other receipt noise.
pub fn extract_items(
    text: &str,
    config: &ExtractionConfig,
    categories: &[KeywordRule],
) -> Vec<ReceiptItem> {
    let mut items = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || is_noise_line(line, config) {
            continue;
        }

        if let Some((name, quantity, price)) = match_item_line(line) {
            if let Some(item) = accept_item(name, quantity, price, config, categories) {
                items.push(item);
            }
        }
    }

    debug!(count = items.len(), "extracted line items");
    items
}

/// Try the item shapes in fixed order; first match wins.
/// Returns (raw name, quantity, price).
fn match_item_line(line: &str) -> Option<(&str, u32, u64)> {
    if let Some(caps) = ITEM_QTY_X_PRICE.captures(line) {
        let quantity = caps[2].parse().ok()?;
        let price = normalize_amount(&caps[3])?;
        return Some((caps.get(1).unwrap().as_str(), quantity, price));
    }

    if let Some(caps) = ITEM_PRICE_QTY.captures(line) {
        let price = normalize_amount(&caps[2])?;
        let quantity = caps[3].parse().ok()?;
        return Some((caps.get(1).unwrap().as_str(), quantity, price));
    }

    if let Some(caps) = ITEM_NAME_PRICE.captures(line) {
        let price = normalize_amount(&caps[2])?;
        return Some((caps.get(1).unwrap().as_str(), 1, price));
    }

    if let Some(caps) = ITEM_AT_PRICE.captures(line) {
        let price = normalize_amount(&caps[2])?;
        return Some((caps.get(1).unwrap().as_str(), 1, price));
    }

    None
}

/// Post-filter a matched line: clean the name and enforce the plausible
/// bounds for names, prices, and quantities.
fn accept_item(
    raw_name: &str,
    quantity: u32,
    price: u64,
    config: &ExtractionConfig,
    categories: &[KeywordRule],
) -> Option<ReceiptItem> {
    let name = clean_name(raw_name);
    let name_lower = name.to_lowercase();

    if name.len() < 3 || name.len() > 50 {
        return None;
    }
    if !name.chars().any(|c| c.is_alphabetic()) {
        return None;
    }
    if NOISE_NAME_KEYWORDS.iter().any(|k| name_lower.contains(k)) {
        return None;
    }
    if !config.price_in_range(price) {
        return None;
    }
    if quantity < 1 || quantity > config.max_item_quantity {
        return None;
    }

    let category = categories
        .iter()
        .find(|rule| rule.matches(&name_lower))
        .map(|rule| rule.label.clone())
        .unwrap_or_else(|| "Lainnya".to_string());

    Some(ReceiptItem {
        name,
        quantity,
        price,
        category,
    })
}

/// Whether a line is receipt noise rather than a candidate item.
fn is_noise_line(line: &str, config: &ExtractionConfig) -> bool {
    if line.len() > config.max_item_line_len {
        return true;
    }
    if !line.chars().any(|c| c.is_alphanumeric()) {
        return true;
    }

    let lower = line.to_lowercase();
    if NOISE_LINE_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return true;
    }

    PURE_DATETIME.is_match(line)
        || BARCODE.is_match(line)
        || ADDRESS_LINE.is_match(line)
        || PHONE_LINE.is_match(line)
        || SOCIAL.is_match(line)
}

fn clean_name(raw: &str) -> String {
    raw.trim()
        .trim_end_matches(['-', ':', '.', ',', '*', '@'])
        .trim()
        .to_string()
}
