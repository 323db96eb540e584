//! Free-text Indonesian transaction parser.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::amount::normalize_amount;
use crate::models::transaction::{Intent, ParsedTransaction};

use super::keywords::{
    default_categories, default_wallets, KeywordRule, EXPENSE_KEYWORDS, INCOME_KEYWORDS,
    TRANSFER_KEYWORDS,
};

lazy_static! {
    // "15rb", "15 ribu", "15k"
    static ref AMOUNT_RB: Regex = Regex::new(r"(\d+)\s*(?:rb|ribu|k)").unwrap();

    // "5jt", "1,5jt", "2.5 juta"
    static ref AMOUNT_JT: Regex = Regex::new(r"(\d+(?:[.,]\d+)?)\s*(?:jt|juta)").unwrap();

    // Plain literal amount: first run of at least 4 digits.
    static ref AMOUNT_PLAIN: Regex = Regex::new(r"(\d{4,})").unwrap();
}

/// Rule-based parser for short Indonesian transaction messages.
///
/// Pure and stateless: `parse` never fails and may be called concurrently.
/// The keyword tables are configuration; swap them with the builders when
/// the defaults don't fit.
pub struct TransactionParser {
    categories: Vec<KeywordRule>,
    wallets: Vec<KeywordRule>,
}

impl TransactionParser {
    /// Create a parser with the default Indonesian keyword tables.
    pub fn new() -> Self {
        Self {
            categories: default_categories(),
            wallets: default_wallets(),
        }
    }

    /// Replace the category table. Order is first-match-wins.
    pub fn with_categories(mut self, categories: Vec<KeywordRule>) -> Self {
        self.categories = categories;
        self
    }

    /// Replace the wallet table. Order is first-match-wins.
    pub fn with_wallets(mut self, wallets: Vec<KeywordRule>) -> Self {
        self.wallets = wallets;
        self
    }

    /// Parse a message into a structured transaction.
    ///
    /// Always returns a result; `amount == 0` signals that no amount was
    /// detected and the caller should ask the user to retry.
    pub fn parse(&self, text: &str) -> ParsedTransaction {
        let lower = text.to_lowercase().trim().to_string();

        let (intent, intent_conf) = self.extract_intent(&lower);
        let (amount, amount_conf) = extract_amount(&lower);
        let (category, category_conf) = self.extract_category(&lower, intent);
        let wallet = self.extract_wallet(&lower);

        // Sub-confidences stay f64 until the final cast; an f32 0.95 sits
        // just below 0.95 and drags boundary sums like 0.875 down to 0.87.
        let confidence = intent_conf * 0.3 + amount_conf * 0.4 + category_conf * 0.3;
        let confidence = ((confidence * 100.0).round() / 100.0) as f32;

        debug!(
            intent = ?intent,
            amount,
            category = %category,
            confidence,
            "parsed transaction message"
        );

        ParsedTransaction {
            intent,
            amount,
            category,
            wallet,
            description: text.to_string(),
            confidence,
        }
    }

    /// Intent bands are checked in fixed priority order: income, then
    /// transfer, then expense. The first band with a keyword hit wins.
    fn extract_intent(&self, text: &str) -> (Intent, f64) {
        if INCOME_KEYWORDS.iter().any(|k| text.contains(k)) {
            return (Intent::Income, 0.95);
        }
        if TRANSFER_KEYWORDS.iter().any(|k| text.contains(k)) {
            return (Intent::Transfer, 0.90);
        }
        if EXPENSE_KEYWORDS.iter().any(|k| text.contains(k)) {
            return (Intent::Expense, 0.95);
        }

        (Intent::Expense, 0.70)
    }

    fn extract_category(&self, text: &str, intent: Intent) -> (String, f64) {
        for rule in &self.categories {
            if rule.matches(text) {
                return (rule.label.clone(), 0.95);
            }
        }

        // Income with no explicit keyword defaults to "Pemasukan".
        if intent == Intent::Income {
            return ("Pemasukan".to_string(), 0.80);
        }

        ("Lainnya".to_string(), 0.50)
    }

    fn extract_wallet(&self, text: &str) -> Option<String> {
        self.wallets
            .iter()
            .find(|rule| rule.matches(text))
            .map(|rule| rule.label.clone())
    }
}

impl Default for TransactionParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Amount patterns in fixed precedence: thousands shorthand, then millions
/// shorthand, then a literal digit run. First success wins.
fn extract_amount(text: &str) -> (u64, f64) {
    if let Some(caps) = AMOUNT_RB.captures(text) {
        if let Ok(n) = caps[1].parse::<u64>() {
            return (n.saturating_mul(1_000), 0.95);
        }
    }

    if let Some(caps) = AMOUNT_JT.captures(text) {
        let number = caps[1].replace(',', ".");
        if let Ok(n) = number.parse::<f64>() {
            return ((n * 1_000_000.0).round() as u64, 0.95);
        }
    }

    if let Some(caps) = AMOUNT_PLAIN.captures(text) {
        if let Some(n) = normalize_amount(&caps[1]) {
            return (n, 0.85);
        }
    }

    (0, 0.0)
}
