//! Parsed-transaction model for the free-text parser.

use serde::{Deserialize, Serialize};

/// Classification of a transaction direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// Money going out (default when nothing else matches).
    Expense,
    /// Money coming in.
    Income,
    /// Movement between the user's own wallets.
    Transfer,
}

impl Default for Intent {
    fn default() -> Self {
        Self::Expense
    }
}

/// Structured interpretation of a free-text transaction message.
///
/// Constructed fresh per input string and immutable afterwards; the caller
/// owns persistence. `amount == 0` means no amount was detected and the
/// caller must reject the message rather than record a zero-value
/// transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedTransaction {
    /// Transaction direction.
    pub intent: Intent,

    /// Amount in whole Rupiah (no decimals). Zero signals "not detected".
    pub amount: u64,

    /// Category label from the keyword table, or "Lainnya".
    pub category: String,

    /// Detected payment instrument, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet: Option<String>,

    /// The original input text, preserved verbatim.
    pub description: String,

    /// Heuristic trust score in [0, 1], rounded to 2 decimals.
    pub confidence: f32,
}

impl ParsedTransaction {
    /// Whether the caller should reject this result and ask the user to
    /// rephrase.
    pub fn needs_retry(&self) -> bool {
        self.amount == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Intent::Income).unwrap(), "\"income\"");
        assert_eq!(serde_json::to_string(&Intent::Expense).unwrap(), "\"expense\"");
        assert_eq!(serde_json::to_string(&Intent::Transfer).unwrap(), "\"transfer\"");
    }

    #[test]
    fn test_wallet_omitted_when_absent() {
        let parsed = ParsedTransaction {
            intent: Intent::Expense,
            amount: 15000,
            category: "Makanan".to_string(),
            wallet: None,
            description: "beli bakso 15rb".to_string(),
            confidence: 0.95,
        };

        let json = serde_json::to_string(&parsed).unwrap();
        assert!(!json.contains("wallet"));
        assert!(json.contains("\"amount\":15000"));
    }
}
