//! Synthetic receipt generator for when no OCR engine is available.
//!
//! Output is explicitly non-authoritative: callers must present it as demo
//! data, never as a real extraction.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::models::receipt::{ReceiptData, ReceiptItem};

/// Fixed confidence of every synthetic receipt.
pub const FALLBACK_CONFIDENCE: f32 = 0.75;

const DEMO_MERCHANTS: &[&str] = &[
    "Warung Sumber Rejeki",
    "Toko Berkah Jaya",
    "Minimarket Sejahtera",
    "Kantin Bu Tini",
];

/// Item pool: name, category, price range in Rupiah.
const DEMO_ITEMS: &[(&str, &str, (u64, u64))] = &[
    ("Nasi Goreng", "Makanan", (12_000, 25_000)),
    ("Mie Ayam", "Makanan", (10_000, 20_000)),
    ("Roti Bakar", "Makanan", (8_000, 18_000)),
    ("Es Teh Manis", "Minuman", (3_000, 8_000)),
    ("Kopi Susu", "Minuman", (15_000, 28_000)),
    ("Air Mineral", "Minuman", (3_000, 6_000)),
    ("Sabun Mandi", "Keperluan Rumah Tangga", (4_000, 15_000)),
    ("Tissue Travel", "Keperluan Rumah Tangga", (5_000, 12_000)),
];

/// Generator of plausible synthetic receipts, driven by an injected RNG so
/// tests can pin the output.
pub struct FallbackGenerator {
    rng: StdRng,
}

impl FallbackGenerator {
    /// Generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for tests and reproducible demos.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Produce a synthetic receipt: 2-4 items from the pool, a total that is
    /// the exact item sum, today's date, and a fixed 0.75 confidence.
    pub fn generate(&mut self) -> ReceiptData {
        let merchant = DEMO_MERCHANTS[self.rng.gen_range(0..DEMO_MERCHANTS.len())];

        let item_count = self.rng.gen_range(2..=4);
        let mut items = Vec::with_capacity(item_count);
        for _ in 0..item_count {
            let (name, category, (lo, hi)) = DEMO_ITEMS[self.rng.gen_range(0..DEMO_ITEMS.len())];
            // Round to the nearest 500 so prices look like menu prices.
            let price = (self.rng.gen_range(lo..=hi) / 500).max(1) * 500;
            let quantity = self.rng.gen_range(1..=3);

            items.push(ReceiptItem {
                name: name.to_string(),
                quantity,
                price,
                category: category.to_string(),
            });
        }

        let total: u64 = items.iter().map(|i| u64::from(i.quantity) * i.price).sum();
        let date = Utc::now().date_naive().to_string();

        debug!(merchant, total, items = items.len(), "generated demo receipt");

        ReceiptData {
            merchant: Some(merchant.to_string()),
            total,
            items,
            date: Some(date),
            confidence: FALLBACK_CONFIDENCE,
            raw_text: "demo receipt (no OCR engine available)".to_string(),
        }
    }
}

impl Default for FallbackGenerator {
    fn default() -> Self {
        Self::new()
    }
}
