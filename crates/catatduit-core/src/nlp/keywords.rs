//! Keyword tables for Indonesian transaction text classification.
//!
//! Every table is an ordered list of rules evaluated first-match-wins:
//! overlapping keywords across labels ("beli" is both food-adjacent and a
//! shopping verb) are resolved by rule order, which is deliberate and part
//! of the contract. Never turn these into hash maps.

/// A classification rule: a label and the keywords that select it.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    /// Label assigned when any keyword matches.
    pub label: String,
    /// Substrings searched for in the lowercased input.
    pub keywords: Vec<String>,
}

impl KeywordRule {
    pub fn new(label: &str, keywords: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// First keyword of this rule found in `text`, if any.
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k.as_str()))
    }
}

/// Default category table. "Makanan" comes before "Belanja" so that
/// "beli bakso" lands on food, not shopping.
pub fn default_categories() -> Vec<KeywordRule> {
    vec![
        KeywordRule::new(
            "Makanan",
            &[
                "bakso", "nasi", "makan", "kopi", "jajan", "mie", "ayam", "sate", "gorengan",
                "es", "teh", "minuman", "snack", "cemilan", "sarapan", "lunch", "dinner",
                "breakfast", "gofood", "grabfood",
            ],
        ),
        KeywordRule::new(
            "Tagihan",
            &[
                "listrik", "air", "wifi", "internet", "pulsa", "token", "pln", "indihome",
                "telkom", "gas", "pdam", "kos", "sewa", "cicilan",
            ],
        ),
        KeywordRule::new(
            "Transportasi",
            &[
                "bensin", "parkir", "ojol", "gojek", "grab", "taxi", "bus", "kereta", "mrt",
                "lrt", "toll", "tol", "bbm", "pertamax",
            ],
        ),
        KeywordRule::new(
            "Keperluan Rumah Tangga",
            &[
                "sabun", "sikat gigi", "detergen", "shampo", "pasta gigi", "tissue", "pel",
                "sapu", "ember",
            ],
        ),
        KeywordRule::new(
            "Pemasukan",
            &[
                "gaji", "salary", "honor", "bonus", "transfer masuk", "terima", "dapat",
                "freelance", "proyek", "dividen",
            ],
        ),
        KeywordRule::new(
            "Belanja",
            &[
                "beli", "belanja", "shopping", "mall", "toko", "online", "shopee", "tokped",
                "lazada",
            ],
        ),
        KeywordRule::new(
            "Hiburan",
            &["nonton", "bioskop", "game", "spotify", "netflix", "youtube", "konser"],
        ),
        KeywordRule::new(
            "Kesehatan",
            &["obat", "dokter", "rumah sakit", "apotek", "vitamin"],
        ),
    ]
}

/// Default wallet table. E-wallets first, then banks, then cash.
pub fn default_wallets() -> Vec<KeywordRule> {
    vec![
        KeywordRule::new("GoPay", &["gopay", "go-pay"]),
        KeywordRule::new("OVO", &["ovo"]),
        KeywordRule::new("Dana", &["dana"]),
        KeywordRule::new("ShopeePay", &["shopeepay", "shopee pay"]),
        KeywordRule::new("Bank BCA", &["bca"]),
        KeywordRule::new("Bank BRI", &["bri"]),
        KeywordRule::new("Bank BNI", &["bni"]),
        KeywordRule::new("Bank Mandiri", &["mandiri"]),
        KeywordRule::new("Cash", &["cash", "tunai", "kas"]),
    ]
}

/// Keywords marking money coming in.
pub const INCOME_KEYWORDS: &[&str] = &[
    "dapat", "terima", "masuk", "gaji", "honor", "bonus", "transfer masuk",
];

/// Keywords marking money going out.
pub const EXPENSE_KEYWORDS: &[&str] = &[
    "beli", "bayar", "buat", "untuk", "habis", "keluar", "spend",
];

/// Keywords marking wallet-to-wallet movement.
pub const TRANSFER_KEYWORDS: &[&str] = &["transfer", "kirim", "pindah", "tf"];
