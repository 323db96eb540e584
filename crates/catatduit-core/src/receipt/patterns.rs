//! Regex patterns and noise tables for receipt text extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Known Indonesian merchant names: minimarkets, supermarkets, fast
    /// food, cafés, pharmacies. Candidates are scored by position and match
    /// length, so order here is not significant.
    pub static ref MERCHANT_PATTERNS: Vec<Regex> = [
        // Minimarkets and supermarkets
        r"alfamart",
        r"alfamidi",
        r"indomaret",
        r"hypermart",
        r"carrefour",
        r"transmart",
        r"giant",
        r"superindo",
        r"lotte\s?mart",
        // Fast food
        r"mc\s?donald'?s?|mcd",
        r"kfc",
        r"burger\s?king",
        r"pizza\s?hut",
        r"domino'?s(?:\s?pizza)?",
        r"hokben|hoka\s?hoka\s?bento",
        r"richeese",
        r"a&w",
        // Cafés
        r"starbucks",
        r"kopi\s?kenangan",
        r"janji\s?jiwa",
        r"fore\s?coffee",
        r"j\.?co",
        r"dunkin",
        r"excelso",
        // Pharmacies
        r"kimia\s?farma",
        r"apotek\s?k-?24",
        r"guardian",
        r"century",
        r"watsons",
    ]
    .iter()
    .map(|p| Regex::new(&format!("(?i){p}")).unwrap())
    .collect();

    // Total-amount candidates, tried by descending reliability.
    pub static ref TOTAL_LABELED: Regex = Regex::new(
        r"(?i)(?:grand\s*total|total)\s*:?\s*rp\.?\s*(\d[\d.,]*)"
    ).unwrap();

    pub static ref TOTAL_PAID: Regex = Regex::new(
        r"(?i)(?:jumlah|dibayar|bayar)\s*:?\s*(?:rp\.?\s*)?(\d[\d.,]*)"
    ).unwrap();

    pub static ref TOTAL_NEARBY: Regex = Regex::new(
        r"(?i)total[^\d\n]{0,20}(\d[\d.,]*)"
    ).unwrap();

    pub static ref TRAILING_RP: Regex = Regex::new(
        r"(?im)rp\.?\s*(\d[\d.,]*)\s*$"
    ).unwrap();

    /// Any run of 4+ digits, for the last-resort total fallback.
    pub static ref DIGIT_RUN: Regex = Regex::new(r"\d{4,}").unwrap();

    // Line-item shapes, tried in order. Quantity defaults to 1 when the
    // pattern has none.
    pub static ref ITEM_QTY_X_PRICE: Regex = Regex::new(
        r"(?i)^(.+?)\s+(\d{1,3})\s*x\s*(?:rp\.?\s*)?(\d[\d.,]*)\s*$"
    ).unwrap();

    pub static ref ITEM_PRICE_QTY: Regex = Regex::new(
        r"(?i)^(.+?)\s+(?:rp\.?\s*)?(\d{1,3}(?:[.,]\d{3})+|\d{4,})\s+(\d{1,3})\s*$"
    ).unwrap();

    pub static ref ITEM_NAME_PRICE: Regex = Regex::new(
        r"(?i)^(.+?)\s+(?:rp\.?\s*)?(\d{1,3}(?:[.,]\d{3})+|\d{3,})\s*$"
    ).unwrap();

    pub static ref ITEM_AT_PRICE: Regex = Regex::new(
        r"(?i)^(.+?)\s*@\s*(?:rp\.?\s*)?(\d[\d.,]*)\s*$"
    ).unwrap();

    // Date shapes: D/M/YY(YY) first, then YYYY-M-D.
    pub static ref DATE_DMY: Regex = Regex::new(
        r"\b\d{1,2}[/\-.]\d{1,2}[/\-.]\d{2,4}\b"
    ).unwrap();

    pub static ref DATE_YMD: Regex = Regex::new(
        r"\b\d{4}-\d{1,2}-\d{1,2}\b"
    ).unwrap();

    // Noise shapes used by both the merchant line scan and the item filter.
    pub static ref ADDRESS_LINE: Regex = Regex::new(
        r"(?i)\b(?:jl\.?|jalan|ruko|blok|kel\.?|kec\.?|kota|kab\.?|alamat|cabang)\b"
    ).unwrap();

    pub static ref PHONE_LINE: Regex = Regex::new(
        r"(?i)\b(?:telp|telepon|phone|hp|wa)\b|\+62\s?\d+|\(?0\d{2,3}\)?[\s\-]?\d{6,}"
    ).unwrap();

    /// Line made of digits and date/time punctuation only.
    pub static ref PURE_DATETIME: Regex = Regex::new(
        r"^[\d\s/:.\-]+$"
    ).unwrap();

    /// Barcode or transaction-reference digit run.
    pub static ref BARCODE: Regex = Regex::new(r"\d{12,}").unwrap();

    /// Social media handles and URLs.
    pub static ref SOCIAL: Regex = Regex::new(
        r"(?i)@[a-z][a-z0-9_.]{2,}|www\.|https?://|instagram|facebook|twitter|tiktok"
    ).unwrap();
}

/// Header words disqualifying a line from being the store name.
pub const HEADER_WORDS: &[&str] = &[
    "struk", "nota", "invoice", "receipt", "faktur", "kasir", "cashier", "npwp",
    "selamat datang", "welcome",
];

/// Keywords that mark a whole line as noise during item extraction:
/// totals/tax/discount, contact info, promotions, receipt metadata,
/// thank-you footers.
pub const NOISE_LINE_KEYWORDS: &[&str] = &[
    // Totals, payment, tax, discount
    "total", "subtotal", "sub total", "jumlah", "bayar", "dibayar", "kembali",
    "kembalian", "tunai", "cash", "debit", "kredit", "credit", "ppn", "pajak",
    "tax", "diskon", "discount", "disc", "voucher", "charge",
    // Promotions and marketing
    "promo", "member", "poin", "point", "gratis", "hemat", "penawaran",
    "download", "aplikasi",
    // Receipt metadata
    "struk", "nota", "invoice", "faktur", "kasir", "cashier", "npwp", "no ref",
    "ref:", "trx", "transaksi", "shift", "tanggal",
    // Thank-you footers
    "terima kasih", "thank you", "thanks", "selamat",
];

/// Keywords that disqualify an already-matched item by name.
pub const NOISE_NAME_KEYWORDS: &[&str] = &[
    "promo", "member", "kasir", "terima kasih", "thank", "total", "tunai",
    "kembali", "diskon", "voucher", "qty", "harga",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merchant_patterns_match() {
        let hits: Vec<bool> = ["ALFAMART", "Indomaret", "McDonald's", "kopi kenangan"]
            .iter()
            .map(|t| MERCHANT_PATTERNS.iter().any(|p| p.is_match(t)))
            .collect();
        assert!(hits.iter().all(|h| *h));
    }

    #[test]
    fn test_total_labeled() {
        let caps = TOTAL_LABELED.captures("Total: Rp 45.000").unwrap();
        assert_eq!(&caps[1], "45.000");

        let caps = TOTAL_LABELED.captures("GRAND TOTAL Rp45.000").unwrap();
        assert_eq!(&caps[1], "45.000");
    }

    #[test]
    fn test_item_shapes() {
        assert!(ITEM_QTY_X_PRICE.is_match("Nasi Goreng 2 x 15.000"));
        assert!(ITEM_PRICE_QTY.is_match("Indomie Goreng 3.500 2"));
        assert!(ITEM_NAME_PRICE.is_match("Teh Botol 5.000"));
        assert!(ITEM_AT_PRICE.is_match("Es Teh @ 4.000"));
    }

    #[test]
    fn test_pure_datetime_line() {
        assert!(PURE_DATETIME.is_match("12/03/2024 18:45"));
        assert!(!PURE_DATETIME.is_match("Nasi Goreng 15.000"));
    }
}
