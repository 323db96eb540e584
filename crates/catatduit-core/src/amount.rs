//! Rupiah amount normalization shared by both parsing components.
//!
//! Indonesian receipts and chat messages mix Indonesian ("45.000", "1.234,56")
//! and Western ("45,000", "1,234.56") separator conventions. The
//! disambiguation below is heuristic and lossy for some inputs (a bare
//! "1,234" reads as one thousand two hundred thirty-four); downstream
//! behavior depends on these exact rules, so they must not be "improved".

/// Normalize a raw digit-and-punctuation string to whole Rupiah.
///
/// Rules, applied to the dot/comma counts of the cleaned string:
/// - multiple dots: all dots are thousands separators;
/// - multiple commas: all commas are thousands separators;
/// - one dot and one comma: whichever appears first is the thousands
///   separator, the other is the decimal point;
/// - a lone comma with at most 2 trailing digits is a decimal point,
///   otherwise a thousands separator (a lone dot is treated the same way);
/// - the result is parsed as a float and rounded to the nearest integer.
///
/// Returns `None` when the input contains no digits.
pub fn normalize_amount(raw: &str) -> Option<u64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();

    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    let dots = cleaned.matches('.').count();
    let commas = cleaned.matches(',').count();

    let normalized = if dots > 1 {
        let stripped = cleaned.replace('.', "");
        if commas == 1 {
            stripped.replace(',', ".")
        } else {
            stripped.replace(',', "")
        }
    } else if commas > 1 {
        cleaned.replace(',', "")
    } else if dots == 1 && commas == 1 {
        let dot_pos = cleaned.find('.').unwrap();
        let comma_pos = cleaned.find(',').unwrap();
        if dot_pos < comma_pos {
            cleaned.replace('.', "").replace(',', ".")
        } else {
            cleaned.replace(',', "")
        }
    } else if commas == 1 {
        if trailing_digits(&cleaned, ',') <= 2 {
            cleaned.replace(',', ".")
        } else {
            cleaned.replace(',', "")
        }
    } else if dots == 1 {
        if trailing_digits(&cleaned, '.') <= 2 {
            cleaned
        } else {
            cleaned.replace('.', "")
        }
    } else {
        cleaned
    };

    let value: f64 = normalized.parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }

    Some(value.round() as u64)
}

/// Format whole Rupiah in Indonesian style (dot-grouped thousands).
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let chars: Vec<char> = digits.chars().collect();
    let mut formatted = String::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push('.');
        }
        formatted.push(*c);
    }

    formatted
}

fn trailing_digits(s: &str, sep: char) -> usize {
    match s.rfind(sep) {
        Some(pos) => s[pos + sep.len_utf8()..].len(),
        None => 0,
    }
}
