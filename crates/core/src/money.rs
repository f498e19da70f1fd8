//! Money helpers.
//!
//! Amounts are stored as integer cents. User input arrives as decimal
//! dollar text from the invoice form and is converted exactly, without
//! going through floating point.

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a user-entered dollar amount into integer cents.
///
/// Accepts plain decimal notation with at most two fractional digits:
/// `"25"`, `"25.5"`, `"25.50"`, `".5"`, and a leading minus sign. Returns
/// `None` for anything else. Positivity is the caller's concern, so that a
/// zero or negative amount can surface as a validation message rather than
/// a parse failure.
pub fn parse_amount_to_cents(input: &str) -> Option<i64> {
    let s = input.trim();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s),
    };

    let (whole, frac) = match digits.split_once('.') {
        Some((w, f)) => (w, f),
        None => (digits, ""),
    };

    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if frac.len() > 2 {
        return None;
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let whole_cents = if whole.is_empty() {
        0
    } else {
        whole.parse::<i64>().ok()?.checked_mul(100)?
    };
    let frac_cents = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().ok()? * 10,
        _ => frac.parse::<i64>().ok()?,
    };

    Some(sign * whole_cents.checked_add(frac_cents)?)
}

/// Convert stored cents back to dollars for the edit form's amount input.
pub fn cents_to_dollars(cents: i64) -> f64 {
    cents as f64 / 100.0
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Format cents as a US-dollar string with thousands separators,
/// e.g. `2550` becomes `"$25.50"` and `123456789` becomes `"$1,234,567.89"`.
pub fn format_currency(cents: i64) -> String {
    let negative = cents < 0;
    let abs = cents.unsigned_abs();
    let dollars = abs / 100;
    let rem = abs % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{rem:02}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
