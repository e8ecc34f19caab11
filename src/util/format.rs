//! Display helpers for money, percentages and counts as the pricing team reads them.

const MISSING: &str = "N/A";

/// `1234.5` → `$1,234.50`. Negative amounts keep the sign in front of the symbol.
pub fn money(value: f64) -> String {
    signed_money(value, format!("{:.2}", value.abs()))
}

pub fn money_or_na(value: Option<f64>) -> String {
    value.map(money).unwrap_or_else(|| MISSING.to_string())
}

/// Backend amounts shown as returned: at least two and up to three fraction digits
/// (`120` → `$120.00`, `100.125` → `$100.125`).
pub fn exact_money(value: f64) -> String {
    let mut fixed = format!("{:.3}", value.abs());
    if fixed.ends_with('0') {
        fixed.pop();
    }
    signed_money(value, fixed)
}

pub fn exact_money_or_na(value: Option<f64>) -> String {
    value.map(exact_money).unwrap_or_else(|| MISSING.to_string())
}

/// `15` → `15.00%`.
pub fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

pub fn percent_or_na(value: Option<f64>) -> String {
    value.map(percent).unwrap_or_else(|| MISSING.to_string())
}

/// The number exactly as received: `12.345` → `12.345%`, `15` → `15%`.
pub fn raw_percent_or_na(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v}%"))
        .unwrap_or_else(|| MISSING.to_string())
}

pub fn days_or_na(value: Option<i32>) -> String {
    match value {
        Some(1) => "1 día".to_string(),
        Some(days) => format!("{days} días"),
        None => MISSING.to_string(),
    }
}

pub fn text_or_na(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(MISSING)
        .to_string()
}

/// Keeps the date part of a backend timestamp (`2025-03-01T10:15:00` → `2025-03-01`).
pub fn date_or_na(value: Option<&str>) -> String {
    value
        .map(|raw| raw.get(..10).unwrap_or(raw).to_string())
        .filter(|date| !date.trim().is_empty())
        .unwrap_or_else(|| MISSING.to_string())
}

/// `fixed` is the already rounded absolute value; a result that rounds to zero carries no sign.
fn signed_money(value: f64, fixed: String) -> String {
    let nonzero = fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    let sign = if value < 0.0 && nonzero { "-" } else { "" };
    format!("{sign}${}", group_thousands(&fixed))
}

fn group_thousands(fixed: &str) -> String {
    let (whole, fraction) = match fixed.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (fixed, None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, ch) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(fraction) => format!("{grouped}.{fraction}"),
        None => grouped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(money(0.0), "$0.00");
        assert_eq!(money(120.0), "$120.00");
        assert_eq!(money(1234.5), "$1,234.50");
        assert_eq!(money(1_234_567.891), "$1,234,567.89");
        assert_eq!(money(-950.0), "-$950.00");
        assert_eq!(money_or_na(None), "N/A");
    }

    #[test]
    fn amounts_rounding_to_zero_have_no_sign() {
        assert_eq!(money(-0.001), "$0.00");
        assert_eq!(money(-0.006), "-$0.01");
        assert_eq!(exact_money(-0.0004), "$0.00");
        assert_eq!(exact_money(-2.5), "-$2.50");
    }

    #[test]
    fn exact_money_keeps_a_third_decimal() {
        assert_eq!(exact_money(120.0), "$120.00");
        assert_eq!(exact_money(100.125), "$100.125");
        assert_eq!(exact_money(1234.5), "$1,234.50");
        assert_eq!(exact_money_or_na(None), "N/A");
    }

    #[test]
    fn raw_percent_is_not_rounded() {
        assert_eq!(raw_percent_or_na(Some(12.345)), "12.345%");
        assert_eq!(raw_percent_or_na(Some(15.0)), "15%");
        assert_eq!(raw_percent_or_na(None), "N/A");
    }

    #[test]
    fn percent_uses_two_decimals() {
        assert_eq!(percent(15.0), "15.00%");
        assert_eq!(percent_or_na(Some(33.333)), "33.33%");
        assert_eq!(percent_or_na(None), "N/A");
    }

    #[test]
    fn small_helpers() {
        assert_eq!(days_or_na(Some(1)), "1 día");
        assert_eq!(days_or_na(Some(30)), "30 días");
        assert_eq!(text_or_na(Some("  ")), "N/A");
        assert_eq!(date_or_na(Some("2025-03-01T10:15:00")), "2025-03-01");
        assert_eq!(date_or_na(None), "N/A");
    }
}
