//! Display helpers shared by views and reports.

use chrono::NaiveDate;

/// Placeholder shown for absent values.
pub const PLACEHOLDER: &str = "-";

/// `2024-05-10` → `2024/05/10`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}

/// Format a date, or the placeholder when absent.
pub fn format_date_opt(date: Option<NaiveDate>) -> String {
    date.map(format_date)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Yen amount with thousands separators: `12345` → `¥12,345`.
pub fn format_yen(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-¥{}", grouped)
    } else {
        format!("¥{}", grouped)
    }
}

/// `4.25` → `4.25 kg`; trailing zeros dropped.
pub fn format_kg(weight_kg: f64) -> String {
    let text = format!("{:.2}", weight_kg);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{} kg", text)
}

/// Text, or the placeholder when absent or blank.
pub fn or_placeholder(value: Option<&str>) -> &str {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(PLACEHOLDER)
}
