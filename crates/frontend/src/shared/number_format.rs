//! Number formatting for the sales table and summary cards

/// Rupee amount with two decimals, e.g. `₹1234.50`.
pub fn format_amount(value: f64) -> String {
    format!("₹{:.2}", value)
}

/// Optional table cell value; missing values render as an empty cell.
pub fn format_optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Optional money cell, two decimals.
pub fn format_optional_money(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_default()
}
