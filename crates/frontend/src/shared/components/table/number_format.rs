//! Number formatting for tables and tooltips (USD amounts)

/// Formats a number with comma thousands separators and `decimals` fraction digits
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let len = integer_part.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Money with 2 decimals: `1,234,567.89`
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Whole number: `1,234,567`
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}
