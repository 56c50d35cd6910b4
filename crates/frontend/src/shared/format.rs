//! Display formatting for table cells

/// Two decimal places, e.g. 1234.5 -> "1234.50"
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Amount or "-" when absent
pub fn format_optional_amount(value: Option<f64>) -> String {
    value.map(format_amount).unwrap_or_else(|| "-".to_string())
}

/// ISO datetime to "YYYY-MM-DD HH:MM"
/// Example: "2024-03-15T14:02:26.123Z" -> "2024-03-15 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    let Some((date_part, time_part)) = datetime_str
        .split_once('T')
        .or_else(|| datetime_str.split_once(' '))
    else {
        return datetime_str.to_string();
    };
    let hh_mm = time_part.get(..5).unwrap_or(time_part);
    format!("{} {}", date_part, hh_mm)
}

/// Date part of an ISO date or datetime
/// Example: "2024-03-15T14:02:26Z" -> "2024-03-15"
pub fn format_date(date_str: &str) -> String {
    date_str
        .split(['T', ' '])
        .next()
        .unwrap_or(date_str)
        .to_string()
}
