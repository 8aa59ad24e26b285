use num_format::{Locale, ToFormattedString};

/// Formats `value` with `decimals` fraction digits and thousands separators (e.g. `12,345.68`)
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match rounded.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (rounded.as_str(), None),
    };
    // `integer` only holds ascii digits at this point
    let integer = integer
        .parse::<u64>()
        .map(|i| i.to_formatted_string(&Locale::en))
        .unwrap_or_else(|_| integer.to_string());

    let is_zero = rounded.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{sign}{integer}.{fraction}"),
        None => format!("{sign}{integer}"),
    }
}

/// Formats `value` with at most 3 fraction digits, dropping trailing zeros (e.g. `12,964.5`)
pub fn format_locale(value: f64) -> String {
    let number = format_number(value, 3);
    if !value.is_finite() || !number.contains('.') {
        return number;
    }
    number.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Formats `value` as whole US dollars (e.g. `$1,500`)
pub fn format_currency(value: f64) -> String {
    let number = format_number(value, 0);
    match number.strip_prefix('-') {
        Some(number) => format!("-${number}"),
        None => format!("${number}"),
    }
}
