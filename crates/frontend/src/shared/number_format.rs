//! Number formatting for table cells

/// Formats `value` with a space as thousands separator and exactly
/// `decimals` fractional digits.
///
/// ```rust,ignore
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let formatted = format!("{:.*}", decimals as usize, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let digits = integer.len();
    let mut grouped = String::with_capacity(digits + digits / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    // "-0.00" reads oddly in a money column
    let sign = if unsigned.chars().all(|c| c == '0' || c == '.') { "" } else { sign };

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1 234.567");
        assert_eq!(format_number_with_decimals(12.5, 4), "12.5000");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
    }

    #[test]
    fn test_grouping_and_sign() {
        assert_eq!(format_number_with_decimals(1234567.89, 2), "1 234 567.89");
        assert_eq!(format_number_with_decimals(-123456.0, 0), "-123 456");
        assert_eq!(format_number_with_decimals(-0.001, 2), "0.00");
        assert_eq!(format_number_with_decimals(0.0, 0), "0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number_with_decimals(f64::INFINITY, 2), "inf");
        assert_eq!(format_number_with_decimals(f64::NAN, 2), "NaN");
    }
}
