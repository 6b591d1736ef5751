/// `$1,234.56` style amount with thousands separators.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("${value}");
    }

    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };

    format!("{sign}${}.{cents}", group_thousands(whole))
}

pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

pub fn format_rating(value: f64) -> String {
    format!("{value:.1}")
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn currency() {
        assert_eq!(format_currency(7_500.0), "$7,500.00");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(-42.5), "-$42.50");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn counts_and_ratings() {
        assert_eq!(format_count(75), "75");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(398_999_999), "398,999,999");
        assert_eq!(format_rating(4.6), "4.6");
        assert_eq!(format_rating(4.0), "4.0");
    }
}
