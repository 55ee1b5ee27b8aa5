const MILLION: u64 = 1_000_000;

/// Formats a number with comma separators (e.g. 1234567 -> "1,234,567").
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

/// Formats a price for display with a fixed currency prefix.
///
/// Prices below one million are shown in full with thousands separators.
/// From one million upwards the amount is shown in millions, either whole
/// (`KES 2M`) or rounded half-up to one decimal place (`KES 1.5M`).
pub fn format_price(price: u64, currency: &str) -> String {
    if price < MILLION {
        return format!("{} {}", currency, format_number(price));
    }

    if price % MILLION == 0 {
        return format!("{} {}M", currency, format_number(price / MILLION));
    }

    let tenths = price.saturating_add(MILLION / 20) / (MILLION / 10);
    format!("{} {}.{}M", currency, format_number(tenths / 10), tenths % 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_price() {
        assert_eq!(format_price(0, "KES"), "KES 0");
    }

    #[test]
    fn below_a_million() {
        assert_eq!(format_price(500, "KES"), "KES 500");
        assert_eq!(format_price(1_000, "KES"), "KES 1,000");
        assert_eq!(format_price(999_999, "KES"), "KES 999,999");
    }

    #[test]
    fn whole_millions() {
        assert_eq!(format_price(1_000_000, "KES"), "KES 1M");
        assert_eq!(format_price(2_000_000, "KES"), "KES 2M");
        assert_eq!(format_price(1_250_000_000, "KES"), "KES 1,250M");
    }

    #[test]
    fn fractional_millions() {
        assert_eq!(format_price(1_500_000, "KES"), "KES 1.5M");
        assert_eq!(format_price(1_230_000, "KES"), "KES 1.2M");
        assert_eq!(format_price(1_250_000, "KES"), "KES 1.3M");
    }

    #[test]
    fn rounds_up_to_next_tenth() {
        assert_eq!(format_price(1_950_000, "KES"), "KES 2.0M");
        assert_eq!(format_price(1_999_999, "KES"), "KES 2.0M");
        assert_eq!(format_price(1_000_001, "KES"), "KES 1.0M");
    }

    #[test]
    fn huge_prices_do_not_overflow() {
        assert_eq!(format_price(u64::MAX, "KES"), "KES 18,446,744,073,709.5M");
        assert_eq!(format_price(u64::MAX - 1, "KES"), "KES 18,446,744,073,709.5M");
    }

    #[test]
    fn uses_given_currency() {
        assert_eq!(format_price(2_500, "UGX"), "UGX 2,500");
    }

    #[test]
    fn format_number_adds_commas() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }
}
