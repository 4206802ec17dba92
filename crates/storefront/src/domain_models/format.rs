//! Display formatting for prices, distances and ratings

/// Group an integer with `.` thousands separators (Indonesian style)
fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Format an amount in the smallest currency unit, without fractional digits
///
/// IDR renders as "Rp 25.000"; other currencies fall back to "<CODE> 25.000".
pub fn format_currency(amount: u64, currency: &str) -> String {
    let symbol = match currency {
        "IDR" => "Rp",
        other => other,
    };
    format!("{} {}", symbol, group_thousands(amount))
}

/// "650m" below one kilometre, "2.4km" otherwise
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{}m", (km * 1000.0).round() as u64)
    } else {
        format!("{:.1}km", km)
    }
}

pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0, "IDR"), "Rp 0");
        assert_eq!(format_currency(999, "IDR"), "Rp 999");
        assert_eq!(format_currency(25_000, "IDR"), "Rp 25.000");
        assert_eq!(format_currency(1_234_567, "IDR"), "Rp 1.234.567");
        assert_eq!(format_currency(5_000, "SGD"), "SGD 5.000");
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(0.65), "650m");
        assert_eq!(format_distance(2.44), "2.4km");
        assert_eq!(format_distance(12.0), "12.0km");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(4.9), "4.9");
        assert_eq!(format_rating(0.0), "0.0");
    }
}
