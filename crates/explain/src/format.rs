//! Indian-style number and currency formatting.

/// Group digits the Indian way: last three, then pairs (12,34,567).
pub fn format_indian_number(num: i64) -> String {
    let digits = num.unsigned_abs().to_string();
    let sign = if num < 0 { "-" } else { "" };
    if digits.len() <= 3 {
        return format!("{}{}", sign, digits);
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{}{},{}", sign, groups.join(","), tail)
}

/// "Rs. 15,00,000". Fractional rupees are truncated.
pub fn format_currency(amount: f64) -> String {
    format!("Rs. {}", format_indian_number(amount.trunc() as i64))
}

/// Amount in lakhs with two decimals ("15.00 L").
pub fn format_lakhs(amount: f64) -> String {
    format!("{:.2} L", amount / 100_000.0)
}

/// Decimal ratio as a percentage with one decimal ("12.5%").
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Like [`format_percentage`] but always signed ("+2.0%", "-2.0%").
pub fn format_signed_percentage(value: f64) -> String {
    format!("{:+.1}%", value * 100.0)
}

pub fn format_km(km: u32) -> String {
    format!("{} km", format_indian_number(i64::from(km)))
}

pub fn format_age(years: u32) -> String {
    if years == 1 {
        "1 year".to_string()
    } else {
        format!("{} years", years)
    }
}
