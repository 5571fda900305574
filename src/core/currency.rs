//! Price formatting in US dollars.

/// Prices at or above this can't be represented exactly in cents.
const MAX_GROUPED_PRICE: f64 = 1e15;

/// Formats a price as a US currency string: `$1.49`, `$1,234.50`.
///
/// Negative or non-finite values and values too large to round to whole cents
/// fall back to `$` followed by the value with two decimals.
pub fn format_price(price: f64) -> String {
    if !price.is_finite() || price < 0.0 || price >= MAX_GROUPED_PRICE {
        return fallback_price(price);
    }

    let cents = (price * 100.0).round() as u64;
    let dollars = cents / 100;
    let remainder = cents % 100;

    format!("${}.{:02}", group_thousands(dollars), remainder)
}

fn fallback_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Inserts `,` every three digits from the right.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
