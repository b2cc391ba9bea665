use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Formats a dollar amount as "$12,345.00". Negative amounts render as
/// "-$1,234.50".
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    let negative = rounded.is_sign_negative();
    let absolute = rounded.abs();

    let as_string = format!("{:.2}", absolute);
    let (int_part, frac_part) = as_string
        .split_once('.')
        .unwrap_or((as_string.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, frac_part)
}
