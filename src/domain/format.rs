use super::locale::NumberLocale;
use super::metric::MetricValue;

/// Fraction digits kept after rounding; trailing zeros are dropped afterwards.
pub const MAX_FRACTION_DIGITS: usize = 3;

/// Display string for a card value. Text passes through untouched.
pub fn format_value(value: &MetricValue, locale: &NumberLocale) -> String {
    match value {
        MetricValue::Number(number) => format_number(*number, locale),
        MetricValue::Text(text) => text.clone(),
    }
}

/// Groups the integer part and localizes the decimal separator.
pub fn format_number(value: f64, locale: &NumberLocale) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}∞");
    }

    let (integer, fraction) = round_half_away(value.abs(), MAX_FRACTION_DIGITS);
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(integer.len() + fraction.len() + 8);
    out.push_str(sign);
    out.push_str(&locale.group_digits(&integer));
    if !fraction.is_empty() {
        out.push_str(locale.decimal);
        out.push_str(fraction);
    }
    out
}

/// Rounds the shortest decimal form of a finite, non-negative `magnitude` to
/// `places` fraction digits, ties away from zero. Returns integer and fraction
/// digits; the fraction is zero-padded to `places`.
fn round_half_away(magnitude: f64, places: usize) -> (String, String) {
    let shortest = magnitude.to_string();
    let (integer, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = integer.bytes().collect();
    digits.extend(fraction.bytes().chain(std::iter::repeat(b'0')).take(places));

    if fraction.as_bytes().get(places).is_some_and(|digit| *digit >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - places;
    let fraction = digits.split_off(split);
    (
        String::from_utf8_lossy(&digits).into_owned(),
        String::from_utf8_lossy(&fraction).into_owned(),
    )
}

/// Magnitude of a change as a percentage label, e.g. `-3.2` becomes `3.2%`.
pub fn format_change_amount(value: f64) -> String {
    format!("{}%", value.abs())
}
