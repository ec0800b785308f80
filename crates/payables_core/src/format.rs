use rust_decimal::{Decimal, RoundingStrategy};

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Formats an amount as an Italian-locale euro string, e.g. `12.345,60 €`.
///
/// Integer parts of four digits or fewer are not grouped (`1234,00 €`), which
/// is how the `it-IT` locale renders currency.
pub fn format_eur(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{},{frac_part} €", group_thousands(int_part))
}

fn group_thousands(digits: &str) -> String {
    if digits.len() <= 4 {
        return digits.to_string();
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

/// Formats a byte count with one decimal and a binary unit, e.g. `229.1 KB`.
pub fn human_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", SIZE_UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(text: &str) -> Decimal {
        Decimal::from_str(text).unwrap()
    }

    #[test]
    fn eur_uses_comma_decimals_and_trailing_symbol() {
        assert_eq!(format_eur(dec("120.45")), "120,45 €");
        assert_eq!(format_eur(dec("25")), "25,00 €");
        assert_eq!(format_eur(Decimal::ZERO), "0,00 €");
    }

    #[test]
    fn eur_groups_only_from_five_digits() {
        assert_eq!(format_eur(dec("1234.5")), "1234,50 €");
        assert_eq!(format_eur(dec("12345.678")), "12.345,68 €");
        assert_eq!(format_eur(dec("1234567")), "1.234.567,00 €");
    }

    #[test]
    fn eur_rounds_half_away_from_zero() {
        assert_eq!(format_eur(dec("0.005")), "0,01 €");
        assert_eq!(format_eur(dec("-3.125")), "-3,13 €");
    }

    #[test]
    fn human_size_picks_largest_unit() {
        assert_eq!(human_size(0), "0 B");
        assert_eq!(human_size(512), "512.0 B");
        assert_eq!(human_size(234_551), "229.1 KB");
        assert_eq!(human_size(5 * 1024 * 1024), "5.0 MB");
    }
}
