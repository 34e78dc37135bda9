//! Locale-aware currency rendering.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::{Currency, Locale};

/// Render `amount` with exactly two fractional digits, grouped integer
/// digits and the currency symbol placed for `locale`.
///
/// | currency | `en-US`      | `pt-BR`          |
/// |----------|--------------|------------------|
/// | USD      | `$1,234.50`  | `US$ 1.234,50`   |
/// | BRL      | `R$1,234.50` | `R$ 1.234,50`    |
///
/// The `pt-BR` gap after the symbol is a no-break space (U+00A0). A
/// negative amount keeps its sign in front of the symbol (`-$5.00`).
pub(crate) fn format_amount(amount: Decimal, currency: Currency, locale: Locale) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let plain = format!("{:.2}", rounded.abs());
    let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    format!(
        "{sign}{symbol}{spacing}{integer}{decimal}{fraction}",
        symbol = currency.symbol(locale),
        spacing = locale.symbol_spacing(),
        integer = group_thousands(integer, locale.group_separator()),
        decimal = locale.decimal_separator(),
    )
}

/// Insert `separator` between every group of three digits, from the right.
fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0", ','), "0");
        assert_eq!(group_thousands("999", ','), "999");
        assert_eq!(group_thousands("1000", ','), "1,000");
        assert_eq!(group_thousands("1234567", '.'), "1.234.567");
    }

    #[test]
    fn test_all_renderings() {
        let amount = dec!(1234.5);
        assert_eq!(format_amount(amount, Currency::Usd, Locale::EnUs), "$1,234.50");
        assert_eq!(format_amount(amount, Currency::Brl, Locale::EnUs), "R$1,234.50");
        assert_eq!(
            format_amount(amount, Currency::Usd, Locale::PtBr),
            "US$\u{a0}1.234,50"
        );
        assert_eq!(
            format_amount(amount, Currency::Brl, Locale::PtBr),
            "R$\u{a0}1.234,50"
        );
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(format_amount(dec!(0.005), Currency::Usd, Locale::EnUs), "$0.01");
        assert_eq!(format_amount(dec!(0.004), Currency::Usd, Locale::EnUs), "$0.00");
        assert_eq!(format_amount(dec!(99.995), Currency::Usd, Locale::EnUs), "$100.00");
    }

    #[test]
    fn test_negative_amount_keeps_sign() {
        assert_eq!(format_amount(dec!(-5), Currency::Usd, Locale::EnUs), "-$5.00");
        assert_eq!(
            format_amount(dec!(-1234.5), Currency::Brl, Locale::PtBr),
            "-R$\u{a0}1.234,50"
        );
        assert_eq!(format_amount(dec!(-0.001), Currency::Usd, Locale::EnUs), "$0.00");
    }

    #[test]
    fn test_whole_and_long_amounts() {
        assert_eq!(format_amount(dec!(7), Currency::Brl, Locale::PtBr), "R$\u{a0}7,00");
        assert_eq!(
            format_amount(dec!(111.11111111111), Currency::Usd, Locale::EnUs),
            "$111.11"
        );
    }
}
