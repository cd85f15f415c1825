use chrono::NaiveDate;
use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, EUR = 2).
fn decimal_places(currency: Currency) -> usize {
    currency.exponent().unwrap_or(0) as usize
}

/// Format cash amount with currency symbol, correct number of decimal
/// places and proper thousands separators.
///
/// For consistency, uses en locale ('.' as decimal mark, i.e. 1,000.00)
/// regardless of user's locale or currency. Could be generalized in the
/// future.
pub(crate) fn format_amount(amount: f64, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    let sign = if amount < 0.0 { "-" } else { "" };
    let factor = 10_f64.powi(decimal_places as i32);
    let total_minor = (amount.abs() * factor).round() as i64;
    let integer_part = (total_minor / factor as i64).to_formatted_string(&Locale::en);
    if decimal_places == 0 {
        format!("{}{} {}", sign, integer_part, currency.symbol())
    } else {
        format!(
            "{}{}.{:0decimal_places$} {}",
            sign,
            integer_part,
            total_minor % factor as i64,
            currency.symbol(),
        )
    }
}

/// Format a date the way German statements print them (dd.mm.yyyy).
pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_amounts_with_separators_and_sign() {
        assert_eq!(format_amount(1500.0, Currency::EUR), "1,500.00 €");
        assert_eq!(format_amount(0.0, Currency::EUR), "0.00 €");
        assert_eq!(format_amount(-960.0, Currency::EUR), "-960.00 €");
        assert_eq!(format_amount(-0.46, Currency::EUR), "-0.46 €");
        assert_eq!(format_amount(9.999, Currency::EUR), "10.00 €");
    }

    #[test]
    fn formats_dates_with_german_separators() {
        let date = NaiveDate::from_ymd_opt(2026, 9, 6).unwrap();
        assert_eq!(format_date(date), "06.09.2026");
    }
}
