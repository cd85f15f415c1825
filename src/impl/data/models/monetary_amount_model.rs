use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::InvalidMonetaryAmount;

/// Monetary amount as it appears in exported cost tables. Accepts the
/// German decimal-comma form ("1.234,56") as well as plain and
/// en-separated forms ("1234.56", "1,234.56"), and accounting-style
/// parentheses for negatives ("(100,00)").
#[derive(Debug)]
pub(crate) struct MonetaryAmountModel(pub f64);
impl FromStr for MonetaryAmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let is_negative = trimmed.starts_with('(') && trimmed.ends_with(')');
        let numeric_part = trimmed.trim_matches(|c| c == '(' || c == ')').trim();
        let normalized = match (numeric_part.rfind(','), numeric_part.rfind('.')) {
            // "1.234,56": dots are thousands separators.
            (Some(comma), Some(dot)) if comma > dot => {
                numeric_part.replace('.', "").replace(',', ".")
            }
            // "1,234.56": commas are thousands separators.
            (Some(_), Some(_)) => numeric_part.replace(',', ""),
            // "1234,56": a lone comma is the decimal separator.
            (Some(_), None) => numeric_part.replace(',', "."),
            (None, _) => numeric_part.to_string(),
        };
        let amount = normalized
            .parse::<f64>()
            .map_err(|_| InvalidMonetaryAmount::new(numeric_part))?;
        Ok(MonetaryAmountModel(if is_negative { -amount } else { amount }))
    }
}

impl Into<f64> for MonetaryAmountModel {
    fn into(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_german_and_en_separator_conventions() {
        assert_eq!(MonetaryAmountModel::from_str("1.234,56").unwrap().0, 1234.56);
        assert_eq!(MonetaryAmountModel::from_str("1,234.56").unwrap().0, 1234.56);
        assert_eq!(MonetaryAmountModel::from_str("1234.56").unwrap().0, 1234.56);
        assert_eq!(MonetaryAmountModel::from_str("1234,56").unwrap().0, 1234.56);
        assert_eq!(MonetaryAmountModel::from_str("80").unwrap().0, 80.0);
    }

    #[test]
    fn parses_accounting_style_negatives() {
        assert_eq!(MonetaryAmountModel::from_str("(100,00)").unwrap().0, -100.0);
        assert_eq!(MonetaryAmountModel::from_str("(75)").unwrap().0, -75.0);
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert!(MonetaryAmountModel::from_str("12a,00").is_err());
        assert!(MonetaryAmountModel::from_str("").is_err());
    }
}
