use std::{fs, str::FromStr as _};

use fractic_server_error::ServerError;
use ron::from_str;

use crate::{
    data::models::monetary_amount_model::MonetaryAmountModel,
    entities::{CostCategory, OperatingCosts},
    errors::{InvalidCsv, InvalidRon, ReadError},
};

/// Cost table of one billing year, exported as CSV with a header row and
/// `category,amount` records. Categories not listed stay at zero.
pub(crate) trait CostsCsvDatasource {
    fn from_string(&self, year: i32, s: &str) -> Result<OperatingCosts, ServerError>;

    fn from_file<P>(&self, year: i32, path: P) -> Result<OperatingCosts, ServerError>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct CostsCsvDatasourceImpl;

impl CostsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl CostsCsvDatasource for CostsCsvDatasourceImpl {
    fn from_string(&self, year: i32, s: &str) -> Result<OperatingCosts, ServerError> {
        let mut costs = OperatingCosts::new(year);
        for record in csv::Reader::from_reader(s.as_bytes()).records() {
            let record = record.map_err(|e| InvalidCsv::with_debug(&e))?;

            // Extract from CSV record.
            let raw_category = record.get(0).unwrap_or("");
            let raw_amount = record.get(1).unwrap_or("0");

            // Parse.
            let category: CostCategory =
                from_str(raw_category).map_err(|e| InvalidRon::with_debug("CostCategory", &e))?;
            let amount: MonetaryAmountModel = MonetaryAmountModel::from_str(raw_amount)?;

            // Apply. Duplicate category rows overwrite; negative amounts
            // are rejected here.
            costs.set_amount(category, amount.into())?;
        }
        Ok(costs)
    }

    fn from_file<P>(&self, year: i32, path: P) -> Result<OperatingCosts, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.from_string(
            year,
            &fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_cost_table_leaving_unlisted_categories_at_zero() {
        let csv = "category,amount\nHeating,\"1.200,00\"\nWaterSupply,300\n";
        let costs = CostsCsvDatasourceImpl::new().from_string(2025, csv).unwrap();
        assert_eq!(costs.year(), 2025);
        assert_eq!(costs.amount(CostCategory::Heating), 1200.0);
        assert_eq!(costs.amount(CostCategory::WaterSupply), 300.0);
        assert_eq!(costs.amount(CostCategory::Elevator), 0.0);
        assert_eq!(costs.total(), 1500.0);
    }

    #[test]
    fn rejects_unknown_categories_and_negative_amounts() {
        let unknown = "category,amount\nGoldPlating,100\n";
        assert!(CostsCsvDatasourceImpl::new()
            .from_string(2025, unknown)
            .is_err());

        let negative = "category,amount\nHeating,\"(100,00)\"\n";
        assert!(CostsCsvDatasourceImpl::new()
            .from_string(2025, negative)
            .is_err());
    }
}
