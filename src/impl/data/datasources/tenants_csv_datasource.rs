use std::{fs, str::FromStr as _};

use fractic_server_error::ServerError;

use crate::{
    data::models::monetary_amount_model::MonetaryAmountModel,
    entities::TenantShareInput,
    errors::{InvalidCsv, InvalidCsvContent, ReadError},
};

/// Tenant roster of one billing run: header row plus
/// `name,address,share_value,monthly_prepayment,months` records.
pub(crate) trait TenantsCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<TenantShareInput>, ServerError>;

    fn from_file<P>(&self, path: P) -> Result<Vec<TenantShareInput>, ServerError>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct TenantsCsvDatasourceImpl;

impl TenantsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl TenantsCsvDatasource for TenantsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<TenantShareInput>, ServerError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_name = r.get(0).unwrap_or("");
                    let raw_address = r.get(1).unwrap_or("");
                    let raw_share_value = r.get(2).unwrap_or("0");
                    let raw_monthly = r.get(3).unwrap_or("0");
                    let raw_months = r.get(4).unwrap_or("12");

                    // Parse.
                    let share_value = raw_share_value
                        .parse::<f64>()
                        .map_err(|e| InvalidCsvContent::with_debug("invalid share value", &e))?;
                    let monthly: MonetaryAmountModel =
                        MonetaryAmountModel::from_str(raw_monthly)?;
                    let months = raw_months
                        .parse::<u32>()
                        .map_err(|e| InvalidCsvContent::with_debug("invalid month count", &e))?;

                    // Build.
                    Ok(TenantShareInput {
                        name: raw_name.into(),
                        address: raw_address.into(),
                        share_value,
                        monthly_prepayment: monthly.into(),
                        months_prepaid: months,
                    })
                })
            })
            .collect()
    }

    fn from_file<P>(&self, path: P) -> Result<Vec<TenantShareInput>, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.from_string(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_roster_in_row_order() {
        let csv = "name,address,share_value,monthly_prepayment,months\n\
                   Familie Öztürk,Lindenstraße 12,50,80,12\n\
                   Herr Weber,Lindenstraße 12,100,\"150,00\",12\n";
        let tenants = TenantsCsvDatasourceImpl::new().from_string(csv).unwrap();
        assert_eq!(tenants.len(), 2);
        assert_eq!(tenants[0].name, "Familie Öztürk");
        assert_eq!(tenants[0].share_value, 50.0);
        assert_eq!(tenants[1].monthly_prepayment, 150.0);
        assert_eq!(tenants[1].months_prepaid, 12);
    }

    #[test]
    fn rejects_malformed_numeric_cells() {
        let csv = "name,address,share_value,monthly_prepayment,months\n\
                   Familie Öztürk,Lindenstraße 12,fifty,80,12\n";
        assert!(TenantsCsvDatasourceImpl::new().from_string(csv).is_err());
    }
}
