use fractic_server_error::ServerError;

use crate::entities::BillingInputs;

pub trait BillingInputsRepository {
    fn from_string(
        &self,
        year: i32,
        costs_csv: &str,
        tenants_csv: &str,
    ) -> Result<BillingInputs, ServerError>;

    fn from_file<P>(
        &self,
        year: i32,
        costs_csv: P,
        tenants_csv: P,
    ) -> Result<BillingInputs, ServerError>
    where
        P: AsRef<std::path::Path>;
}
