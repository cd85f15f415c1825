use fractic_server_error::ServerError;

use crate::{
    data::datasources::{
        costs_csv_datasource::{CostsCsvDatasource, CostsCsvDatasourceImpl},
        tenants_csv_datasource::{TenantsCsvDatasource, TenantsCsvDatasourceImpl},
    },
    domain::repositories::billing_inputs_repository::BillingInputsRepository,
    entities::BillingInputs,
};

pub(crate) struct BillingInputsRepositoryImpl<
    DS1 = CostsCsvDatasourceImpl, // Default.
    DS2 = TenantsCsvDatasourceImpl,
> where
    DS1: CostsCsvDatasource,
    DS2: TenantsCsvDatasource,
{
    costs_datasource: DS1,
    tenants_datasource: DS2,
}

impl<DS1, DS2> BillingInputsRepository for BillingInputsRepositoryImpl<DS1, DS2>
where
    DS1: CostsCsvDatasource,
    DS2: TenantsCsvDatasource,
{
    fn from_string(
        &self,
        year: i32,
        costs_csv: &str,
        tenants_csv: &str,
    ) -> Result<BillingInputs, ServerError> {
        Ok(BillingInputs {
            costs: self.costs_datasource.from_string(year, costs_csv)?,
            tenants: self.tenants_datasource.from_string(tenants_csv)?,
        })
    }

    fn from_file<P>(
        &self,
        year: i32,
        costs_csv: P,
        tenants_csv: P,
    ) -> Result<BillingInputs, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        Ok(BillingInputs {
            costs: self.costs_datasource.from_file(year, costs_csv)?,
            tenants: self.tenants_datasource.from_file(tenants_csv)?,
        })
    }
}

impl BillingInputsRepositoryImpl {
    pub(crate) fn new() -> Self {
        BillingInputsRepositoryImpl {
            costs_datasource: CostsCsvDatasourceImpl::new(),
            tenants_datasource: TenantsCsvDatasourceImpl::new(),
        }
    }
}
