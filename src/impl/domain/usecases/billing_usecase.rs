use async_trait::async_trait;
use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::billing_inputs_repository_impl::BillingInputsRepositoryImpl,
    domain::{
        logic::allocation_processor::AllocationProcessor,
        repositories::billing_inputs_repository::BillingInputsRepository,
    },
    entities::{BillingInputs, BillingResult, PropertyProfile},
    errors::StatementWriteFailed,
    presentation::statement_printer::StatementPrinter,
};

#[async_trait]
pub trait BillingUsecase: Send + Sync {
    async fn from_string(
        &self,
        profile: &PropertyProfile,
        year: i32,
        costs_csv: &str,
        tenants_csv: &str,
        issue_date: NaiveDate,
    ) -> Result<Vec<(BillingResult, String)>, ServerError>;

    async fn from_file<P>(
        &self,
        profile: &PropertyProfile,
        year: i32,
        costs_csv: P,
        tenants_csv: P,
        issue_date: NaiveDate,
    ) -> Result<Vec<(BillingResult, String)>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    async fn write_statement<P>(&self, statement: &str, path: P) -> Result<(), ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct BillingUsecaseImpl<
    R = BillingInputsRepositoryImpl, // Default.
> where
    R: BillingInputsRepository,
{
    inputs_repository: R,
    printer: StatementPrinter,
}

#[async_trait]
impl<R> BillingUsecase for BillingUsecaseImpl<R>
where
    R: BillingInputsRepository + Send + Sync,
{
    async fn from_string(
        &self,
        profile: &PropertyProfile,
        year: i32,
        costs_csv: &str,
        tenants_csv: &str,
        issue_date: NaiveDate,
    ) -> Result<Vec<(BillingResult, String)>, ServerError> {
        let inputs = self
            .inputs_repository
            .from_string(year, costs_csv, tenants_csv)?;
        self.bill_roster(profile, &inputs, issue_date)
    }

    async fn from_file<P>(
        &self,
        profile: &PropertyProfile,
        year: i32,
        costs_csv: P,
        tenants_csv: P,
        issue_date: NaiveDate,
    ) -> Result<Vec<(BillingResult, String)>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let inputs = self
            .inputs_repository
            .from_file(year, costs_csv, tenants_csv)?;
        self.bill_roster(profile, &inputs, issue_date)
    }

    async fn write_statement<P>(&self, statement: &str, path: P) -> Result<(), ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        // Written to a sibling temp file first, so a failed write never
        // leaves a partial statement behind.
        let path = path.as_ref();
        let tmp = path.with_extension("tmp");
        if let Err(e) = tokio::fs::write(&tmp, statement).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(StatementWriteFailed::with_debug(
                &path.display().to_string(),
                &e,
            ));
        }
        tokio::fs::rename(&tmp, path)
            .await
            .map_err(|e| StatementWriteFailed::with_debug(&path.display().to_string(), &e))
    }
}

impl<R> BillingUsecaseImpl<R>
where
    R: BillingInputsRepository,
{
    fn bill_roster(
        &self,
        profile: &PropertyProfile,
        inputs: &BillingInputs,
        issue_date: NaiveDate,
    ) -> Result<Vec<(BillingResult, String)>, ServerError> {
        inputs
            .tenants
            .iter()
            .map(|tenant| {
                let result = AllocationProcessor::new(&inputs.costs, profile, tenant).process()?;
                let statement = self
                    .printer
                    .print_statement(profile, tenant, &result, issue_date);
                Ok((result, statement))
            })
            .collect()
    }
}

impl BillingUsecaseImpl {
    pub(crate) fn new() -> Self {
        BillingUsecaseImpl {
            inputs_repository: BillingInputsRepositoryImpl::new(),
            printer: StatementPrinter::new(),
        }
    }
}
