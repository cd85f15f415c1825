use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::{
    domain::{
        logic::allocation_processor::AllocationProcessor,
        usecases::billing_usecase::{BillingUsecase as _, BillingUsecaseImpl},
    },
    entities::{BillingResult, OperatingCosts, PropertyProfile, TenantShareInput},
    presentation::statement_printer::StatementPrinter,
};

pub type Statement = String;

pub struct NebenkostenUtil {
    billing_usecase: BillingUsecaseImpl,
    printer: StatementPrinter,
}

impl NebenkostenUtil {
    pub fn new() -> Self {
        Self {
            billing_usecase: BillingUsecaseImpl::new(),
            printer: StatementPrinter::new(),
        }
    }

    /// Compute one tenant's billing result from in-memory inputs.
    pub fn compute(
        &self,
        costs: &OperatingCosts,
        profile: &PropertyProfile,
        tenant: &TenantShareInput,
    ) -> Result<BillingResult, ServerError> {
        AllocationProcessor::new(costs, profile, tenant).process()
    }

    /// Render the statement document for an already computed result.
    pub fn print_statement(
        &self,
        profile: &PropertyProfile,
        tenant: &TenantShareInput,
        result: &BillingResult,
        issue_date: NaiveDate,
    ) -> Statement {
        self.printer
            .print_statement(profile, tenant, result, issue_date)
    }

    /// Parse a billing run from CSV tables and produce one result and
    /// statement per tenant, in roster order.
    pub async fn from_string(
        &self,
        profile: &PropertyProfile,
        year: i32,
        costs_csv: &str,
        tenants_csv: &str,
        issue_date: NaiveDate,
    ) -> Result<Vec<(BillingResult, Statement)>, ServerError> {
        self.billing_usecase
            .from_string(profile, year, costs_csv, tenants_csv, issue_date)
            .await
    }

    pub async fn from_file<P>(
        &self,
        profile: &PropertyProfile,
        year: i32,
        costs_csv: P,
        tenants_csv: P,
        issue_date: NaiveDate,
    ) -> Result<Vec<(BillingResult, Statement)>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.billing_usecase
            .from_file(profile, year, costs_csv, tenants_csv, issue_date)
            .await
    }

    /// Export a statement document. A failed write reports an error and
    /// leaves no partial file behind.
    pub async fn write_statement<P>(&self, statement: &str, path: P) -> Result<(), ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.billing_usecase.write_statement(statement, path).await
    }
}
