use fractic_server_error::ServerError;

use crate::{
    entities::{
        Allocation, BillingResult, CategoryShare, CostCategory, Divisor, OperatingCosts,
        PropertyProfile, ResolvedAllocation, TenantShareInput,
    },
    errors::NegativeShareValue,
};

use super::reconciliation;

/// Combines the cost table, the property profile and one tenant's
/// parameters into a `BillingResult`.
pub(crate) struct AllocationProcessor<'a> {
    costs: &'a OperatingCosts,
    profile: &'a PropertyProfile,
    tenant: &'a TenantShareInput,
}

impl<'a> AllocationProcessor<'a> {
    pub(crate) fn new(
        costs: &'a OperatingCosts,
        profile: &'a PropertyProfile,
        tenant: &'a TenantShareInput,
    ) -> Self {
        Self {
            costs,
            profile,
            tenant,
        }
    }

    pub(crate) fn process(self) -> Result<BillingResult, ServerError> {
        if self.tenant.share_value < 0.0 {
            return Err(NegativeShareValue::new(self.tenant.share_value));
        }
        let prepayment_total = reconciliation::prepayment_total(
            self.tenant.monthly_prepayment,
            self.tenant.months_prepaid,
        )?;

        let total_cost = self.costs.total();
        let (allocation, tenant_total_share) = match self.profile.divisor() {
            Divisor::Resolved(divisor) => {
                // A single-unit property has no sub-allocation: the
                // tenant carries the full divisor.
                let effective_share_value = if self.profile.is_single_unit() {
                    divisor
                } else {
                    self.tenant.share_value
                };
                let cost_per_unit = total_cost / divisor;
                let tenant_total_share = cost_per_unit * effective_share_value;
                (
                    Allocation::Resolved(ResolvedAllocation {
                        divisor,
                        effective_share_value,
                        share_percent: effective_share_value / divisor * 100.0,
                        cost_per_unit,
                        tenant_total_share,
                        final_balance: reconciliation::final_balance(
                            tenant_total_share,
                            prepayment_total,
                        ),
                    }),
                    tenant_total_share,
                )
            }
            Divisor::Unresolvable => (Allocation::Unresolvable, 0.0),
        };

        // The tenant total is computed once from the divisor and then
        // distributed back across the categories in proportion to each
        // category's part of the aggregate cost. Dividing each category
        // by the divisor independently would not keep the itemized rows
        // summing to the total share.
        let category_shares = CostCategory::all()
            .map(|category| CategoryShare {
                category,
                total_amount: self.costs.amount(category),
                tenant_share: tenant_total_share * self.costs.proportion(category),
            })
            .collect();

        Ok(BillingResult {
            year: self.costs.year(),
            total_cost,
            category_shares,
            prepayment_total,
            allocation,
        })
    }
}
