use super::{operating_costs::OperatingCosts, tenant::TenantShareInput};

/// Parsed inputs of one billing run: the property's cost table and the
/// tenant roster to bill against it.
pub struct BillingInputs {
    pub costs: OperatingCosts,
    pub tenants: Vec<TenantShareInput>,
}
