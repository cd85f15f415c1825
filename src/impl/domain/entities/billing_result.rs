use super::cost_category::CostCategory;

/// One itemized statement row: a category's aggregate cost and the
/// tenant's allocated part of it.
#[derive(Debug, Clone)]
pub struct CategoryShare {
    pub category: CostCategory,
    pub total_amount: f64,
    /// Defined zero when no divisor resolves, while the aggregate values
    /// in `Allocation` are absent altogether. The asymmetry is
    /// deliberate: a row with nothing allocated still prints as a zero
    /// line, whereas "cost per unit" without a divisor has no value at
    /// all.
    pub tenant_share: f64,
}

/// The cluster of values that only exist once a divisor resolves. Either
/// all of them are present, or none of them are; splitting them over
/// individual optionals would leave that contract implicit.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAllocation {
    pub divisor: f64,
    /// Share value actually used for allocation. Equals the full divisor
    /// for a single-unit property regardless of the entered value.
    pub effective_share_value: f64,
    pub share_percent: f64,
    pub cost_per_unit: f64,
    pub tenant_total_share: f64,
    /// Positive: tenant owes an additional payment. Negative: credit
    /// owed to the tenant. Zero: exactly balanced.
    pub final_balance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Allocation {
    Resolved(ResolvedAllocation),
    Unresolvable,
}

impl Allocation {
    pub fn resolved(&self) -> Option<&ResolvedAllocation> {
        match self {
            Allocation::Resolved(r) => Some(r),
            Allocation::Unresolvable => None,
        }
    }
}

/// Derived billing output. Fully recomputed on every request; never
/// cached or mutated in place.
#[derive(Debug, Clone)]
pub struct BillingResult {
    pub year: i32,
    pub total_cost: f64,
    /// Ordered like the category catalog, one entry per category.
    pub category_shares: Vec<CategoryShare>,
    pub prepayment_total: f64,
    pub allocation: Allocation,
}
