use fractic_server_error::ServerError;

use crate::errors::{InvalidPrepaymentMonths, NegativePrepayment};

/// Total amount the tenant prepaid over the billing period. The month
/// count must cover at least one month; the usual value is 12.
pub(crate) fn prepayment_total(monthly: f64, months: u32) -> Result<f64, ServerError> {
    if monthly < 0.0 {
        return Err(NegativePrepayment::new(monthly));
    }
    if months == 0 {
        return Err(InvalidPrepaymentMonths::new(months));
    }
    Ok(monthly * f64::from(months))
}

/// Signed balance after reconciling the allocated share against the
/// prepayments. Positive: tenant owes more. Negative: credit owed to the
/// tenant. Zero: exactly balanced.
pub(crate) fn final_balance(tenant_total_share: f64, prepayment_total: f64) -> f64 {
    tenant_total_share - prepayment_total
}
