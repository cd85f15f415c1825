/// Per-tenant parameters of one statement request. Created fresh per
/// request; never persisted by this engine.
#[derive(Debug, Clone)]
pub struct TenantShareInput {
    pub name: String,
    pub address: String,
    /// Interpreted according to the property's distribution key
    /// (m² occupied, persons, or units).
    pub share_value: f64,
    pub monthly_prepayment: f64,
    pub months_prepaid: u32,
}
