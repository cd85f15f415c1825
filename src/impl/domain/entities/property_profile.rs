use super::distribution_key::DistributionKey;

/// Read-only subset of the property record needed for billing. Owned by
/// the external property service; this engine never mutates it.
#[derive(Debug, Clone)]
pub struct PropertyProfile {
    pub name: String,
    pub address: String,
    /// Owner data doubles as the landlord block on the statement.
    pub owner_name: String,
    /// Falls back to the property address on the statement when absent.
    pub owner_address: Option<String>,
    /// Contact line on the statement; the line is omitted entirely when
    /// absent.
    pub owner_contact: Option<String>,
    pub living_area: Option<f64>,
    pub occupant_count: Option<u32>,
    pub unit_count: Option<u32>,
    pub distribution_key: DistributionKey,
    /// Whether the billing model explicitly covers multiple units. When
    /// false and the unit count is at most one, the single tenant carries
    /// the full divisor regardless of the entered share value.
    pub multi_unit: bool,
}
