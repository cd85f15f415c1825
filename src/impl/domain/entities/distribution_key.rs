/// Basis on which shared property costs are split among occupants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Deserialize)]
pub enum DistributionKey {
    LivingArea,
    OccupantCount,
    UnitCount,
    Consumption,
}

/// Property-wide total against which a tenant's individual share value is
/// measured. Not resolving is a legitimate outcome (incomplete profile
/// data, or a consumption key without metered readings), not an error;
/// downstream stages carry it as "no allocation possible".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Divisor {
    Resolved(f64),
    Unresolvable,
}

impl Divisor {
    pub fn value(&self) -> Option<f64> {
        match self {
            Divisor::Resolved(v) => Some(*v),
            Divisor::Unresolvable => None,
        }
    }
}
