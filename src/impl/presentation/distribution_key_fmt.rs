use crate::entities::DistributionKey;

impl DistributionKey {
    /// Display label of the distribution basis.
    pub fn label(&self) -> &'static str {
        match self {
            DistributionKey::LivingArea => "Wohnfläche (m²)",
            DistributionKey::OccupantCount => "Personen",
            DistributionKey::UnitCount => "Einheiten",
            DistributionKey::Consumption => "Verbrauch",
        }
    }

    /// Unit suffix for share values measured in this key.
    pub(crate) fn unit_label(&self) -> &'static str {
        match self {
            DistributionKey::LivingArea => "m²",
            DistributionKey::OccupantCount => "Personen",
            DistributionKey::UnitCount => "Einheiten",
            DistributionKey::Consumption => "Einheiten",
        }
    }
}
