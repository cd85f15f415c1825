/// Allocable operating-cost categories, in statement line order. The
/// vocabulary is the legally defined one (Betriebskostenverordnung) and is
/// not user-extensible.
///
/// The declaration order is significant: it is the order in which the
/// itemized statement table prints its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Deserialize)]
pub enum CostCategory {
    PropertyTax,
    WaterSupply,
    Heating,
    HotWater,
    StreetCleaningAndWaste,
    BuildingCleaning,
    GardenMaintenance,
    CommonElectricity,
    Caretaker,
    Elevator,
    BuildingInsurance,
    CableTv,
    Management,
    Other,
}

pub(crate) const CATEGORY_COUNT: usize = 14;

static ALL_CATEGORIES: [CostCategory; CATEGORY_COUNT] = [
    CostCategory::PropertyTax,
    CostCategory::WaterSupply,
    CostCategory::Heating,
    CostCategory::HotWater,
    CostCategory::StreetCleaningAndWaste,
    CostCategory::BuildingCleaning,
    CostCategory::GardenMaintenance,
    CostCategory::CommonElectricity,
    CostCategory::Caretaker,
    CostCategory::Elevator,
    CostCategory::BuildingInsurance,
    CostCategory::CableTv,
    CostCategory::Management,
    CostCategory::Other,
];

impl CostCategory {
    /// All categories in display order. Finite, restartable, and always
    /// the same sequence.
    pub fn all() -> impl Iterator<Item = CostCategory> {
        ALL_CATEGORIES.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_yields_every_category_once_in_declaration_order() {
        let first: Vec<CostCategory> = CostCategory::all().collect();
        let second: Vec<CostCategory> = CostCategory::all().collect();
        assert_eq!(first.len(), CATEGORY_COUNT);
        assert_eq!(first, second);
        assert_eq!(first[0], CostCategory::PropertyTax);
        assert_eq!(first[CATEGORY_COUNT - 1], CostCategory::Other);
        for (i, category) in first.iter().enumerate() {
            assert_eq!(*category as usize, i);
        }
    }
}
