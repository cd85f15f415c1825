use crate::entities::CostCategory;

impl CostCategory {
    /// Display label as printed on the statement.
    pub fn label(&self) -> &'static str {
        match self {
            CostCategory::PropertyTax => "Grundsteuer",
            CostCategory::WaterSupply => "Wasserversorgung",
            CostCategory::Heating => "Heizung",
            CostCategory::HotWater => "Warmwasser",
            CostCategory::StreetCleaningAndWaste => "Straßenreinigung und Müllbeseitigung",
            CostCategory::BuildingCleaning => "Gebäudereinigung",
            CostCategory::GardenMaintenance => "Gartenpflege und Winterdienst",
            CostCategory::CommonElectricity => "Allgemeinstrom",
            CostCategory::Caretaker => "Hauswart",
            CostCategory::Elevator => "Aufzug",
            CostCategory::BuildingInsurance => "Gebäudeversicherung",
            CostCategory::CableTv => "Kabelanschluss",
            CostCategory::Management => "Verwaltungskosten",
            CostCategory::Other => "Sonstige Betriebskosten",
        }
    }
}
