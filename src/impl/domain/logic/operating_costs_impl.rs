use fractic_server_error::ServerError;

use crate::{
    entities::{CostCategory, OperatingCosts},
    errors::NegativeCostAmount,
};

impl OperatingCosts {
    /// Set or update the amount for a single category. The only mutation
    /// this type exposes. Negative amounts are rejected, never clamped.
    pub fn set_amount(&mut self, category: CostCategory, amount: f64) -> Result<(), ServerError> {
        if amount < 0.0 {
            return Err(NegativeCostAmount::new(&format!("{:?}", category), amount));
        }
        self.amounts[category as usize] = amount;
        Ok(())
    }

    pub fn amount(&self, category: CostCategory) -> f64 {
        self.amounts[category as usize]
    }

    /// Sum over all categories. Never negative, since every entry is
    /// validated on the way in.
    pub fn total(&self) -> f64 {
        self.amounts.iter().sum()
    }

    /// Fraction of the total cost carried by the given category, in
    /// [0, 1]. While no costs are entered the total is zero and every
    /// proportion is a defined zero, not a division error: no category
    /// can claim a share of nothing.
    pub fn proportion(&self, category: CostCategory) -> f64 {
        let total = self.total();
        if total > 0.0 {
            self.amount(category) / total
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_default_to_zero_for_every_category() {
        let costs = OperatingCosts::new(2025);
        for category in CostCategory::all() {
            assert_eq!(costs.amount(category), 0.0);
        }
        assert_eq!(costs.total(), 0.0);
    }

    #[test]
    fn set_amount_updates_and_overwrites() {
        let mut costs = OperatingCosts::new(2025);
        costs.set_amount(CostCategory::Heating, 1200.0).unwrap();
        costs.set_amount(CostCategory::WaterSupply, 300.0).unwrap();
        assert_eq!(costs.total(), 1500.0);

        costs.set_amount(CostCategory::Heating, 900.0).unwrap();
        assert_eq!(costs.amount(CostCategory::Heating), 900.0);
        assert_eq!(costs.total(), 1200.0);
    }

    #[test]
    fn negative_amounts_are_rejected_without_side_effects() {
        let mut costs = OperatingCosts::new(2025);
        costs.set_amount(CostCategory::Heating, 1200.0).unwrap();
        assert!(costs.set_amount(CostCategory::Heating, -1.0).is_err());
        assert_eq!(costs.amount(CostCategory::Heating), 1200.0);
    }

    #[test]
    fn proportions_sum_to_one_when_costs_exist() {
        let mut costs = OperatingCosts::new(2025);
        costs.set_amount(CostCategory::Heating, 1200.0).unwrap();
        costs.set_amount(CostCategory::WaterSupply, 300.0).unwrap();
        costs.set_amount(CostCategory::Elevator, 77.31).unwrap();

        let sum: f64 = CostCategory::all().map(|c| costs.proportion(c)).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!((costs.proportion(CostCategory::Heating) - 1200.0 / 1577.31).abs() < 1e-9);
    }

    #[test]
    fn proportions_are_all_zero_when_no_costs_entered() {
        let costs = OperatingCosts::new(2025);
        for category in CostCategory::all() {
            assert_eq!(costs.proportion(category), 0.0);
        }
    }
}
