use crate::entities::{DistributionKey, Divisor, PropertyProfile};

impl PropertyProfile {
    /// Resolve the divisor for this property's declared distribution key.
    ///
    /// Missing or non-positive profile attributes resolve to
    /// `Unresolvable`, as do consumption-based keys: without per-unit
    /// metered readings there is no generic consumption divisor.
    pub fn divisor(&self) -> Divisor {
        let value = match self.distribution_key {
            DistributionKey::LivingArea => self.living_area,
            DistributionKey::OccupantCount => self.occupant_count.map(f64::from),
            DistributionKey::UnitCount => self.unit_count.map(f64::from),
            DistributionKey::Consumption => None,
        };
        match value {
            Some(v) if v > 0.0 => Divisor::Resolved(v),
            _ => Divisor::Unresolvable,
        }
    }

    /// Single-unit billing model: not explicitly multi-unit and at most
    /// one unit. A missing unit count counts as a single unit.
    pub(crate) fn is_single_unit(&self) -> bool {
        !self.multi_unit && self.unit_count.unwrap_or(1) <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(key: DistributionKey) -> PropertyProfile {
        PropertyProfile {
            name: "Haus Lindenstraße".into(),
            address: "Lindenstraße 12, 50674 Köln".into(),
            owner_name: "Hausverwaltung Schmitz".into(),
            owner_address: None,
            owner_contact: None,
            living_area: Some(150.0),
            occupant_count: Some(5),
            unit_count: Some(3),
            distribution_key: key,
            multi_unit: true,
        }
    }

    #[test]
    fn resolves_each_key_from_its_profile_attribute() {
        assert_eq!(
            profile(DistributionKey::LivingArea).divisor(),
            Divisor::Resolved(150.0)
        );
        assert_eq!(
            profile(DistributionKey::OccupantCount).divisor(),
            Divisor::Resolved(5.0)
        );
        assert_eq!(
            profile(DistributionKey::UnitCount).divisor(),
            Divisor::Resolved(3.0)
        );
    }

    #[test]
    fn missing_or_zero_attributes_are_unresolvable() {
        let mut p = profile(DistributionKey::LivingArea);
        p.living_area = None;
        assert_eq!(p.divisor(), Divisor::Unresolvable);

        p.living_area = Some(0.0);
        assert_eq!(p.divisor(), Divisor::Unresolvable);
    }

    #[test]
    fn consumption_is_unresolvable_even_with_a_complete_profile() {
        assert_eq!(
            profile(DistributionKey::Consumption).divisor(),
            Divisor::Unresolvable
        );
    }

    #[test]
    fn single_unit_requires_non_multi_model_and_at_most_one_unit() {
        let mut p = profile(DistributionKey::LivingArea);
        assert!(!p.is_single_unit());

        p.multi_unit = false;
        p.unit_count = Some(3);
        assert!(!p.is_single_unit());

        p.unit_count = Some(1);
        assert!(p.is_single_unit());

        p.unit_count = None;
        assert!(p.is_single_unit());
    }
}
