use crate::profile::{CanonicalGoal, CanonicalIndustry, CanonicalSize, EnergyUsage, NormalizedProfile};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// Conditions under which a rule applies. `None` imposes no constraint on that axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Applicability {
    pub min_kwh: Option<f64>,
    pub max_kwh: Option<f64>,
    pub min_therms: Option<f64>,
    pub max_therms: Option<f64>,
    pub industries: Option<&'static [CanonicalIndustry]>,
    pub sizes: Option<&'static [CanonicalSize]>,
    /// At least one listed goal must be present.
    pub goals: Option<&'static [CanonicalGoal]>,
}

impl Applicability {
    pub fn matches(&self, usage: &EnergyUsage, profile: &NormalizedProfile) -> bool {
        within(usage.monthly_kwh(), self.min_kwh, self.max_kwh)
            && within(usage.monthly_therms(), self.min_therms, self.max_therms)
            && self
                .industries
                .map_or(true, |allowed| allowed.contains(&profile.industry))
            && self
                .sizes
                .map_or(true, |allowed| allowed.contains(&profile.size))
            && self
                .goals
                .map_or(true, |required| required.iter().any(|goal| profile.has_goal(*goal)))
    }
}

fn within(value: f64, min: Option<f64>, max: Option<f64>) -> bool {
    min.map_or(true, |min| value >= min) && max.map_or(true, |max| value <= max)
}

/// Declarative recommendation with its applicability predicate and financial factors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationRule {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub difficulty: Difficulty,
    pub applicability: Applicability,
    /// Share of the baseline annual energy bill saved.
    pub cost_savings_factor: f64,
    /// Share of the annual carbon footprint avoided.
    pub co2_reduction_factor: f64,
    /// Reference payback quoted for the measure.
    pub base_roi_months: u32,
    /// Installed cost expressed in years of savings.
    pub implementation_cost_factor: f64,
    pub base_priority: f64,
    /// Keyword matched against incentive eligibility tags.
    pub incentive_category: &'static str,
}

impl RecommendationRule {
    pub fn applies_to(&self, usage: &EnergyUsage, profile: &NormalizedProfile) -> bool {
        self.applicability.matches(usage, profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn profile(goals: &[CanonicalGoal]) -> NormalizedProfile {
        NormalizedProfile {
            industry: CanonicalIndustry::Retail,
            size: CanonicalSize::Small,
            goals: goals.iter().copied().collect::<BTreeSet<_>>(),
        }
    }

    fn usage(kwh: f64, therms: f64) -> EnergyUsage {
        EnergyUsage::new(kwh, therms).expect("valid usage")
    }

    #[test]
    fn unconstrained_rule_matches_everything() {
        let applicability = Applicability::default();
        assert!(applicability.matches(&usage(0.0, 0.0), &profile(&[])));
    }

    #[test]
    fn usage_bounds_are_inclusive() {
        let applicability = Applicability {
            min_kwh: Some(800.0),
            max_kwh: Some(2_000.0),
            ..Applicability::default()
        };
        assert!(applicability.matches(&usage(800.0, 0.0), &profile(&[])));
        assert!(applicability.matches(&usage(2_000.0, 0.0), &profile(&[])));
        assert!(!applicability.matches(&usage(799.9, 0.0), &profile(&[])));
        assert!(!applicability.matches(&usage(2_000.1, 0.0), &profile(&[])));
    }

    #[test]
    fn every_declared_axis_must_hold() {
        let applicability = Applicability {
            industries: Some(&[CanonicalIndustry::Retail]),
            sizes: Some(&[CanonicalSize::Large]),
            ..Applicability::default()
        };
        assert!(!applicability.matches(&usage(5_000.0, 0.0), &profile(&[])));
    }

    #[test]
    fn any_required_goal_is_enough() {
        let applicability = Applicability {
            goals: Some(&[CanonicalGoal::WasteReduction, CanonicalGoal::RenewableEnergy]),
            ..Applicability::default()
        };
        assert!(applicability.matches(
            &usage(0.0, 0.0),
            &profile(&[CanonicalGoal::RenewableEnergy])
        ));
        assert!(!applicability.matches(
            &usage(0.0, 0.0),
            &profile(&[CanonicalGoal::SupplyChain])
        ));
    }
}
