mod rules;

pub use rules::{Applicability, Difficulty, RecommendationRule};

use crate::profile::{
    CanonicalGoal as Goal, CanonicalIndustry as Industry, CanonicalSize as Size, EnergyUsage,
    NormalizedProfile,
};

/// Immutable set of recommendation rules in declaration order.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: Vec<RecommendationRule>,
}

impl RuleCatalog {
    /// Catalog over caller-supplied rules, evaluated in the given order.
    pub fn new(rules: Vec<RecommendationRule>) -> Self {
        Self { rules }
    }

    pub fn standard() -> Self {
        let mut rules = energy_efficiency_rules();
        rules.extend(industry_rules());
        rules.extend(size_rules());
        rules.extend(goal_rules());
        Self::new(rules)
    }

    pub fn rules(&self) -> &[RecommendationRule] {
        &self.rules
    }

    pub fn get(&self, id: &str) -> Option<&RecommendationRule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    /// Rules whose every declared constraint holds, in catalog order.
    pub fn applicable_rules(
        &self,
        usage: &EnergyUsage,
        profile: &NormalizedProfile,
    ) -> Vec<&RecommendationRule> {
        self.rules
            .iter()
            .filter(|rule| rule.applies_to(usage, profile))
            .collect()
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

const MEDIUM_AND_UP: &[Size] = &[Size::Medium, Size::Large, Size::Enterprise];

fn energy_efficiency_rules() -> Vec<RecommendationRule> {
    vec![
        RecommendationRule {
            id: "led_retrofit_basic",
            title: "LED Lighting Retrofit",
            description: "Replace traditional incandescent and fluorescent lighting with energy-efficient LED bulbs throughout the facility.",
            category: "Energy Efficiency",
            difficulty: Difficulty::Easy,
            applicability: Applicability {
                min_kwh: Some(800.0),
                ..Applicability::default()
            },
            cost_savings_factor: 0.25,
            co2_reduction_factor: 0.25,
            base_roi_months: 18,
            implementation_cost_factor: 1.0,
            base_priority: 0.8,
            incentive_category: "lighting",
        },
        RecommendationRule {
            id: "hvac_optimization",
            title: "HVAC System Optimization",
            description: "Implement smart thermostats, regular maintenance schedules, and system optimization to improve heating and cooling efficiency.",
            category: "Energy Efficiency",
            difficulty: Difficulty::Medium,
            applicability: Applicability {
                min_kwh: Some(1500.0),
                ..Applicability::default()
            },
            cost_savings_factor: 0.15,
            co2_reduction_factor: 0.15,
            base_roi_months: 24,
            implementation_cost_factor: 1.0,
            base_priority: 0.7,
            incentive_category: "hvac",
        },
        RecommendationRule {
            id: "smart_power_management",
            title: "Smart Power Management Systems",
            description: "Install smart power strips and automated shutdown systems to eliminate phantom loads and reduce standby power consumption.",
            category: "Energy Efficiency",
            difficulty: Difficulty::Easy,
            applicability: Applicability {
                min_kwh: Some(500.0),
                sizes: Some(MEDIUM_AND_UP),
                ..Applicability::default()
            },
            cost_savings_factor: 0.08,
            co2_reduction_factor: 0.08,
            base_roi_months: 12,
            implementation_cost_factor: 1.0,
            base_priority: 0.6,
            incentive_category: "energy_efficiency",
        },
        RecommendationRule {
            id: "energy_audit_comprehensive",
            title: "Professional Energy Audit",
            description: "Conduct a comprehensive energy audit to identify specific areas of energy waste and optimization opportunities.",
            category: "Assessment",
            difficulty: Difficulty::Easy,
            applicability: Applicability::default(),
            cost_savings_factor: 0.10,
            co2_reduction_factor: 0.10,
            base_roi_months: 6,
            implementation_cost_factor: 1.0,
            base_priority: 0.9,
            incentive_category: "assessment",
        },
        RecommendationRule {
            id: "insulation_upgrade",
            title: "Building Insulation Upgrade",
            description: "Improve building insulation in walls, windows, and roofing to reduce heating and cooling energy requirements.",
            category: "Energy Efficiency",
            difficulty: Difficulty::Hard,
            applicability: Applicability {
                min_kwh: Some(2000.0),
                min_therms: Some(100.0),
                ..Applicability::default()
            },
            cost_savings_factor: 0.20,
            co2_reduction_factor: 0.18,
            base_roi_months: 36,
            implementation_cost_factor: 3.0,
            base_priority: 0.5,
            incentive_category: "building_envelope",
        },
    ]
}

fn industry_rules() -> Vec<RecommendationRule> {
    vec![
        RecommendationRule {
            id: "server_efficiency_tech",
            title: "Data Center and Server Efficiency",
            description: "Optimize server utilization, implement virtualization, and upgrade to energy-efficient hardware.",
            category: "Energy Efficiency",
            difficulty: Difficulty::Medium,
            applicability: Applicability {
                min_kwh: Some(2000.0),
                industries: Some(&[Industry::Technology]),
                ..Applicability::default()
            },
            cost_savings_factor: 0.30,
            co2_reduction_factor: 0.30,
            base_roi_months: 18,
            implementation_cost_factor: 1.0,
            base_priority: 0.8,
            incentive_category: "energy_efficiency",
        },
        RecommendationRule {
            id: "motor_efficiency_mfg",
            title: "High-Efficiency Motor Upgrades",
            description: "Replace standard motors with premium efficiency motors and implement variable frequency drives (VFDs).",
            category: "Energy Efficiency",
            difficulty: Difficulty::Medium,
            applicability: Applicability {
                min_kwh: Some(5000.0),
                industries: Some(&[Industry::Manufacturing]),
                ..Applicability::default()
            },
            cost_savings_factor: 0.25,
            co2_reduction_factor: 0.25,
            base_roi_months: 30,
            implementation_cost_factor: 1.0,
            base_priority: 0.7,
            incentive_category: "motors",
        },
        RecommendationRule {
            id: "refrigeration_efficiency_retail",
            title: "Refrigeration System Optimization",
            description: "Upgrade to high-efficiency refrigeration systems and implement advanced controls for better energy management.",
            category: "Energy Efficiency",
            difficulty: Difficulty::Hard,
            applicability: Applicability {
                min_kwh: Some(3000.0),
                industries: Some(&[Industry::Retail]),
                ..Applicability::default()
            },
            cost_savings_factor: 0.20,
            co2_reduction_factor: 0.20,
            base_roi_months: 36,
            implementation_cost_factor: 1.0,
            base_priority: 0.6,
            incentive_category: "energy_efficiency",
        },
        RecommendationRule {
            id: "medical_equipment_efficiency",
            title: "Medical Equipment Energy Management",
            description: "Implement energy-efficient medical equipment scheduling and optimize HVAC for critical areas.",
            category: "Energy Efficiency",
            difficulty: Difficulty::Medium,
            applicability: Applicability {
                min_kwh: Some(4000.0),
                industries: Some(&[Industry::Healthcare]),
                ..Applicability::default()
            },
            cost_savings_factor: 0.12,
            co2_reduction_factor: 0.12,
            base_roi_months: 24,
            implementation_cost_factor: 1.0,
            base_priority: 0.7,
            incentive_category: "hvac",
        },
        RecommendationRule {
            id: "guest_room_automation",
            title: "Guest Room Energy Automation",
            description: "Install occupancy-based energy management systems in guest rooms to optimize heating, cooling, and lighting.",
            category: "Energy Efficiency",
            difficulty: Difficulty::Medium,
            applicability: Applicability {
                min_kwh: Some(2500.0),
                industries: Some(&[Industry::Hospitality]),
                ..Applicability::default()
            },
            cost_savings_factor: 0.18,
            co2_reduction_factor: 0.18,
            base_roi_months: 20,
            implementation_cost_factor: 1.0,
            base_priority: 0.8,
            incentive_category: "hvac",
        },
    ]
}

fn size_rules() -> Vec<RecommendationRule> {
    vec![
        RecommendationRule {
            id: "small_business_basics",
            title: "Small Business Energy Basics",
            description: "Implement simple energy-saving measures like programmable thermostats, LED lighting, and Energy Star appliances.",
            category: "Energy Efficiency",
            difficulty: Difficulty::Easy,
            applicability: Applicability {
                sizes: Some(&[Size::Small]),
                ..Applicability::default()
            },
            cost_savings_factor: 0.15,
            co2_reduction_factor: 0.15,
            base_roi_months: 12,
            implementation_cost_factor: 1.0,
            base_priority: 0.8,
            incentive_category: "lighting",
        },
        RecommendationRule {
            id: "enterprise_energy_management",
            title: "Enterprise Energy Management System",
            description: "Implement comprehensive energy management software with real-time monitoring and automated optimization.",
            category: "Energy Efficiency",
            difficulty: Difficulty::Hard,
            applicability: Applicability {
                min_kwh: Some(10000.0),
                sizes: Some(&[Size::Enterprise]),
                ..Applicability::default()
            },
            cost_savings_factor: 0.20,
            co2_reduction_factor: 0.20,
            base_roi_months: 24,
            implementation_cost_factor: 2.0,
            base_priority: 0.7,
            incentive_category: "building_systems",
        },
    ]
}

fn goal_rules() -> Vec<RecommendationRule> {
    vec![
        RecommendationRule {
            id: "solar_installation",
            title: "Solar Panel Installation",
            description: "Install rooftop or ground-mounted solar panels to generate clean renewable energy and reduce grid dependence.",
            category: "Renewable Energy",
            difficulty: Difficulty::Hard,
            applicability: Applicability {
                min_kwh: Some(2000.0),
                goals: Some(&[Goal::RenewableEnergy]),
                ..Applicability::default()
            },
            cost_savings_factor: 0.30,
            co2_reduction_factor: 0.40,
            base_roi_months: 60,
            implementation_cost_factor: 4.0,
            base_priority: 0.9,
            incentive_category: "solar",
        },
        RecommendationRule {
            id: "waste_reduction_program",
            title: "Comprehensive Waste Reduction Program",
            description: "Implement recycling programs, composting, and waste stream analysis to minimize landfill waste.",
            category: "Waste Reduction",
            difficulty: Difficulty::Medium,
            applicability: Applicability {
                goals: Some(&[Goal::WasteReduction]),
                ..Applicability::default()
            },
            cost_savings_factor: 0.05,
            co2_reduction_factor: 0.08,
            base_roi_months: 18,
            implementation_cost_factor: 1.0,
            base_priority: 0.6,
            incentive_category: "waste",
        },
        RecommendationRule {
            id: "water_conservation_systems",
            title: "Water Conservation Systems",
            description: "Install low-flow fixtures, rainwater harvesting, and greywater recycling systems to reduce water consumption.",
            category: "Water Conservation",
            difficulty: Difficulty::Medium,
            applicability: Applicability {
                goals: Some(&[Goal::WaterConservation]),
                ..Applicability::default()
            },
            cost_savings_factor: 0.03,
            co2_reduction_factor: 0.02,
            base_roi_months: 30,
            implementation_cost_factor: 1.0,
            base_priority: 0.5,
            incentive_category: "water",
        },
        RecommendationRule {
            id: "green_transportation",
            title: "Green Transportation Initiative",
            description: "Implement electric vehicle fleet, employee incentives for public transit, and bike-sharing programs.",
            category: "Transportation",
            difficulty: Difficulty::Hard,
            applicability: Applicability {
                sizes: Some(MEDIUM_AND_UP),
                goals: Some(&[Goal::Transportation]),
                ..Applicability::default()
            },
            cost_savings_factor: 0.10,
            co2_reduction_factor: 0.15,
            base_roi_months: 48,
            implementation_cost_factor: 2.5,
            base_priority: 0.6,
            incentive_category: "transportation",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{normalize, BusinessProfile};
    use std::collections::HashSet;

    fn matched_ids(profile: &BusinessProfile) -> Vec<&'static str> {
        let catalog = RuleCatalog::standard();
        let usage = profile.energy_usage().expect("valid usage");
        let normalized = normalize(profile);
        catalog
            .applicable_rules(&usage, &normalized)
            .into_iter()
            .map(|rule| rule.id)
            .collect()
    }

    #[test]
    fn catalog_ids_are_unique() {
        let catalog = RuleCatalog::standard();
        let ids: HashSet<_> = catalog.rules().iter().map(|rule| rule.id).collect();
        assert_eq!(ids.len(), catalog.rules().len());
        assert_eq!(catalog.rules().len(), 16);
    }

    #[test]
    fn manufacturing_profile_matches_motor_upgrades() {
        let mut profile = BusinessProfile::new(
            "Manufacturing",
            "201-1000 employees",
            "Detroit, Michigan",
            6000.0,
            0.0,
        )
        .with_goals(["Reduce energy costs by 30%"]);
        profile.monthly_therms = 50.0;

        let ids = matched_ids(&profile);
        assert!(ids.contains(&"motor_efficiency_mfg"));
        assert!(ids.contains(&"led_retrofit_basic"));
        assert!(!ids.contains(&"insulation_upgrade"), "therms below 100");
        assert!(!ids.contains(&"small_business_basics"));
    }

    #[test]
    fn goal_rules_require_a_matching_goal() {
        let base = BusinessProfile::new("Retail", "51-200", "Miami, Florida", 2500.0, 0.0);
        assert!(!matched_ids(&base).contains(&"solar_installation"));

        let with_goal = base.with_goals(["Go solar by 2027"]);
        assert!(matched_ids(&with_goal).contains(&"solar_installation"));
    }

    #[test]
    fn zero_usage_still_matches_unconstrained_rules() {
        let profile = BusinessProfile::new("Consulting", "Small", "Ohio", 0.0, 0.0);
        let ids = matched_ids(&profile);
        assert_eq!(ids, vec!["energy_audit_comprehensive", "small_business_basics"]);
    }

    #[test]
    fn lookup_by_id() {
        let catalog = RuleCatalog::standard();
        let rule = catalog.get("solar_installation").expect("solar rule present");
        assert_eq!(rule.difficulty, Difficulty::Hard);
        assert!(catalog.get("perpetual_motion").is_none());
    }
}
