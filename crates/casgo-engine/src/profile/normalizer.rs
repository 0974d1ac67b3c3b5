use super::domain::BusinessProfile;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalIndustry {
    Technology,
    Manufacturing,
    Retail,
    Healthcare,
    Hospitality,
    Education,
    Financial,
    Logistics,
    Construction,
    Agriculture,
    Other,
}

impl CanonicalIndustry {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Manufacturing => "Manufacturing",
            Self::Retail => "Retail",
            Self::Healthcare => "Healthcare",
            Self::Hospitality => "Hospitality",
            Self::Education => "Education",
            Self::Financial => "Financial Services",
            Self::Logistics => "Logistics & Transportation",
            Self::Construction => "Construction",
            Self::Agriculture => "Agriculture",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalSize {
    Small,
    Medium,
    Large,
    Enterprise,
}

impl CanonicalSize {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "1-50 employees",
            Self::Medium => "51-200 employees",
            Self::Large => "201-1000 employees",
            Self::Enterprise => "1000+ employees",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalGoal {
    EnergyEfficiency,
    RenewableEnergy,
    CarbonReduction,
    WasteReduction,
    WaterConservation,
    Transportation,
    GreenBuilding,
    SupplyChain,
}

impl CanonicalGoal {
    pub const fn label(self) -> &'static str {
        match self {
            Self::EnergyEfficiency => "Energy Efficiency",
            Self::RenewableEnergy => "Renewable Energy",
            Self::CarbonReduction => "Carbon Footprint Reduction",
            Self::WasteReduction => "Waste Reduction",
            Self::WaterConservation => "Water Conservation",
            Self::Transportation => "Sustainable Transportation",
            Self::GreenBuilding => "Green Building",
            Self::SupplyChain => "Sustainable Supply Chain",
        }
    }
}

/// Canonical view of a profile used by rule matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedProfile {
    pub industry: CanonicalIndustry,
    pub size: CanonicalSize,
    pub goals: BTreeSet<CanonicalGoal>,
}

impl NormalizedProfile {
    pub fn has_goal(&self, goal: CanonicalGoal) -> bool {
        self.goals.contains(&goal)
    }
}

// Declaration order is significant: the first matching entry wins.
const INDUSTRY_KEYWORDS: &[(CanonicalIndustry, &[&str])] = &[
    (CanonicalIndustry::Technology, &["tech", "software", "it", "computer"]),
    (CanonicalIndustry::Manufacturing, &["manufacturing", "factory", "production"]),
    (CanonicalIndustry::Retail, &["retail", "store", "shopping"]),
    (CanonicalIndustry::Healthcare, &["health", "medical", "hospital"]),
    (CanonicalIndustry::Hospitality, &["hotel", "restaurant", "hospitality"]),
    (CanonicalIndustry::Education, &["education", "school", "university"]),
    (CanonicalIndustry::Financial, &["financial", "bank", "finance"]),
    (CanonicalIndustry::Logistics, &["logistics", "transport", "shipping"]),
    (CanonicalIndustry::Construction, &["construction", "building"]),
    (CanonicalIndustry::Agriculture, &["agriculture", "farming"]),
];

const SIZE_KEYWORDS: &[(CanonicalSize, &[&str])] = &[
    (CanonicalSize::Small, &["small", "1-50", "startup"]),
    (CanonicalSize::Medium, &["medium", "51-200", "mid"]),
    (CanonicalSize::Large, &["large", "201-1000"]),
    (CanonicalSize::Enterprise, &["enterprise", "1000+", "corporation"]),
];

const GOAL_KEYWORDS: &[(CanonicalGoal, &[&str])] = &[
    (CanonicalGoal::EnergyEfficiency, &["energy", "efficiency"]),
    (CanonicalGoal::RenewableEnergy, &["renewable", "solar", "wind"]),
    (CanonicalGoal::CarbonReduction, &["carbon", "emissions", "co2"]),
    (CanonicalGoal::WasteReduction, &["waste", "recycling"]),
    (CanonicalGoal::WaterConservation, &["water", "conservation"]),
    (CanonicalGoal::Transportation, &["transport", "fleet", "commute"]),
    (CanonicalGoal::GreenBuilding, &["building", "leed", "green"]),
    (CanonicalGoal::SupplyChain, &["supply", "vendor", "procurement"]),
];

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}

fn first_match<T: Copy>(raw: &str, table: &[(T, &[&str])]) -> Option<T> {
    let lowered = raw.to_lowercase();
    table
        .iter()
        .find(|(_, keywords)| contains_any(&lowered, keywords))
        .map(|(category, _)| *category)
}

pub fn categorize_industry(raw: &str) -> CanonicalIndustry {
    first_match(raw, INDUSTRY_KEYWORDS).unwrap_or(CanonicalIndustry::Other)
}

pub fn categorize_size(raw: &str) -> CanonicalSize {
    first_match(raw, SIZE_KEYWORDS).unwrap_or(CanonicalSize::Medium)
}

/// Every keyword group is tested against every goal; goal text with no hit is dropped.
pub fn categorize_goals<S: AsRef<str>>(goals: &[S]) -> BTreeSet<CanonicalGoal> {
    let mut categorized = BTreeSet::new();
    for goal in goals {
        let lowered = goal.as_ref().to_lowercase();
        for (category, keywords) in GOAL_KEYWORDS {
            if contains_any(&lowered, keywords) {
                categorized.insert(*category);
            }
        }
    }
    categorized
}

pub fn normalize(profile: &BusinessProfile) -> NormalizedProfile {
    NormalizedProfile {
        industry: categorize_industry(&profile.industry),
        size: categorize_size(&profile.company_size),
        goals: categorize_goals(&profile.goals),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn industry_matching_is_case_insensitive() {
        assert_eq!(
            categorize_industry("MANUFACTURING"),
            CanonicalIndustry::Manufacturing
        );
        assert_eq!(
            categorize_industry("Regional Bank"),
            CanonicalIndustry::Financial
        );
        assert_eq!(categorize_industry("Dairy Farming"), CanonicalIndustry::Agriculture);
    }

    #[test]
    fn first_listed_industry_wins() {
        // "it" is a technology keyword and is checked before "health".
        assert_eq!(
            categorize_industry("Healthcare IT"),
            CanonicalIndustry::Technology
        );
        // "hospital" itself contains "it".
        assert_eq!(
            categorize_industry("Hospital"),
            CanonicalIndustry::Technology
        );
        assert_eq!(
            categorize_industry("Medical Clinic"),
            CanonicalIndustry::Healthcare
        );
    }

    #[test]
    fn unknown_industry_maps_to_other() {
        assert_eq!(categorize_industry("Mining"), CanonicalIndustry::Other);
        assert_eq!(categorize_industry(""), CanonicalIndustry::Other);
    }

    #[test]
    fn size_defaults_to_medium() {
        assert_eq!(categorize_size("1-50 employees"), CanonicalSize::Small);
        assert_eq!(categorize_size("201-1000 employees"), CanonicalSize::Large);
        assert_eq!(categorize_size("Global Corporation"), CanonicalSize::Enterprise);
        assert_eq!(categorize_size("unknown headcount"), CanonicalSize::Medium);
    }

    #[test]
    fn goals_collect_every_matching_group_without_duplicates() {
        let goals = categorize_goals(&[
            "Install solar to cut carbon emissions",
            "Reduce energy costs by 30%",
            "Improve energy efficiency",
            "Make everyone happier",
        ]);

        let expected: BTreeSet<_> = [
            CanonicalGoal::EnergyEfficiency,
            CanonicalGoal::RenewableEnergy,
            CanonicalGoal::CarbonReduction,
        ]
        .into_iter()
        .collect();
        assert_eq!(goals, expected);
    }

    #[test]
    fn unmatched_goals_are_dropped() {
        let goals = categorize_goals(&["Be the best company"]);
        assert!(goals.is_empty());
    }

    #[test]
    fn normalize_combines_all_axes() {
        let profile = BusinessProfile::new("Software", "Startup", "Austin, Texas", 900.0, 0.0)
            .with_goals(["Zero waste office", "EV fleet"]);
        let normalized = normalize(&profile);

        assert_eq!(normalized.industry, CanonicalIndustry::Technology);
        assert_eq!(normalized.size, CanonicalSize::Small);
        assert!(normalized.has_goal(CanonicalGoal::WasteReduction));
        assert!(normalized.has_goal(CanonicalGoal::Transportation));
        assert_eq!(normalized.goals.len(), 2);
    }
}
