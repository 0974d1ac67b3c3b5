use crate::calculator::{
    CarbonFootprint, EnergyCosts, EnvironmentalEquivalents, IncentiveSummary, Payback,
    RoiMetrics, SolarPotential,
};
use crate::catalog::{Difficulty, RecommendationRule};
use serde::Serialize;

/// One ranked recommendation as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Dollars per year.
    pub estimated_cost_savings: f64,
    /// Tons of CO2 per year.
    pub estimated_co2_reduction: f64,
    pub roi_months: Payback,
    pub difficulty: Difficulty,
    pub priority_score: f64,
}

impl RecommendationResult {
    pub(crate) fn from_rule(
        rule: &RecommendationRule,
        metrics: &RoiMetrics,
        priority_score: f64,
    ) -> Self {
        Self {
            id: rule.id.to_string(),
            title: rule.title.to_string(),
            description: rule.description.to_string(),
            category: rule.category.to_string(),
            estimated_cost_savings: metrics.annual_savings,
            estimated_co2_reduction: metrics.co2_reduction_tons,
            roi_months: metrics.payback,
            difficulty: rule.difficulty,
            priority_score,
        }
    }
}

/// Detailed breakdown of a single rule against a profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationAnalysis {
    pub recommendation: RecommendationResult,
    /// Whether the rule's applicability predicate holds for the profile.
    pub applicable: bool,
    pub region: String,
    pub implementation_cost: f64,
    pub roi: RoiMetrics,
    pub incentives: IncentiveSummary,
    pub post_incentive_payback: Payback,
    pub equivalents: EnvironmentalEquivalents,
    /// Typical payback quoted for the measure, independent of this profile.
    pub reference_payback_months: u32,
}

/// Current-state snapshot of a facility before any intervention.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineAssessment {
    pub region: String,
    pub industry: String,
    pub company_size: String,
    pub energy_costs: EnergyCosts,
    pub carbon_footprint: CarbonFootprint,
    pub equivalents: EnvironmentalEquivalents,
    pub solar: SolarPotential,
    /// True when floor area came from the industry energy-intensity estimate.
    pub facility_sqft_estimated: bool,
    pub template_id: String,
}
