//! Ranking pipeline: normalize the profile, filter the catalog, price and score each rule.

mod fallback;
mod results;

pub use fallback::{fallback_recommendations, Advice, AdvisorService, FALLBACK_KWH_CEILING};
pub use results::{BaselineAssessment, RecommendationAnalysis, RecommendationResult};

use crate::calculator::{
    calculate_roi, environmental_equivalents, round_to, Intervention, RoiMetrics,
    SustainabilityCalculator,
};
use crate::catalog::{RecommendationRule, RuleCatalog};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::profile::{normalize, BusinessProfile, EnergyUsage};
use crate::reference::ReferenceData;
use crate::scoring::{PriorityScorer, ScoreInputs};
use crate::templates::{PromptTemplate, TemplateCatalog};
use std::sync::Arc;
use tracing::{debug, info};

/// Per-rule figures shared by ranking and detailed analysis.
struct Evaluation {
    result: RecommendationResult,
    metrics: RoiMetrics,
    implementation_cost: f64,
}

#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: Arc<RuleCatalog>,
    templates: Arc<TemplateCatalog>,
    calculator: SustainabilityCalculator,
    scorer: PriorityScorer,
}

impl RecommendationEngine {
    pub fn new(reference: Arc<ReferenceData>, config: EngineConfig) -> Self {
        Self::with_catalogs(
            reference,
            config,
            Arc::new(RuleCatalog::standard()),
            Arc::new(TemplateCatalog::standard()),
        )
    }

    pub fn with_catalogs(
        reference: Arc<ReferenceData>,
        config: EngineConfig,
        catalog: Arc<RuleCatalog>,
        templates: Arc<TemplateCatalog>,
    ) -> Self {
        Self {
            catalog,
            templates,
            calculator: SustainabilityCalculator::new(reference, config),
            scorer: PriorityScorer,
        }
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    pub fn templates(&self) -> &TemplateCatalog {
        &self.templates
    }

    pub fn calculator(&self) -> &SustainabilityCalculator {
        &self.calculator
    }

    pub fn select_template(&self, profile: &BusinessProfile) -> &PromptTemplate {
        self.templates.select(profile)
    }

    /// Ranked recommendations, highest priority first, at most `max_recommendations` long.
    ///
    /// Ties keep catalog order. A profile that matches no rule yields an empty list.
    pub fn generate(
        &self,
        profile: &BusinessProfile,
    ) -> Result<Vec<RecommendationResult>, EngineError> {
        let usage = profile.energy_usage()?;
        let normalized = normalize(profile);
        let matched = self.catalog.applicable_rules(&usage, &normalized);

        debug!(
            industry = normalized.industry.label(),
            size = normalized.size.label(),
            goals = normalized.goals.len(),
            matched = matched.len(),
            "filtered recommendation catalog"
        );

        let mut results = matched
            .into_iter()
            .map(|rule| {
                self.evaluate(rule, &usage, &profile.location)
                    .map(|evaluation| evaluation.result)
            })
            .collect::<Result<Vec<_>, _>>()?;

        results.sort_by(|left, right| right.priority_score.total_cmp(&left.priority_score));
        results.truncate(self.calculator.config().max_recommendations);

        info!(
            location = %profile.location,
            returned = results.len(),
            template = self.select_template(profile).id,
            "generated recommendations"
        );
        Ok(results)
    }

    /// Full financial breakdown of one catalog rule, whether or not it applies to the profile.
    pub fn analyze(
        &self,
        profile: &BusinessProfile,
        rule_id: &str,
    ) -> Result<RecommendationAnalysis, EngineError> {
        let rule = self
            .catalog
            .get(rule_id)
            .ok_or_else(|| EngineError::UnknownRule(rule_id.to_string()))?;
        let usage = profile.energy_usage()?;
        let applicable = rule.applies_to(&usage, &normalize(profile));
        let evaluation = self.evaluate(rule, &usage, &profile.location)?;

        let incentives = self.calculator.optimize_incentives(
            rule.incentive_category,
            evaluation.implementation_cost,
            &profile.location,
        )?;
        let post_incentive_payback = calculate_roi(
            evaluation.metrics.annual_savings,
            incentives.post_incentive_cost.max(0.0),
        )
        .map_months(|months| round_to(months, 1));

        debug!(rule = rule.id, applicable, "analyzed recommendation");

        Ok(RecommendationAnalysis {
            region: self.calculator.reference().regions.region_for(&profile.location).to_string(),
            implementation_cost: evaluation.metrics.implementation_cost,
            equivalents: environmental_equivalents(evaluation.metrics.co2_reduction_tons),
            roi: evaluation.metrics,
            recommendation: evaluation.result,
            applicable,
            incentives,
            post_incentive_payback,
            reference_payback_months: rule.base_roi_months,
        })
    }

    /// Costs, emissions and solar potential of the facility as it stands.
    pub fn baseline(&self, profile: &BusinessProfile) -> Result<BaselineAssessment, EngineError> {
        let usage = profile.energy_usage()?;
        let normalized = normalize(profile);
        let reference = self.calculator.reference();

        let (facility_sqft, facility_sqft_estimated) = match profile.facility_sqft()? {
            Some(sqft) => (sqft, false),
            None => (
                reference
                    .industries
                    .estimate_facility_sqft(normalized.industry.label(), usage.monthly_kwh()),
                true,
            ),
        };

        let carbon_footprint = self.calculator.carbon_footprint(&usage, &profile.location);
        let solar = self
            .calculator
            .solar_potential(&usage, &profile.location, facility_sqft, None)?;

        Ok(BaselineAssessment {
            region: reference.regions.region_for(&profile.location).to_string(),
            industry: normalized.industry.label().to_string(),
            company_size: normalized.size.label().to_string(),
            energy_costs: self.calculator.energy_costs(&usage, &profile.location),
            equivalents: environmental_equivalents(carbon_footprint.annual_co2_tons),
            carbon_footprint,
            solar,
            facility_sqft_estimated,
            template_id: self.select_template(profile).id.to_string(),
        })
    }

    fn evaluate(
        &self,
        rule: &RecommendationRule,
        usage: &EnergyUsage,
        location: &str,
    ) -> Result<Evaluation, EngineError> {
        let labor = self
            .calculator
            .reference()
            .regions
            .factors(location)
            .labor_cost_multiplier;
        let baseline = self.calculator.energy_costs(usage, location);
        let annual_savings = baseline.total_annual_cost * rule.cost_savings_factor;
        let implementation_cost = annual_savings * rule.implementation_cost_factor * labor;
        ensure_finite(rule.id, "implementation cost", implementation_cost)?;

        let metrics = self.calculator.roi(
            usage,
            location,
            &Intervention {
                cost_savings_factor: rule.cost_savings_factor,
                co2_reduction_factor: rule.co2_reduction_factor,
                implementation_cost,
                maintenance_savings: 0.0,
            },
        )?;
        ensure_finite(rule.id, "annual savings", metrics.annual_savings)?;
        ensure_finite(rule.id, "co2 reduction", metrics.co2_reduction_tons)?;
        if let Some(months) = metrics.payback.months() {
            ensure_finite(rule.id, "payback", months)?;
        }

        let priority_score = self.scorer.score(
            rule.base_priority,
            &ScoreInputs {
                payback: metrics.payback,
                annual_savings: metrics.annual_savings,
                co2_reduction_tons: metrics.co2_reduction_tons,
                difficulty: rule.difficulty,
                monthly_kwh: usage.monthly_kwh(),
            },
        );

        Ok(Evaluation {
            result: RecommendationResult::from_rule(rule, &metrics, priority_score),
            metrics,
            implementation_cost,
        })
    }
}

fn ensure_finite(rule_id: &str, metric: &'static str, value: f64) -> Result<(), EngineError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EngineError::NonFiniteMetric {
            rule_id: rule_id.to_string(),
            metric,
        })
    }
}
