use super::{RecommendationEngine, RecommendationResult};
use crate::calculator::{round_to, Payback};
use crate::catalog::Difficulty;
use crate::error::EngineError;
use crate::profile::BusinessProfile;
use crate::templates::{PerformanceTracker, TemplateMetrics, TemplatePerformance};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

const FALLBACK_ELECTRICITY_RATE: f64 = 0.12;
const FALLBACK_CO2_LBS_PER_KWH: f64 = 0.92;
const LED_THRESHOLD_KWH: f64 = 800.0;
/// Usage above this is treated as this much so every estimate stays a finite number.
pub const FALLBACK_KWH_CEILING: f64 = 1.0e12;

/// Deterministic recommendations that depend only on monthly electricity use.
pub fn fallback_recommendations(monthly_kwh: f64) -> Vec<RecommendationResult> {
    let kwh = if monthly_kwh.is_finite() {
        monthly_kwh.clamp(0.0, FALLBACK_KWH_CEILING)
    } else {
        0.0
    };
    let savings = |share: f64| round_to(kwh * share * FALLBACK_ELECTRICITY_RATE * 12.0, 2);
    let co2_tons = |share: f64| round_to(kwh * share * FALLBACK_CO2_LBS_PER_KWH * 12.0 / 2_000.0, 2);

    let mut results = vec![RecommendationResult {
        id: "energy-audit-fallback".to_string(),
        title: "Professional Energy Audit".to_string(),
        description: "Comprehensive assessment to identify energy savings opportunities"
            .to_string(),
        category: "Assessment".to_string(),
        estimated_cost_savings: savings(0.10),
        estimated_co2_reduction: co2_tons(0.10),
        roi_months: Payback::Months(6.0),
        difficulty: Difficulty::Easy,
        priority_score: 0.9,
    }];

    if kwh > LED_THRESHOLD_KWH {
        results.push(RecommendationResult {
            id: "led-retrofit-fallback".to_string(),
            title: "LED Lighting Retrofit".to_string(),
            description: "Replace traditional lighting with energy-efficient LED bulbs".to_string(),
            category: "Energy Efficiency".to_string(),
            estimated_cost_savings: savings(0.25),
            estimated_co2_reduction: co2_tons(0.25),
            roi_months: Payback::Months(18.0),
            difficulty: Difficulty::Easy,
            priority_score: 0.8,
        });
    }

    results
}

/// Recommendations plus the advisory template chosen for the profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Advice {
    pub template_id: String,
    pub recommendations: Vec<RecommendationResult>,
    /// Set when the ranked engine failed and the fixed fallback list was returned.
    pub degraded: bool,
}

/// Front door for callers: ranks through the engine, degrades to the fallback list on internal
/// failures, and collects template feedback.
#[derive(Debug, Clone)]
pub struct AdvisorService {
    engine: Arc<RecommendationEngine>,
    performance: Arc<PerformanceTracker>,
}

impl AdvisorService {
    pub fn new(engine: Arc<RecommendationEngine>) -> Self {
        Self {
            engine,
            performance: Arc::new(PerformanceTracker::new()),
        }
    }

    pub fn engine(&self) -> &RecommendationEngine {
        &self.engine
    }

    /// Invalid input is returned as an error. Any other engine failure yields the fallback list.
    pub fn advise(&self, profile: &BusinessProfile) -> Result<Advice, EngineError> {
        let template_id = self.engine.select_template(profile).id.to_string();

        match self.engine.generate(profile) {
            Ok(recommendations) => Ok(Advice {
                template_id,
                recommendations,
                degraded: false,
            }),
            Err(error) if error.is_invalid_input() => Err(error),
            Err(error) => {
                warn!(%error, "recommendation engine failed, using fallback recommendations");
                Ok(Advice {
                    template_id,
                    recommendations: fallback_recommendations(profile.monthly_kwh),
                    degraded: true,
                })
            }
        }
    }

    pub fn record_feedback(&self, template_id: &str, metrics: TemplateMetrics) {
        info!(template = template_id, "recorded template feedback");
        self.performance.record(template_id, metrics);
    }

    pub fn template_performance(&self, template_id: &str) -> TemplatePerformance {
        self.performance.performance(template_id)
    }
}
