use super::payback::{calculate_npv, calculate_roi, Payback};
use super::round_to;
use crate::config::{EngineConfig, MAX_ANALYSIS_YEARS};
use crate::reference::IncentiveRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Financial shape of a single intervention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Intervention {
    /// Share of the baseline annual energy bill removed.
    pub cost_savings_factor: f64,
    /// Share of the annual footprint avoided.
    pub co2_reduction_factor: f64,
    pub implementation_cost: f64,
    #[serde(default)]
    pub maintenance_savings: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiMetrics {
    pub annual_savings: f64,
    pub implementation_cost: f64,
    pub payback: Payback,
    pub net_present_value: f64,
    pub irr_percent: f64,
    pub break_even_years: Option<f64>,
    pub co2_reduction_tons: f64,
}

pub(crate) fn roi_metrics(
    baseline_annual_cost: f64,
    annual_co2_tons: f64,
    intervention: &Intervention,
    config: &EngineConfig,
) -> RoiMetrics {
    let annual_savings =
        baseline_annual_cost * intervention.cost_savings_factor + intervention.maintenance_savings;
    let cost = intervention.implementation_cost;
    let payback = calculate_roi(annual_savings, cost);

    let horizon = config.analysis_years.min(MAX_ANALYSIS_YEARS) as usize;
    let net_present_value = calculate_npv(
        std::iter::repeat(annual_savings).take(horizon),
        config.discount_rate,
        cost,
    );
    let irr = if cost > 0.0 {
        annual_savings / cost - 1.0
    } else {
        0.0
    };

    RoiMetrics {
        annual_savings: round_to(annual_savings, 2),
        implementation_cost: round_to(cost, 2),
        payback: payback.map_months(|months| round_to(months, 1)),
        net_present_value: round_to(net_present_value, 2),
        irr_percent: round_to(irr * 100.0, 2),
        break_even_years: payback.years().map(|years| round_to(years, 1)),
        co2_reduction_tons: round_to(annual_co2_tons * intervention.co2_reduction_factor, 2),
    }
}

/// Incentives available to one intervention at one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncentiveSummary {
    pub region: String,
    pub category: String,
    pub implementation_cost: f64,
    pub applicable: Vec<IncentiveRecord>,
    pub total_incentive_value: f64,
    pub post_incentive_cost: f64,
    pub payback_reduction_pct: f64,
}

pub(crate) fn summarize_incentives<'a>(
    region: &str,
    category: &str,
    implementation_cost: f64,
    bucket: impl IntoIterator<Item = &'a IncentiveRecord>,
    as_of: Option<NaiveDate>,
) -> IncentiveSummary {
    let applicable: Vec<IncentiveRecord> = bucket
        .into_iter()
        .filter(|record| record.is_eligible(category))
        .filter(|record| as_of.map_or(true, |date| record.is_active_on(date)))
        .cloned()
        .collect();

    let total: f64 = applicable
        .iter()
        .map(|record| record.contribution(implementation_cost))
        .sum();

    let payback_reduction_pct = if implementation_cost > 0.0 {
        total / implementation_cost * 100.0
    } else {
        0.0
    };

    IncentiveSummary {
        region: region.to_string(),
        category: category.to_string(),
        implementation_cost: round_to(implementation_cost, 2),
        applicable,
        total_incentive_value: round_to(total, 2),
        post_incentive_cost: round_to(implementation_cost - total, 2),
        payback_reduction_pct: round_to(payback_reduction_pct, 1),
    }
}
