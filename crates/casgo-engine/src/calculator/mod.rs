//! Carbon, cost, return-on-investment, incentive and solar arithmetic.
//!
//! Every figure is derived from an [`EnergyUsage`] and a free-form location resolved against the
//! shared [`ReferenceData`]. Results are rounded for presentation at the point they are produced.

mod financial;
mod footprint;
mod payback;
mod solar;

pub use financial::{IncentiveSummary, Intervention, RoiMetrics};
pub use footprint::{environmental_equivalents, CarbonFootprint, EnergyCosts, EnvironmentalEquivalents};
pub use payback::{calculate_npv, calculate_roi, Payback};
pub use solar::{SolarPotential, DEFAULT_ROOF_FRACTION};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::profile::EnergyUsage;
use crate::reference::ReferenceData;
use chrono::NaiveDate;
use std::sync::Arc;

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[derive(Debug, Clone)]
pub struct SustainabilityCalculator {
    reference: Arc<ReferenceData>,
    config: EngineConfig,
}

impl SustainabilityCalculator {
    pub fn new(reference: Arc<ReferenceData>, config: EngineConfig) -> Self {
        Self { reference, config }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn carbon_footprint(&self, usage: &EnergyUsage, location: &str) -> CarbonFootprint {
        footprint::carbon_footprint(usage, self.reference.regions.factors(location))
    }

    pub fn energy_costs(&self, usage: &EnergyUsage, location: &str) -> EnergyCosts {
        footprint::energy_costs(usage, self.reference.regions.factors(location))
    }

    /// Savings, payback, NPV and IRR of an intervention against the usage's baseline bill.
    pub fn roi(
        &self,
        usage: &EnergyUsage,
        location: &str,
        intervention: &Intervention,
    ) -> Result<RoiMetrics, EngineError> {
        for (field, value) in [
            ("implementationCost", intervention.implementation_cost),
            ("costSavingsFactor", intervention.cost_savings_factor),
            ("co2ReductionFactor", intervention.co2_reduction_factor),
            ("maintenanceSavings", intervention.maintenance_savings),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::InvalidUsage { field, value });
            }
        }

        let costs = self.energy_costs(usage, location);
        let footprint = self.carbon_footprint(usage, location);
        Ok(financial::roi_metrics(
            costs.total_annual_cost,
            footprint.annual_co2_tons,
            intervention,
            &self.config,
        ))
    }

    pub fn optimize_incentives(
        &self,
        category: &str,
        implementation_cost: f64,
        location: &str,
    ) -> Result<IncentiveSummary, EngineError> {
        self.incentives(category, implementation_cost, location, None)
    }

    /// Like [`Self::optimize_incentives`], skipping programs that expired before `as_of`.
    pub fn optimize_incentives_as_of(
        &self,
        category: &str,
        implementation_cost: f64,
        location: &str,
        as_of: NaiveDate,
    ) -> Result<IncentiveSummary, EngineError> {
        self.incentives(category, implementation_cost, location, Some(as_of))
    }

    fn incentives(
        &self,
        category: &str,
        implementation_cost: f64,
        location: &str,
        as_of: Option<NaiveDate>,
    ) -> Result<IncentiveSummary, EngineError> {
        if !implementation_cost.is_finite() || implementation_cost < 0.0 {
            return Err(EngineError::InvalidUsage {
                field: "implementationCost",
                value: implementation_cost,
            });
        }
        let database = &self.reference.incentives;
        Ok(financial::summarize_incentives(
            database.region_for(location),
            category,
            implementation_cost,
            database.for_location(location),
            as_of,
        ))
    }

    /// Rooftop solar sizing. `roof_fraction` defaults to [`DEFAULT_ROOF_FRACTION`].
    pub fn solar_potential(
        &self,
        usage: &EnergyUsage,
        location: &str,
        facility_sqft: f64,
        roof_fraction: Option<f64>,
    ) -> Result<SolarPotential, EngineError> {
        let factors = self.reference.regions.factors(location);
        let electricity_rate = usage.electricity_rate().unwrap_or(factors.electricity_rate);
        solar::solar_potential(
            facility_sqft,
            roof_fraction.unwrap_or(DEFAULT_ROOF_FRACTION),
            electricity_rate,
            factors,
        )
    }
}
