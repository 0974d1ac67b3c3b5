use super::payback::{calculate_roi, Payback};
use super::round_to;
use crate::error::EngineError;
use crate::reference::RegionalFactors;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROOF_FRACTION: f64 = 0.6;

const WATTS_PER_SQFT: f64 = 7.0;
const INSTALLED_COST_PER_KW: f64 = 2_500.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarPotential {
    pub facility_sqft: f64,
    pub roof_fraction: f64,
    pub system_size_kw: f64,
    pub annual_generation_kwh: f64,
    pub annual_savings: f64,
    pub estimated_cost: f64,
    pub payback: Payback,
    pub payback_years: Option<f64>,
    pub co2_offset_tons: f64,
}

pub(crate) fn solar_potential(
    facility_sqft: f64,
    roof_fraction: f64,
    electricity_rate: f64,
    factors: &RegionalFactors,
) -> Result<SolarPotential, EngineError> {
    if !facility_sqft.is_finite() || facility_sqft < 0.0 {
        return Err(EngineError::InvalidUsage {
            field: "facilitySqft",
            value: facility_sqft,
        });
    }
    if !roof_fraction.is_finite() || !(0.0..=1.0).contains(&roof_fraction) {
        return Err(EngineError::InvalidUsage {
            field: "roofFraction",
            value: roof_fraction,
        });
    }

    let system_size_kw = facility_sqft * roof_fraction * WATTS_PER_SQFT / 1_000.0;
    let annual_generation_kwh = system_size_kw * factors.solar_potential;
    let annual_savings = annual_generation_kwh * electricity_rate;
    let estimated_cost = system_size_kw * INSTALLED_COST_PER_KW;
    let payback = calculate_roi(annual_savings, estimated_cost);

    Ok(SolarPotential {
        facility_sqft: round_to(facility_sqft, 0),
        roof_fraction,
        system_size_kw: round_to(system_size_kw, 1),
        annual_generation_kwh: round_to(annual_generation_kwh, 0),
        annual_savings: round_to(annual_savings, 2),
        estimated_cost: round_to(estimated_cost, 2),
        payback: payback.map_months(|months| round_to(months, 1)),
        payback_years: payback.years().map(|years| round_to(years, 1)),
        co2_offset_tons: round_to(
            annual_generation_kwh * factors.co2_factor_electric / 2_000.0,
            2,
        ),
    })
}
