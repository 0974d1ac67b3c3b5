use super::round_to;
use crate::profile::EnergyUsage;
use crate::reference::RegionalFactors;
use serde::{Deserialize, Serialize};

const LBS_PER_TON: f64 = 2000.0;

/// Emissions attributable to a monthly usage profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarbonFootprint {
    pub annual_co2_tons: f64,
    pub monthly_co2_tons: f64,
    /// Monthly lbs from electricity.
    pub electricity_co2_lbs: f64,
    /// Monthly lbs from natural gas.
    pub gas_co2_lbs: f64,
    pub annual_co2_lbs: f64,
}

pub(crate) fn carbon_footprint(usage: &EnergyUsage, factors: &RegionalFactors) -> CarbonFootprint {
    let electricity_co2_lbs = usage.monthly_kwh() * factors.co2_factor_electric;
    let gas_co2_lbs = usage.monthly_therms() * factors.co2_factor_gas;
    let monthly_lbs = electricity_co2_lbs + gas_co2_lbs;

    CarbonFootprint {
        annual_co2_tons: round_to(monthly_lbs * 12.0 / LBS_PER_TON, 2),
        monthly_co2_tons: round_to(monthly_lbs / LBS_PER_TON, 2),
        electricity_co2_lbs: round_to(electricity_co2_lbs, 2),
        gas_co2_lbs: round_to(gas_co2_lbs, 2),
        annual_co2_lbs: round_to(monthly_lbs * 12.0, 2),
    }
}

/// Utility spend for a usage profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyCosts {
    pub annual_electricity_cost: f64,
    pub annual_gas_cost: f64,
    pub annual_demand_cost: f64,
    pub total_annual_cost: f64,
    pub monthly_electricity_cost: f64,
    pub monthly_gas_cost: f64,
    pub electricity_rate: f64,
    pub gas_rate: f64,
}

/// Custom tariffs on the usage replace the regional ones outright.
pub(crate) fn energy_costs(usage: &EnergyUsage, factors: &RegionalFactors) -> EnergyCosts {
    let electricity_rate = usage.electricity_rate().unwrap_or(factors.electricity_rate);
    let gas_rate = usage.gas_rate().unwrap_or(factors.gas_rate);

    let monthly_electricity_cost = usage.monthly_kwh() * electricity_rate;
    let monthly_gas_cost = usage.monthly_therms() * gas_rate;
    let monthly_demand_cost = usage.monthly_demand_cost().unwrap_or(0.0);
    let total_monthly_cost = monthly_electricity_cost + monthly_gas_cost + monthly_demand_cost;

    EnergyCosts {
        annual_electricity_cost: round_to(monthly_electricity_cost * 12.0, 2),
        annual_gas_cost: round_to(monthly_gas_cost * 12.0, 2),
        annual_demand_cost: round_to(monthly_demand_cost * 12.0, 2),
        total_annual_cost: round_to(total_monthly_cost * 12.0, 2),
        monthly_electricity_cost: round_to(monthly_electricity_cost, 2),
        monthly_gas_cost: round_to(monthly_gas_cost, 2),
        electricity_rate,
        gas_rate,
    }
}

/// EPA-style equivalents for a quantity of avoided CO2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentalEquivalents {
    pub trees_planted: u64,
    pub cars_off_road: u64,
    pub homes_powered: u64,
    pub gallons_gasoline_saved: u64,
}

pub fn environmental_equivalents(co2_tons: f64) -> EnvironmentalEquivalents {
    let scaled = |per_ton: f64| -> u64 {
        let value = (co2_tons * per_ton).round();
        if value.is_finite() && value > 0.0 {
            value as u64
        } else {
            0
        }
    };

    EnvironmentalEquivalents {
        trees_planted: scaled(16.5),
        cars_off_road: scaled(0.22),
        homes_powered: scaled(0.18),
        gallons_gasoline_saved: scaled(113.0),
    }
}
