use serde::{Deserialize, Serialize};

pub const DEFAULT_REGION: &str = "default";

/// Per-region economic and emission constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionalFactors {
    /// $/kWh
    pub electricity_rate: f64,
    /// $/therm
    pub gas_rate: f64,
    /// lbs CO2 per kWh
    pub co2_factor_electric: f64,
    /// lbs CO2 per therm
    pub co2_factor_gas: f64,
    /// kWh generated per installed kW per year
    pub solar_potential: f64,
    pub heating_degree_days: f64,
    pub cooling_degree_days: f64,
    pub utility_rebate_multiplier: f64,
    pub labor_cost_multiplier: f64,
}

/// Region keyed lookup with a mandatory `default` entry.
#[derive(Debug, Clone)]
pub struct RegionalFactorTable {
    regions: Vec<(&'static str, RegionalFactors)>,
    fallback: RegionalFactors,
}

impl RegionalFactorTable {
    pub fn standard() -> Self {
        Self {
            regions: vec![
                (
                    "california",
                    RegionalFactors {
                        electricity_rate: 0.2245,
                        gas_rate: 1.35,
                        co2_factor_electric: 0.651,
                        co2_factor_gas: 11.7,
                        solar_potential: 1850.0,
                        heating_degree_days: 1500.0,
                        cooling_degree_days: 1200.0,
                        utility_rebate_multiplier: 1.4,
                        labor_cost_multiplier: 1.3,
                    },
                ),
                (
                    "texas",
                    RegionalFactors {
                        electricity_rate: 0.1189,
                        gas_rate: 1.12,
                        co2_factor_electric: 0.995,
                        co2_factor_gas: 11.7,
                        solar_potential: 1650.0,
                        heating_degree_days: 1600.0,
                        cooling_degree_days: 2800.0,
                        utility_rebate_multiplier: 0.8,
                        labor_cost_multiplier: 0.9,
                    },
                ),
                (
                    "new york",
                    RegionalFactors {
                        electricity_rate: 0.1825,
                        gas_rate: 1.48,
                        co2_factor_electric: 0.578,
                        co2_factor_gas: 11.7,
                        solar_potential: 1300.0,
                        heating_degree_days: 4800.0,
                        cooling_degree_days: 900.0,
                        utility_rebate_multiplier: 1.2,
                        labor_cost_multiplier: 1.4,
                    },
                ),
                (
                    "florida",
                    RegionalFactors {
                        electricity_rate: 0.1147,
                        gas_rate: 1.25,
                        co2_factor_electric: 0.892,
                        co2_factor_gas: 11.7,
                        solar_potential: 1800.0,
                        heating_degree_days: 600.0,
                        cooling_degree_days: 3500.0,
                        utility_rebate_multiplier: 0.9,
                        labor_cost_multiplier: 0.95,
                    },
                ),
            ],
            // US averages
            fallback: RegionalFactors {
                electricity_rate: 0.1378,
                gas_rate: 1.28,
                co2_factor_electric: 0.855,
                co2_factor_gas: 11.7,
                solar_potential: 1500.0,
                heating_degree_days: 3000.0,
                cooling_degree_days: 1500.0,
                utility_rebate_multiplier: 1.0,
                labor_cost_multiplier: 1.0,
            },
        }
    }

    fn entry(&self, location: &str) -> Option<&(&'static str, RegionalFactors)> {
        let lowered = location.to_lowercase();
        self.regions
            .iter()
            .find(|(region, _)| lowered.contains(region))
    }

    /// Case-insensitive substring match of the location against region names.
    pub fn region_for(&self, location: &str) -> &'static str {
        self.entry(location)
            .map(|(region, _)| *region)
            .unwrap_or(DEFAULT_REGION)
    }

    pub fn factors(&self, location: &str) -> &RegionalFactors {
        self.entry(location)
            .map(|(_, factors)| factors)
            .unwrap_or(&self.fallback)
    }
}

impl Default for RegionalFactorTable {
    fn default() -> Self {
        Self::standard()
    }
}
