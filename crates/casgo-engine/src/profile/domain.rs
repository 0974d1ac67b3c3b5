use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Business description supplied by the caller for a single advisory request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    #[serde(default)]
    pub business_name: Option<String>,
    pub industry: String,
    pub company_size: String,
    pub location: String,
    pub monthly_kwh: f64,
    pub monthly_therms: f64,
    #[serde(default)]
    pub goals: Vec<String>,
    /// Conditioned floor area in square feet, when known.
    #[serde(default)]
    pub facility_sqft: Option<f64>,
    #[serde(default)]
    pub electricity_rate: Option<f64>,
    #[serde(default)]
    pub gas_rate: Option<f64>,
    #[serde(default)]
    pub demand_charge: Option<f64>,
    #[serde(default)]
    pub peak_demand_kw: Option<f64>,
}

impl BusinessProfile {
    pub fn new(
        industry: impl Into<String>,
        company_size: impl Into<String>,
        location: impl Into<String>,
        monthly_kwh: f64,
        monthly_therms: f64,
    ) -> Self {
        Self {
            business_name: None,
            industry: industry.into(),
            company_size: company_size.into(),
            location: location.into(),
            monthly_kwh,
            monthly_therms,
            goals: Vec::new(),
            facility_sqft: None,
            electricity_rate: None,
            gas_rate: None,
            demand_charge: None,
            peak_demand_kw: None,
        }
    }

    pub fn with_goals<I, S>(mut self, goals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.goals = goals.into_iter().map(Into::into).collect();
        self
    }

    /// Validated usage and rate view of the profile.
    pub fn energy_usage(&self) -> Result<EnergyUsage, EngineError> {
        let mut usage = EnergyUsage::new(self.monthly_kwh, self.monthly_therms)?;
        usage.electricity_rate = optional_rate("electricityRate", self.electricity_rate)?;
        usage.gas_rate = optional_rate("gasRate", self.gas_rate)?;
        usage.demand_charge = optional_rate("demandCharge", self.demand_charge)?;
        usage.peak_demand_kw = optional_rate("peakDemandKw", self.peak_demand_kw)?;
        Ok(usage)
    }

    pub fn facility_sqft(&self) -> Result<Option<f64>, EngineError> {
        optional_rate("facilitySqft", self.facility_sqft)
    }
}

/// Monthly consumption with optional per-request tariffs.
///
/// Construction rejects negative or non-finite quantities, so every calculator built on top of
/// it can stay infallible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyUsage {
    monthly_kwh: f64,
    monthly_therms: f64,
    /// $/kWh overriding the regional rate.
    electricity_rate: Option<f64>,
    /// $/therm overriding the regional rate.
    gas_rate: Option<f64>,
    /// $/kW of monthly peak demand.
    demand_charge: Option<f64>,
    peak_demand_kw: Option<f64>,
}

impl EnergyUsage {
    pub fn new(monthly_kwh: f64, monthly_therms: f64) -> Result<Self, EngineError> {
        Ok(Self {
            monthly_kwh: usage_value("monthlyKwh", monthly_kwh)?,
            monthly_therms: usage_value("monthlyTherms", monthly_therms)?,
            electricity_rate: None,
            gas_rate: None,
            demand_charge: None,
            peak_demand_kw: None,
        })
    }

    pub fn with_rates(
        mut self,
        electricity_rate: Option<f64>,
        gas_rate: Option<f64>,
    ) -> Result<Self, EngineError> {
        self.electricity_rate = optional_rate("electricityRate", electricity_rate)?;
        self.gas_rate = optional_rate("gasRate", gas_rate)?;
        Ok(self)
    }

    pub fn with_demand(mut self, demand_charge: f64, peak_demand_kw: f64) -> Result<Self, EngineError> {
        self.demand_charge = optional_rate("demandCharge", Some(demand_charge))?;
        self.peak_demand_kw = optional_rate("peakDemandKw", Some(peak_demand_kw))?;
        Ok(self)
    }

    pub fn monthly_kwh(&self) -> f64 {
        self.monthly_kwh
    }

    pub fn monthly_therms(&self) -> f64 {
        self.monthly_therms
    }

    pub fn electricity_rate(&self) -> Option<f64> {
        self.electricity_rate
    }

    pub fn gas_rate(&self) -> Option<f64> {
        self.gas_rate
    }

    /// Monthly demand cost, present only when both the charge and the peak are known.
    pub fn monthly_demand_cost(&self) -> Option<f64> {
        match (self.demand_charge, self.peak_demand_kw) {
            (Some(charge), Some(peak)) => Some(charge * peak),
            _ => None,
        }
    }
}

fn usage_value(field: &'static str, value: f64) -> Result<f64, EngineError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(EngineError::InvalidUsage { field, value })
    }
}

fn optional_rate(field: &'static str, value: Option<f64>) -> Result<Option<f64>, EngineError> {
    match value {
        Some(rate) if !rate.is_finite() || rate < 0.0 => {
            Err(EngineError::InvalidRate { field, value: rate })
        }
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_usage() {
        match EnergyUsage::new(-1.0, 0.0) {
            Err(EngineError::InvalidUsage { field, value }) => {
                assert_eq!(field, "monthlyKwh");
                assert_eq!(value, -1.0);
            }
            other => panic!("expected invalid usage, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_finite_therms() {
        assert!(matches!(
            EnergyUsage::new(100.0, f64::NAN),
            Err(EngineError::InvalidUsage {
                field: "monthlyTherms",
                ..
            })
        ));
    }

    #[test]
    fn zero_usage_is_valid() {
        let usage = EnergyUsage::new(0.0, 0.0).expect("zero usage accepted");
        assert_eq!(usage.monthly_kwh(), 0.0);
        assert_eq!(usage.monthly_therms(), 0.0);
    }

    #[test]
    fn profile_rates_flow_into_usage() {
        let mut profile = BusinessProfile::new("Retail", "small", "Texas", 1200.0, 40.0);
        profile.electricity_rate = Some(0.15);
        profile.demand_charge = Some(12.0);
        profile.peak_demand_kw = Some(30.0);

        let usage = profile.energy_usage().expect("valid profile");
        assert_eq!(usage.electricity_rate(), Some(0.15));
        assert_eq!(usage.gas_rate(), None);
        assert_eq!(usage.monthly_demand_cost(), Some(360.0));
    }

    #[test]
    fn negative_custom_rate_is_rejected() {
        let mut profile = BusinessProfile::new("Retail", "small", "Texas", 1200.0, 40.0);
        profile.gas_rate = Some(-0.5);
        assert!(matches!(
            profile.energy_usage(),
            Err(EngineError::InvalidRate { field: "gasRate", .. })
        ));
    }

    #[test]
    fn deserializes_camel_case_profile() {
        let raw = r#"{
            "industry": "Manufacturing",
            "companySize": "201-1000 employees",
            "location": "Austin, Texas",
            "monthlyKwh": 15000,
            "monthlyTherms": 450,
            "goals": ["Reduce energy costs by 30%"]
        }"#;
        let profile: BusinessProfile = serde_json::from_str(raw).expect("profile parses");
        assert_eq!(profile.company_size, "201-1000 employees");
        assert_eq!(profile.monthly_kwh, 15000.0);
        assert_eq!(profile.goals.len(), 1);
        assert!(profile.facility_sqft.is_none());
    }
}
