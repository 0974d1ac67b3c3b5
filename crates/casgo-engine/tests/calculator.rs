use casgo_engine::calculator::{calculate_roi, Payback, SustainabilityCalculator};
use casgo_engine::config::EngineConfig;
use casgo_engine::profile::EnergyUsage;
use casgo_engine::reference::{ReferenceData, DEFAULT_REGION};
use chrono::NaiveDate;
use std::sync::Arc;

fn calculator() -> SustainabilityCalculator {
    SustainabilityCalculator::new(Arc::new(ReferenceData::standard()), EngineConfig::default())
}

fn usage(kwh: f64, therms: f64) -> EnergyUsage {
    EnergyUsage::new(kwh, therms).expect("valid usage")
}

#[test]
fn california_reference_footprint() {
    let footprint = calculator().carbon_footprint(&usage(5_000.0, 200.0), "California");
    assert_eq!(footprint.electricity_co2_lbs, 3255.0);
    assert_eq!(footprint.gas_co2_lbs, 2340.0);
    assert!((footprint.annual_co2_tons - 33.57).abs() < 0.01);
}

#[test]
fn region_resolution_ignores_case_and_surrounding_text() {
    let reference = ReferenceData::standard();
    let upper = reference.regions.factors("CALIFORNIA");
    assert_eq!(upper, reference.regions.factors("california"));
    assert_eq!(upper, reference.regions.factors("Los Angeles, California"));
    assert_eq!(reference.regions.region_for("Reykjavik"), DEFAULT_REGION);
}

#[test]
fn footprint_and_cost_are_monotonic_in_each_fuel() {
    let calculator = calculator();
    for location in ["California", "Texas", "New York", "Florida", "Somewhere"] {
        let mut last = (f64::MIN, f64::MIN);
        for kwh in (0..=40).map(|step| step as f64 * 500.0) {
            let footprint = calculator.carbon_footprint(&usage(kwh, 120.0), location);
            let costs = calculator.energy_costs(&usage(kwh, 120.0), location);
            assert!(footprint.annual_co2_tons >= last.0);
            assert!(costs.total_annual_cost >= last.1);
            last = (footprint.annual_co2_tons, costs.total_annual_cost);
        }

        let mut last = (f64::MIN, f64::MIN);
        for therms in (0..=40).map(|step| step as f64 * 25.0) {
            let footprint = calculator.carbon_footprint(&usage(3_000.0, therms), location);
            let costs = calculator.energy_costs(&usage(3_000.0, therms), location);
            assert!(footprint.annual_co2_tons >= last.0);
            assert!(costs.total_annual_cost >= last.1);
            last = (footprint.annual_co2_tons, costs.total_annual_cost);
        }
    }
}

#[test]
fn zero_savings_has_no_payback() {
    assert_eq!(calculate_roi(0.0, 15_000.0), Payback::Unbounded);
}

#[test]
fn incentive_caps_and_expirations_are_respected() {
    let calculator = calculator();
    let summary = calculator
        .optimize_incentives("lighting", 4_000.0, "Oakland, California")
        .expect("valid cost");
    // 25% efficiency credit, 179D flat 1.88, utility rebate 500
    assert!((summary.total_incentive_value - 1_501.88).abs() < 1e-6);
    assert!((summary.post_incentive_cost - 2_498.12).abs() < 1e-6);

    let later = NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date");
    let current = calculator
        .optimize_incentives_as_of("lighting", 4_000.0, "Oakland, California", later)
        .expect("valid cost");
    assert!(current
        .applicable
        .iter()
        .all(|record| record.expiration.map_or(true, |date| date >= later)));
    assert!((current.total_incentive_value - 501.88).abs() < 1e-6);

    for cost in [0.0, 10.0, 75_000.0, 5_000_000.0] {
        let solar = calculator
            .optimize_incentives("solar", cost, "Boise, Idaho")
            .expect("valid cost");
        assert_eq!(solar.region, DEFAULT_REGION);
        assert!(solar.post_incentive_cost >= 0.0);
    }
}

#[test]
fn equivalents_and_solar_for_zero_usage_are_zero() {
    let calculator = calculator();
    let footprint = calculator.carbon_footprint(&usage(0.0, 0.0), "Texas");
    let equivalents = casgo_engine::calculator::environmental_equivalents(footprint.annual_co2_tons);
    assert_eq!(equivalents.trees_planted, 0);
    assert_eq!(equivalents.homes_powered, 0);

    let solar = calculator
        .solar_potential(&usage(0.0, 0.0), "Texas", 10_000.0, Some(0.0))
        .expect("valid inputs");
    assert_eq!(solar.system_size_kw, 0.0);
    assert_eq!(solar.payback, Payback::Unbounded);
}
