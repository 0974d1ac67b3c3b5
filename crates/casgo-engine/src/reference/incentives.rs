use super::regional::DEFAULT_REGION;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncentiveKind {
    TaxCredit,
    Rebate,
    Grant,
    Loan,
    Deduction,
}

/// A financial program that lowers the effective cost of an intervention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncentiveRecord {
    pub kind: IncentiveKind,
    pub name: String,
    pub value: f64,
    pub max_value: Option<f64>,
    /// Share of the implementation cost covered, in percent.
    pub percentage: Option<f64>,
    pub description: String,
    pub eligibility: Vec<String>,
    pub expiration: Option<NaiveDate>,
    pub application_process: String,
}

impl IncentiveRecord {
    /// Bidirectional substring containment between the category and any eligibility tag.
    pub fn is_eligible(&self, category: &str) -> bool {
        let category = category.to_lowercase();
        self.eligibility
            .iter()
            .any(|tag| category.contains(tag.as_str()) || tag.contains(category.as_str()))
    }

    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.expiration.map_or(true, |expires| expires >= date)
    }

    /// Dollar contribution toward an implementation cost.
    pub fn contribution(&self, implementation_cost: f64) -> f64 {
        match self.percentage {
            Some(percentage) => {
                let share = implementation_cost * percentage / 100.0;
                match self.max_value {
                    Some(cap) => share.min(cap),
                    None => share,
                }
            }
            None => self.value,
        }
    }
}

/// Incentive programs grouped by region, with a nationwide `default` bucket.
#[derive(Debug, Clone)]
pub struct IncentiveDatabase {
    buckets: Vec<(&'static str, Vec<IncentiveRecord>)>,
    nationwide: Vec<IncentiveRecord>,
}

impl IncentiveDatabase {
    pub fn standard() -> Self {
        let federal = federal_incentives();

        let mut california = federal.clone();
        california.extend([
            incentive(
                IncentiveKind::Rebate,
                "Self-Generation Incentive Program (SGIP)",
                150.0,
                "Rebate for energy storage and fuel cell systems",
                &["battery_storage", "fuel_cells"],
                "Apply through approved installers",
            ),
            incentive(
                IncentiveKind::Rebate,
                "Energy Efficiency Rebates",
                500.0,
                "Utility rebates for lighting, HVAC, and motor upgrades",
                &["led_lighting", "hvac", "motors"],
                "Utility pre-approval required",
            ),
        ]);

        let mut texas = federal.clone();
        texas.push(incentive(
            IncentiveKind::Loan,
            "Texas LoanSTAR Revolving Loan Program",
            0.0,
            "Below-market rate loans for energy efficiency projects",
            &["energy_efficiency", "renewable_energy"],
            "Apply through State Energy Conservation Office",
        ));

        Self {
            buckets: vec![("california", california), ("texas", texas)],
            nationwide: federal,
        }
    }

    /// Region key whose bucket applies to the location, `default` when none matches.
    pub fn region_for(&self, location: &str) -> &'static str {
        let lowered = location.to_lowercase();
        self.buckets
            .iter()
            .find(|(region, _)| lowered.contains(region))
            .map(|(region, _)| *region)
            .unwrap_or(DEFAULT_REGION)
    }

    pub fn for_location(&self, location: &str) -> &[IncentiveRecord] {
        let lowered = location.to_lowercase();
        self.buckets
            .iter()
            .find(|(region, _)| lowered.contains(region))
            .map(|(_, records)| records.as_slice())
            .unwrap_or(&self.nationwide)
    }

    pub fn nationwide(&self) -> &[IncentiveRecord] {
        &self.nationwide
    }
}

impl Default for IncentiveDatabase {
    fn default() -> Self {
        Self::standard()
    }
}

fn incentive(
    kind: IncentiveKind,
    name: &str,
    value: f64,
    description: &str,
    eligibility: &[&str],
    application_process: &str,
) -> IncentiveRecord {
    IncentiveRecord {
        kind,
        name: name.to_string(),
        value,
        max_value: None,
        percentage: None,
        description: description.to_string(),
        eligibility: eligibility.iter().map(|tag| tag.to_string()).collect(),
        expiration: None,
        application_process: application_process.to_string(),
    }
}

fn federal_incentives() -> Vec<IncentiveRecord> {
    vec![
        IncentiveRecord {
            percentage: Some(30.0),
            expiration: NaiveDate::from_ymd_opt(2032, 12, 31),
            ..incentive(
                IncentiveKind::TaxCredit,
                "Commercial Solar Investment Tax Credit",
                30.0,
                "30% federal tax credit for commercial solar installations",
                &["solar", "renewable_energy"],
                "File IRS Form 3468 with tax return",
            )
        },
        IncentiveRecord {
            max_value: Some(1_000_000.0),
            ..incentive(
                IncentiveKind::Deduction,
                "Section 179D Energy Efficient Commercial Building Deduction",
                1.88,
                "Tax deduction for energy-efficient building improvements",
                &["hvac", "lighting", "building_envelope"],
                "IRS Form 3468 with energy certification",
            )
        },
        IncentiveRecord {
            percentage: Some(25.0),
            expiration: NaiveDate::from_ymd_opt(2024, 12, 31),
            ..incentive(
                IncentiveKind::TaxCredit,
                "Commercial Energy Efficiency Tax Credit",
                25.0,
                "25% credit for qualifying energy efficiency improvements",
                &["hvac", "lighting", "building_systems"],
                "IRS Form 3468",
            )
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_region_uses_nationwide_bucket() {
        let database = IncentiveDatabase::standard();
        assert_eq!(database.for_location("Ohio").len(), 3);
        assert_eq!(database.region_for("Ohio"), DEFAULT_REGION);
    }

    #[test]
    fn state_buckets_extend_federal_programs() {
        let database = IncentiveDatabase::standard();
        let california = database.for_location("San Diego, California");
        assert_eq!(california.len(), 5);
        assert!(california
            .iter()
            .any(|record| record.name.contains("SGIP")));
        assert_eq!(database.for_location("TEXAS").len(), 4);
    }

    #[test]
    fn eligibility_matches_in_both_directions() {
        let database = IncentiveDatabase::standard();
        let solar_credit = &database.nationwide()[0];
        assert!(solar_credit.is_eligible("Solar"));
        assert!(solar_credit.is_eligible("rooftop solar array"));
        assert!(solar_credit.is_eligible("renewable"));
        assert!(!solar_credit.is_eligible("water"));
    }

    #[test]
    fn percentage_contribution_respects_cap() {
        let capped = IncentiveRecord {
            percentage: Some(50.0),
            max_value: Some(1_000.0),
            ..incentive(IncentiveKind::Grant, "Pilot grant", 0.0, "", &["pilot"], "")
        };
        assert_eq!(capped.contribution(10_000.0), 1_000.0);
        assert_eq!(capped.contribution(1_000.0), 500.0);
    }

    #[test]
    fn expiration_is_inclusive() {
        let database = IncentiveDatabase::standard();
        let efficiency_credit = &database.nationwide()[2];
        let last_day = NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid date");
        assert!(efficiency_credit.is_active_on(last_day));
        assert!(!efficiency_credit.is_active_on(last_day.succ_opt().expect("valid date")));
    }
}
