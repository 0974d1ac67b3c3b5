use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Time for savings to repay an investment.
///
/// Savings of zero or less never repay, which is carried as `Unbounded` rather than an
/// infinite or oversized float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payback {
    Months(f64),
    Unbounded,
}

impl Payback {
    pub fn months(self) -> Option<f64> {
        match self {
            Payback::Months(months) => Some(months),
            Payback::Unbounded => None,
        }
    }

    pub fn years(self) -> Option<f64> {
        self.months().map(|months| months / 12.0)
    }

    pub fn is_unbounded(self) -> bool {
        matches!(self, Payback::Unbounded)
    }

    /// True when the payback is finite and at most `limit` months.
    pub fn within(self, limit: f64) -> bool {
        self.months().map_or(false, |months| months <= limit)
    }

    pub fn map_months(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Payback::Months(months) => Payback::Months(f(months)),
            Payback::Unbounded => Payback::Unbounded,
        }
    }
}

impl PartialOrd for Payback {
    /// Faster paybacks order first; `Unbounded` sorts after every finite value.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Payback::Months(left), Payback::Months(right)) => left.partial_cmp(right),
            (Payback::Months(_), Payback::Unbounded) => Some(Ordering::Less),
            (Payback::Unbounded, Payback::Months(_)) => Some(Ordering::Greater),
            (Payback::Unbounded, Payback::Unbounded) => Some(Ordering::Equal),
        }
    }
}

impl fmt::Display for Payback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payback::Months(months) => write!(f, "{months:.1} months"),
            Payback::Unbounded => write!(f, "never"),
        }
    }
}

/// Payback in months for a yearly saving and an upfront cost.
pub fn calculate_roi(annual_savings: f64, implementation_cost: f64) -> Payback {
    if annual_savings <= 0.0 {
        return Payback::Unbounded;
    }
    Payback::Months(implementation_cost / (annual_savings / 12.0))
}

/// Net present value of year-end cash flows starting one year out.
pub fn calculate_npv(
    cash_flows: impl IntoIterator<Item = f64>,
    discount_rate: f64,
    initial_investment: f64,
) -> f64 {
    cash_flows
        .into_iter()
        .enumerate()
        .fold(-initial_investment, |npv, (index, cash_flow)| {
            npv + cash_flow / (1.0 + discount_rate).powi(index as i32 + 1)
        })
}
