use crate::calculator::Payback;
use crate::catalog::Difficulty;

pub const MIN_PRIORITY: f64 = 0.1;
pub const MAX_PRIORITY: f64 = 1.0;
pub const STANDALONE_BASE_PRIORITY: f64 = 0.5;

/// Inputs for one priority computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInputs {
    pub payback: Payback,
    pub annual_savings: f64,
    pub co2_reduction_tons: f64,
    pub difficulty: Difficulty,
    pub monthly_kwh: f64,
}

/// Additive heuristic over payback speed, savings, avoided emissions, effort and site scale.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScorer;

impl PriorityScorer {
    /// Score starting from a rule's base priority, always within `[0.1, 1.0]`.
    pub fn score(&self, base_priority: f64, inputs: &ScoreInputs) -> f64 {
        let raw = base_priority
            + payback_adjustment(inputs.payback)
            + savings_adjustment(inputs.annual_savings)
            + co2_adjustment(inputs.co2_reduction_tons)
            + difficulty_adjustment(inputs.difficulty)
            + usage_adjustment(inputs.monthly_kwh);

        let rounded = (raw * 100.0).round() / 100.0;
        if rounded.is_nan() {
            return MIN_PRIORITY;
        }
        rounded.clamp(MIN_PRIORITY, MAX_PRIORITY)
    }

    pub fn score_standalone(&self, inputs: &ScoreInputs) -> f64 {
        self.score(STANDALONE_BASE_PRIORITY, inputs)
    }
}

fn payback_adjustment(payback: Payback) -> f64 {
    match payback {
        Payback::Months(months) if months <= 12.0 => 0.25,
        Payback::Months(months) if months <= 24.0 => 0.15,
        Payback::Months(months) if months <= 36.0 => 0.05,
        Payback::Months(months) if months <= 60.0 => 0.0,
        Payback::Months(_) | Payback::Unbounded => -0.15,
    }
}

fn savings_adjustment(annual_savings: f64) -> f64 {
    match annual_savings {
        s if s > 20_000.0 => 0.20,
        s if s > 10_000.0 => 0.15,
        s if s > 5_000.0 => 0.10,
        s if s > 2_000.0 => 0.05,
        _ => 0.0,
    }
}

fn co2_adjustment(co2_tons: f64) -> f64 {
    match co2_tons {
        t if t > 50.0 => 0.15,
        t if t > 25.0 => 0.10,
        t if t > 10.0 => 0.05,
        _ => 0.0,
    }
}

fn difficulty_adjustment(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::Easy => 0.10,
        Difficulty::Medium => 0.0,
        Difficulty::Hard => -0.10,
    }
}

fn usage_adjustment(monthly_kwh: f64) -> f64 {
    if monthly_kwh > 10_000.0 {
        0.10
    } else {
        0.0
    }
}
