mod domain;
mod normalizer;

pub use domain::{BusinessProfile, EnergyUsage};
pub use normalizer::{
    categorize_goals, categorize_industry, categorize_size, normalize, CanonicalGoal,
    CanonicalIndustry, CanonicalSize, NormalizedProfile,
};
