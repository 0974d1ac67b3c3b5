//! Static lookup tables built once at startup and shared read-only across requests.

mod incentives;
mod industry;
mod regional;

pub use incentives::{IncentiveDatabase, IncentiveKind, IncentiveRecord};
pub use industry::{IndustryFactorTable, IndustryFactors};
pub use regional::{RegionalFactorTable, RegionalFactors, DEFAULT_REGION};

#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub regions: RegionalFactorTable,
    pub industries: IndustryFactorTable,
    pub incentives: IncentiveDatabase,
}

impl ReferenceData {
    pub fn standard() -> Self {
        Self {
            regions: RegionalFactorTable::standard(),
            industries: IndustryFactorTable::standard(),
            incentives: IncentiveDatabase::standard(),
        }
    }
}
