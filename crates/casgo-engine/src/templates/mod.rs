//! Advisory templates and the rules for picking exactly one per profile.

mod performance;

pub use performance::{PerformanceTracker, TemplateMetrics, TemplatePerformance};

use crate::profile::BusinessProfile;
use serde::Serialize;

pub const CORE_TEMPLATE_ID: &str = "sustainability_core_v2";

const ALL_INDUSTRIES: &[&str] = &["*"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub version: &'static str,
    pub industries: &'static [&'static str],
    pub focus: &'static str,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Listing entry returned by [`TemplateCatalog::list_templates`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub version: &'static str,
    pub industries: &'static [&'static str],
}

/// Keyword tier evaluated against lower-cased profile text. First matching entry wins.
struct SelectionTier {
    entries: &'static [(&'static [&'static str], &'static str)],
}

impl SelectionTier {
    fn pick(&self, text: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|keyword| text.contains(keyword)))
            .map(|(_, id)| *id)
    }
}

const GOAL_TIER: SelectionTier = SelectionTier {
    entries: &[
        (&["carbon neutral", "net zero"], "carbon_neutral_v1"),
        (&["cost", "savings", "budget"], "cost_optimization_v1"),
    ],
};

const INDUSTRY_TIER: SelectionTier = SelectionTier {
    entries: &[
        (&["tech", "software"], "technology_focused_v1"),
        (&["manufacturing", "industrial"], "manufacturing_focused_v1"),
        (&["retail", "store"], "retail_focused_v1"),
        (&["health", "medical"], "healthcare_focused_v1"),
    ],
};

const SIZE_TIER: SelectionTier = SelectionTier {
    entries: &[
        (&["1-50", "small"], "small_business_v1"),
        (&["1000+", "enterprise"], "enterprise_v1"),
    ],
};

#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    core: PromptTemplate,
    specialists: Vec<PromptTemplate>,
}

impl TemplateCatalog {
    pub fn standard() -> Self {
        Self {
            core: PromptTemplate {
                id: CORE_TEMPLATE_ID,
                name: "Core Sustainability Consultant v2.0",
                version: "2.0.0",
                industries: ALL_INDUSTRIES,
                focus: "Balanced efficiency, renewable and carbon roadmap with quantified ROI",
                temperature: 0.3,
                max_tokens: 3000,
            },
            specialists: vec![
                PromptTemplate {
                    id: "technology_focused_v1",
                    name: "Technology Industry Specialist",
                    version: "1.0.0",
                    industries: &["Technology", "Software", "IT Services"],
                    focus: "Data center cooling, virtualization, PUE and e-waste",
                    temperature: 0.2,
                    max_tokens: 2500,
                },
                PromptTemplate {
                    id: "manufacturing_focused_v1",
                    name: "Manufacturing Industry Specialist",
                    version: "1.0.0",
                    industries: &["Manufacturing", "Industrial", "Production"],
                    focus: "Motors and drives, compressed air, process heat recovery",
                    temperature: 0.3,
                    max_tokens: 2800,
                },
                PromptTemplate {
                    id: "retail_focused_v1",
                    name: "Retail Industry Specialist",
                    version: "1.0.0",
                    industries: &["Retail", "Store", "Shopping"],
                    focus: "Refrigeration, store lighting, customer-facing sustainability",
                    temperature: 0.3,
                    max_tokens: 2600,
                },
                PromptTemplate {
                    id: "healthcare_focused_v1",
                    name: "Healthcare Industry Specialist",
                    version: "1.0.0",
                    industries: &["Healthcare", "Medical", "Hospital"],
                    focus: "Continuous HVAC loads, medical equipment, patient-safe retrofits",
                    temperature: 0.25,
                    max_tokens: 2700,
                },
                PromptTemplate {
                    id: "small_business_v1",
                    name: "Small Business Specialist",
                    version: "1.0.0",
                    industries: ALL_INDUSTRIES,
                    focus: "Low-cost quick wins and available rebates",
                    temperature: 0.4,
                    max_tokens: 2000,
                },
                PromptTemplate {
                    id: "enterprise_v1",
                    name: "Enterprise Specialist",
                    version: "1.0.0",
                    industries: ALL_INDUSTRIES,
                    focus: "Portfolio energy management, reporting frameworks, procurement",
                    temperature: 0.2,
                    max_tokens: 3500,
                },
                PromptTemplate {
                    id: "carbon_neutral_v1",
                    name: "Carbon Neutral Strategy Specialist",
                    version: "1.0.0",
                    industries: ALL_INDUSTRIES,
                    focus: "Emission inventories, renewable sourcing and offsets toward net zero",
                    temperature: 0.25,
                    max_tokens: 3000,
                },
                PromptTemplate {
                    id: "cost_optimization_v1",
                    name: "Cost Optimization Specialist",
                    version: "1.0.0",
                    industries: ALL_INDUSTRIES,
                    focus: "Fastest payback measures and incentive stacking",
                    temperature: 0.2,
                    max_tokens: 2500,
                },
            ],
        }
    }

    pub fn get(&self, id: &str) -> Option<&PromptTemplate> {
        std::iter::once(&self.core)
            .chain(&self.specialists)
            .find(|template| template.id == id)
    }

    pub fn core(&self) -> &PromptTemplate {
        &self.core
    }

    pub fn list_templates(&self) -> Vec<TemplateSummary> {
        std::iter::once(&self.core)
            .chain(&self.specialists)
            .map(|template| TemplateSummary {
                id: template.id,
                name: template.name,
                version: template.version,
                industries: template.industries,
            })
            .collect()
    }

    /// Goal keywords outrank industry, which outranks size. Nothing matching yields the core
    /// template.
    pub fn select(&self, profile: &BusinessProfile) -> &PromptTemplate {
        let goals = profile.goals.join(" ").to_lowercase();
        let industry = profile.industry.to_lowercase();
        let size = profile.company_size.to_lowercase();

        GOAL_TIER
            .pick(&goals)
            .or_else(|| INDUSTRY_TIER.pick(&industry))
            .or_else(|| SIZE_TIER.pick(&size))
            .and_then(|id| self.get(id))
            .unwrap_or(&self.core)
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(industry: &str, size: &str, goals: &[&str]) -> BusinessProfile {
        BusinessProfile::new(industry, size, "Ohio", 1_000.0, 0.0).with_goals(goals.iter().copied())
    }

    #[test]
    fn goal_tier_beats_industry_tier() {
        let catalog = TemplateCatalog::standard();
        let selected = catalog.select(&profile(
            "Technology",
            "51-200",
            &["Become carbon neutral by 2030"],
        ));
        assert_eq!(selected.id, "carbon_neutral_v1");
    }

    #[test]
    fn carbon_neutral_outranks_cost_goal() {
        let catalog = TemplateCatalog::standard();
        let selected = catalog.select(&profile(
            "Retail",
            "small",
            &["Cut costs", "Reach net zero"],
        ));
        assert_eq!(selected.id, "carbon_neutral_v1");
    }

    #[test]
    fn industry_tier_beats_size_tier() {
        let catalog = TemplateCatalog::standard();
        let selected = catalog.select(&profile("Software", "1-50 employees", &["Use solar"]));
        assert_eq!(selected.id, "technology_focused_v1");
    }

    #[test]
    fn size_tier_applies_without_other_matches() {
        let catalog = TemplateCatalog::standard();
        assert_eq!(
            catalog.select(&profile("Bakery", "Enterprise", &[])).id,
            "enterprise_v1"
        );
        assert_eq!(
            catalog.select(&profile("Bakery", "1-50", &[])).id,
            "small_business_v1"
        );
    }

    #[test]
    fn falls_back_to_core() {
        let catalog = TemplateCatalog::standard();
        let selected = catalog.select(&profile("Bakery", "51-200", &["Plant trees"]));
        assert_eq!(selected.id, CORE_TEMPLATE_ID);
    }

    #[test]
    fn lists_every_template() {
        let catalog = TemplateCatalog::standard();
        let listed = catalog.list_templates();
        assert_eq!(listed.len(), 9);
        assert_eq!(listed[0].id, CORE_TEMPLATE_ID);
        assert!(listed.iter().all(|summary| catalog.get(summary.id).is_some()));
    }
}
