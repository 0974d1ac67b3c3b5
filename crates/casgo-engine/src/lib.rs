//! Rules-based sustainability recommendation engine.
//!
//! A [`BusinessProfile`](profile::BusinessProfile) is normalized into canonical categories,
//! filtered against the static [`RuleCatalog`](catalog::RuleCatalog), financially modeled by the
//! [`SustainabilityCalculator`](calculator::SustainabilityCalculator), scored and ranked by the
//! [`RecommendationEngine`](engine::RecommendationEngine).

pub mod calculator;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod profile;
pub mod reference;
pub mod scoring;
pub mod telemetry;
pub mod templates;
