use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// One observed use of a template.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemplateMetrics {
    pub response_quality: f64,
    pub implementation_feasibility: f64,
    pub roi_accuracy: f64,
    pub user_satisfaction: f64,
    /// Seconds.
    pub execution_time: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemplatePerformance {
    pub avg_quality: f64,
    pub avg_satisfaction: f64,
    pub usage_count: usize,
}

/// Append-only per-template observation log, safe to share across threads.
#[derive(Debug, Default)]
pub struct PerformanceTracker {
    observations: RwLock<HashMap<String, Vec<TemplateMetrics>>>,
}

impl PerformanceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, template_id: &str, metrics: TemplateMetrics) {
        let mut observations = self
            .observations
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        observations
            .entry(template_id.to_string())
            .or_default()
            .push(metrics);
    }

    pub fn performance(&self, template_id: &str) -> TemplatePerformance {
        let observations = self
            .observations
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        let Some(records) = observations.get(template_id).filter(|records| !records.is_empty())
        else {
            return TemplatePerformance {
                avg_quality: 0.0,
                avg_satisfaction: 0.0,
                usage_count: 0,
            };
        };

        let count = records.len() as f64;
        let quality: f64 = records.iter().map(|m| m.response_quality).sum();
        let satisfaction: f64 = records.iter().map(|m| m.user_satisfaction).sum();

        TemplatePerformance {
            avg_quality: (quality / count * 100.0).round() / 100.0,
            avg_satisfaction: (satisfaction / count * 100.0).round() / 100.0,
            usage_count: records.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn metrics(quality: f64, satisfaction: f64) -> TemplateMetrics {
        TemplateMetrics {
            response_quality: quality,
            implementation_feasibility: 0.8,
            roi_accuracy: 0.7,
            user_satisfaction: satisfaction,
            execution_time: 1.2,
        }
    }

    #[test]
    fn unobserved_template_reports_zeros() {
        let tracker = PerformanceTracker::new();
        let performance = tracker.performance("enterprise_v1");
        assert_eq!(performance.usage_count, 0);
        assert_eq!(performance.avg_quality, 0.0);
    }

    #[test]
    fn averages_are_rounded() {
        let tracker = PerformanceTracker::new();
        tracker.record("retail_focused_v1", metrics(0.9, 4.0));
        tracker.record("retail_focused_v1", metrics(0.8, 5.0));
        tracker.record("retail_focused_v1", metrics(0.8, 4.0));

        let performance = tracker.performance("retail_focused_v1");
        assert_eq!(performance.usage_count, 3);
        assert_eq!(performance.avg_quality, 0.83);
        assert_eq!(performance.avg_satisfaction, 4.33);
    }

    #[test]
    fn concurrent_records_are_all_kept() {
        let tracker = Arc::new(PerformanceTracker::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let tracker = Arc::clone(&tracker);
                thread::spawn(move || {
                    for _ in 0..25 {
                        tracker.record("sustainability_core_v2", metrics(1.0, 5.0));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("recording thread finished");
        }
        assert_eq!(tracker.performance("sustainability_core_v2").usage_count, 200);
    }
}
