use serde::{Deserialize, Serialize};

use super::domain::RequestType;

/// Fixed base urgency per request category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseScores {
    pub accident: i64,
    pub surgery: i64,
    pub childbirth: i64,
    pub thalassemia: i64,
}

impl BaseScores {
    pub const fn for_type(&self, request_type: RequestType) -> i64 {
        match request_type {
            RequestType::Accident => self.accident,
            RequestType::Surgery => self.surgery,
            RequestType::Childbirth => self.childbirth,
            RequestType::Thalassemia => self.thalassemia,
        }
    }
}

/// Read-only thresholds and weights driving the scoring rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityPolicy {
    pub base_scores: BaseScores,
    pub critical_threshold: i64,
    pub max_score: i64,
    pub decay_interval_minutes: i64,
    pub significant_delay_minutes: i64,
    pub high_base_priority: i64,
    pub high_demand_units: i32,
    pub high_demand_points: i64,
    pub moderate_demand_units: i32,
    pub moderate_demand_points: i64,
}

impl PriorityPolicy {
    pub const fn standard() -> Self {
        Self {
            base_scores: BaseScores {
                accident: 90,
                surgery: 75,
                childbirth: 80,
                thalassemia: 60,
            },
            critical_threshold: 85,
            max_score: 100,
            decay_interval_minutes: 10,
            significant_delay_minutes: 60,
            high_base_priority: 80,
            high_demand_units: 5,
            high_demand_points: 10,
            moderate_demand_units: 3,
            moderate_demand_points: 5,
        }
    }
}

impl Default for PriorityPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
