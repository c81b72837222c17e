use chrono::{DateTime, Utc};

use super::domain::{BloodRequest, PriorityFactor, ScoreComponent};
use super::policy::PriorityPolicy;

/// Facts gathered while scoring that the escalation rules reason over.
pub(crate) struct ScoreSignals {
    pub base_score: i64,
    pub minutes_elapsed: i64,
    pub units_required: i32,
}

/// Running tally of contributions; every component doubles as one trace line.
pub(crate) struct ScoreSheet {
    pub components: Vec<ScoreComponent>,
    pub log: Vec<String>,
    pub total: i64,
}

impl ScoreSheet {
    fn new() -> Self {
        Self {
            components: Vec::new(),
            log: Vec::new(),
            total: 0,
        }
    }

    fn add(&mut self, factor: PriorityFactor, points: i64, notes: String) {
        self.total += points;
        self.log.push(notes.clone());
        self.components.push(ScoreComponent {
            factor,
            points,
            notes,
        });
    }
}

/// Whole minutes between the request and the evaluation instant, truncated toward zero.
/// Negative when the request is dated in the future.
pub(crate) fn minutes_elapsed(request_time: DateTime<Utc>, evaluated_at: DateTime<Utc>) -> i64 {
    (evaluated_at - request_time).num_seconds() / 60
}

pub(crate) fn score_request(
    request: &BloodRequest,
    policy: &PriorityPolicy,
    evaluated_at: DateTime<Utc>,
) -> (ScoreSheet, ScoreSignals) {
    let mut sheet = ScoreSheet::new();

    let base_score = policy.base_scores.for_type(request.request_type);
    sheet.add(
        PriorityFactor::BaseScore,
        base_score,
        format!("Base Score ({}): +{base_score}", request.request_type),
    );

    let minutes_elapsed = minutes_elapsed(request.request_time, evaluated_at);
    if minutes_elapsed > 0 {
        let time_points = minutes_elapsed
            .checked_div(policy.decay_interval_minutes)
            .unwrap_or(0);
        if time_points > 0 {
            sheet.add(
                PriorityFactor::TimeDecay,
                time_points,
                format!("Time Decay ({minutes_elapsed} min): +{time_points}"),
            );
        }
    }

    let units = request.units_required;
    if units >= policy.high_demand_units {
        let points = policy.high_demand_points;
        sheet.add(
            PriorityFactor::DemandPressure,
            points,
            format!(
                "Demand Pressure (Units {units} >= {}): +{points}",
                policy.high_demand_units
            ),
        );
    } else if units >= policy.moderate_demand_units {
        let points = policy.moderate_demand_points;
        sheet.add(
            PriorityFactor::DemandPressure,
            points,
            format!(
                "Demand Pressure (Units {units} >= {}): +{points}",
                policy.moderate_demand_units
            ),
        );
    }

    if sheet.total > policy.max_score {
        let original = sheet.total;
        sheet.add(
            PriorityFactor::Cap,
            policy.max_score - original,
            format!("Score Capped (Original: {original}): {}", policy.max_score),
        );
    }

    let signals = ScoreSignals {
        base_score,
        minutes_elapsed,
        units_required: units,
    };

    (sheet, signals)
}
