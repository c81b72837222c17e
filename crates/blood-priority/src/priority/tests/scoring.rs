use chrono::Duration;

use super::common::*;
use crate::priority::domain::{PriorityFactor, RequestType};

#[test]
fn base_score_matches_fixed_table() {
    let engine = engine();
    let expected = [
        (RequestType::Accident, 90),
        (RequestType::Surgery, 75),
        (RequestType::Childbirth, 80),
        (RequestType::Thalassemia, 60),
    ];

    for (request_type, base) in expected {
        let result = engine.score(&request(request_type, 1, 0), Some(now()));
        assert_eq!(result.points_for(PriorityFactor::BaseScore), base);
        assert_eq!(i64::from(result.score), base);
        assert_eq!(
            result.classification_log[0],
            format!("Base Score ({}): +{base}", request_type.label())
        );
    }
}

#[test]
fn surgery_with_moderate_demand_and_short_delay_stays_below_threshold() {
    let result = engine().score(&request(RequestType::Surgery, 3, 25), Some(now()));

    assert_eq!(result.score, 82);
    assert!(!result.is_critical);
    assert_eq!(result.escalation_reason, None);
    assert_eq!(
        result.classification_log,
        vec![
            "Base Score (SURGERY): +75".to_string(),
            "Time Decay (25 min): +2".to_string(),
            "Demand Pressure (Units 3 >= 3): +5".to_string(),
        ]
    );
}

#[test]
fn thalassemia_accrues_one_point_per_ten_minutes() {
    let result = engine().score(&request(RequestType::Thalassemia, 1, 100), Some(now()));

    assert_eq!(result.score, 70);
    assert_eq!(result.points_for(PriorityFactor::TimeDecay), 10);
}

#[test]
fn sub_interval_delay_adds_no_trace_line() {
    let request_time = now() - Duration::seconds(9 * 60 + 59);
    let result = engine().score(
        &request_at(RequestType::Thalassemia, 1, request_time),
        Some(now()),
    );

    assert_eq!(result.score, 60);
    assert_eq!(result.classification_log.len(), 1);
    assert!(result
        .components
        .iter()
        .all(|component| component.factor != PriorityFactor::TimeDecay));
}

#[test]
fn partial_minutes_are_dropped_before_decay() {
    let request_time = now() - Duration::seconds(20 * 60 + 59);
    let result = engine().score(
        &request_at(RequestType::Thalassemia, 1, request_time),
        Some(now()),
    );

    assert_eq!(result.score, 62);
    assert_eq!(result.classification_log[1], "Time Decay (20 min): +2");
}

#[test]
fn future_dated_request_contributes_no_decay() {
    let request_time = now() + Duration::minutes(45);
    let result = engine().score(
        &request_at(RequestType::Childbirth, 1, request_time),
        Some(now()),
    );

    assert_eq!(result.score, 80);
    assert_eq!(result.points_for(PriorityFactor::TimeDecay), 0);
}

#[test]
fn demand_tiers_are_mutually_exclusive() {
    let engine = engine();
    let cases = [(-2, 0), (0, 0), (2, 0), (3, 5), (4, 5), (5, 10), (40, 10)];

    for (units, bonus) in cases {
        let result = engine.score(&request(RequestType::Thalassemia, units, 0), Some(now()));
        assert_eq!(
            result.points_for(PriorityFactor::DemandPressure),
            bonus,
            "units {units}"
        );
        let demand_lines = result
            .classification_log
            .iter()
            .filter(|line| line.starts_with("Demand Pressure"))
            .count();
        assert_eq!(demand_lines, usize::from(bonus > 0));
    }
}

#[test]
fn score_over_maximum_is_capped_and_original_recorded() {
    let result = engine().score(&request(RequestType::Accident, 6, 200), Some(now()));

    assert_eq!(result.score, 100);
    assert!(result.is_critical);
    assert!(result
        .classification_log
        .contains(&"Score Capped (Original: 120): 100".to_string()));
    assert_eq!(result.points_for(PriorityFactor::Cap), -20);
}

#[test]
fn score_at_exact_maximum_is_not_reported_as_capped() {
    let result = engine().score(&request(RequestType::Accident, 1, 100), Some(now()));

    assert_eq!(result.score, 100);
    assert!(!result
        .classification_log
        .iter()
        .any(|line| line.starts_with("Score Capped")));
}

#[test]
fn repeated_scoring_is_identical() {
    let engine = engine();
    let request = request(RequestType::Surgery, 4, 73);

    let first = engine.score(&request, Some(now()));
    let second = engine.score(&request, Some(now()));

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serializes"),
        serde_json::to_string(&second).expect("serializes")
    );
}

#[test]
fn omitted_instant_reads_current_time() {
    let request = request_at(RequestType::Thalassemia, 1, chrono::Utc::now());
    let result = engine().score(&request, None);

    assert_eq!(result.score, 60);
}
