use crate::adapter::parse_instant;
use blood_priority::priority::{
    BloodRequest, PriorityEngine, PriorityResult, RequestId, RequestType,
};
use chrono::{DateTime, Duration, Utc};
use clap::Args;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation instant (RFC 3339). Defaults to now.
    #[arg(long, value_parser = parse_instant)]
    pub(crate) at: Option<DateTime<Utc>>,
}

/// Reference scenario replayed by the validation run.
pub(crate) struct Scenario {
    pub(crate) title: &'static str,
    pub(crate) request: BloodRequest,
}

pub(crate) fn scenarios(start: DateTime<Utc>) -> Vec<Scenario> {
    let build = |id: &str, request_type, blood_group: &str, units, minutes_ago| BloodRequest {
        request_id: RequestId(id.to_string()),
        request_type,
        blood_group: blood_group.to_string(),
        units_required: units,
        request_time: start - Duration::minutes(minutes_ago),
        hospital_id: "H1".to_string(),
        notes: None,
    };

    vec![
        Scenario {
            title: "Standard Trauma",
            request: build("R1", RequestType::Accident, "O-", 2, 0),
        },
        Scenario {
            title: "Complex Surgery Escalation",
            request: build("R2", RequestType::Surgery, "A+", 5, 30),
        },
        Scenario {
            title: "Routine Chronic Care",
            request: build("R3", RequestType::Thalassemia, "B+", 1, 0),
        },
        Scenario {
            title: "Obstetric Emergency with Delay",
            request: build("R4", RequestType::Childbirth, "AB-", 2, 65),
        },
        Scenario {
            title: "Mass Casualty (Max Score Cap)",
            request: build("R5", RequestType::Accident, "O-", 10, 120),
        },
    ]
}

pub(crate) fn run_demo(args: DemoArgs) {
    let start = args.at.unwrap_or_else(Utc::now);
    let engine = PriorityEngine::default();
    let scenarios = scenarios(start);

    println!("Emergency priority engine validation run");
    println!("Evaluated at {}", start.to_rfc3339());

    for scenario in &scenarios {
        let result = engine.score(&scenario.request, Some(start));
        println!("{}", render_scenario(scenario, &result, start));
    }

    let requests: Vec<BloodRequest> = scenarios
        .into_iter()
        .map(|scenario| scenario.request)
        .collect();
    println!("Ranked queue");
    for (position, result) in engine.rank(&requests, Some(start)).iter().enumerate() {
        let marker = if result.is_critical { " [CRITICAL]" } else { "" };
        println!(
            "{}. {} score {}{}",
            position + 1,
            result.request_id,
            result.score,
            marker
        );
    }
}

fn render_scenario(scenario: &Scenario, result: &PriorityResult, start: DateTime<Utc>) -> String {
    let request = &scenario.request;
    let age_minutes = (start - request.request_time).num_minutes();

    let mut lines = vec![
        format!("\n--- SCENARIO: {} ---", scenario.title),
        format!(
            "Request: {}, Units: {}, Age: {} min",
            request.request_type, request.units_required, age_minutes
        ),
        format!("SCORE: {} / 100", result.score),
        format!("CRITICAL: {}", result.is_critical),
    ];
    if let Some(reason) = &result.escalation_reason {
        lines.push(format!("REASON: {reason}"));
    }
    lines.push("LOGIC TRACE:".to_string());
    lines.extend(
        result
            .classification_log
            .iter()
            .map(|entry| format!("  > {entry}")),
    );
    lines.push("-".repeat(40));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> DateTime<Utc> {
        parse_instant("2025-01-01T12:00:00Z").expect("valid instant")
    }

    #[test]
    fn reference_scenarios_score_as_documented() {
        let engine = PriorityEngine::default();
        let scores: Vec<(u8, bool)> = scenarios(start())
            .iter()
            .map(|scenario| engine.score(&scenario.request, Some(start())))
            .map(|result| (result.score, result.is_critical))
            .collect();

        assert_eq!(
            scores,
            vec![(90, true), (88, true), (60, false), (86, true), (100, true)]
        );
    }

    #[test]
    fn rendered_scenario_includes_trace_and_reason() {
        let engine = PriorityEngine::default();
        let scenarios = scenarios(start());
        let mass_casualty = &scenarios[4];
        let result = engine.score(&mass_casualty.request, Some(start()));

        let rendered = render_scenario(mass_casualty, &result, start());

        assert!(rendered.contains("--- SCENARIO: Mass Casualty (Max Score Cap) ---"));
        assert!(rendered.contains("Age: 120 min"));
        assert!(rendered.contains("  > Score Capped (Original: 112): 100"));
        assert!(rendered.contains("REASON: CRITICAL ESCALATION:"));
    }

    #[test]
    fn routine_scenario_omits_reason_line() {
        let engine = PriorityEngine::default();
        let scenarios = scenarios(start());
        let routine = &scenarios[2];
        let result = engine.score(&routine.request, Some(start()));

        let rendered = render_scenario(routine, &result, start());

        assert!(!rendered.contains("REASON:"));
        assert!(rendered.contains("CRITICAL: false"));
    }
}
