use super::policy::PriorityPolicy;
use super::rules::ScoreSignals;

const FALLBACK_REASON: &str = "Composite Urgency";

/// One labelled condition contributing to an escalation reason.
pub(crate) struct EscalationRule {
    pub label: &'static str,
    pub applies: fn(&ScoreSignals, &PriorityPolicy) -> bool,
}

/// Evaluated in order; the order is reflected verbatim in the reason string.
pub(crate) const ESCALATION_RULES: &[EscalationRule] = &[
    EscalationRule {
        label: "High Base Priority",
        applies: high_base_priority,
    },
    EscalationRule {
        label: "Significant Delay",
        applies: significant_delay,
    },
    EscalationRule {
        label: "High Demand",
        applies: high_demand,
    },
];

fn high_base_priority(signals: &ScoreSignals, policy: &PriorityPolicy) -> bool {
    signals.base_score >= policy.high_base_priority
}

fn significant_delay(signals: &ScoreSignals, policy: &PriorityPolicy) -> bool {
    signals.minutes_elapsed > policy.significant_delay_minutes
}

fn high_demand(signals: &ScoreSignals, policy: &PriorityPolicy) -> bool {
    signals.units_required >= policy.high_demand_units
}

pub(crate) fn is_critical(score: i64, policy: &PriorityPolicy) -> bool {
    score >= policy.critical_threshold
}

/// Builds the escalation label for a critical score, or `None` below the threshold.
pub(crate) fn escalation_reason(
    score: i64,
    signals: &ScoreSignals,
    policy: &PriorityPolicy,
) -> Option<String> {
    if !is_critical(score, policy) {
        return None;
    }

    let mut reasons: Vec<&str> = ESCALATION_RULES
        .iter()
        .filter(|rule| (rule.applies)(signals, policy))
        .map(|rule| rule.label)
        .collect();

    if reasons.is_empty() {
        reasons.push(FALLBACK_REASON);
    }

    Some(format!("CRITICAL ESCALATION: {}", reasons.join(", ")))
}
