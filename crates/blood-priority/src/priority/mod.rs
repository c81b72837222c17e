//! Urgency scoring and escalation for blood-unit requests.
//!
//! Scoring is a single deterministic pass: base score, time decay, demand pressure, cap, then
//! classification. The engine holds only its read-only policy, so one instance can be shared
//! freely across threads.

pub mod domain;
mod error;
mod escalation;
pub mod policy;
mod rules;

#[cfg(test)]
mod tests;

pub use domain::{
    BloodRequest, BloodRequestInput, PriorityFactor, PriorityResult, RequestId, RequestType,
    ScoreComponent,
};
pub use error::PriorityError;
pub use policy::{BaseScores, PriorityPolicy};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// Stateless evaluator applying a [`PriorityPolicy`] to request snapshots.
#[derive(Debug, Clone, Default)]
pub struct PriorityEngine {
    policy: PriorityPolicy,
}

impl PriorityEngine {
    pub fn new(policy: PriorityPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &PriorityPolicy {
        &self.policy
    }

    /// Score one request. `evaluated_at` defaults to the current instant.
    pub fn score(
        &self,
        request: &BloodRequest,
        evaluated_at: Option<DateTime<Utc>>,
    ) -> PriorityResult {
        let evaluated_at = evaluated_at.unwrap_or_else(Utc::now);
        let (sheet, signals) = rules::score_request(request, &self.policy, evaluated_at);

        let score = sheet.total.clamp(0, self.policy.max_score);
        let is_critical = escalation::is_critical(score, &self.policy);
        let escalation_reason = escalation::escalation_reason(score, &signals, &self.policy);

        let mut classification_log = sheet.log;
        if let Some(reason) = &escalation_reason {
            classification_log.push(format!("STATUS: {reason}"));
        }

        debug!(
            request_id = %request.request_id,
            request_type = %request.request_type,
            score,
            is_critical,
            "scored blood request"
        );

        PriorityResult {
            request_id: request.request_id.clone(),
            score: u8::try_from(score).unwrap_or(u8::MAX),
            is_critical,
            escalation_reason,
            classification_log,
            components: sheet.components,
        }
    }

    /// Validate raw adapter input and score it. Invalid request types are rejected before any
    /// rule runs, so no partial result is ever produced.
    pub fn score_input(
        &self,
        input: BloodRequestInput,
        evaluated_at: Option<DateTime<Utc>>,
    ) -> Result<PriorityResult, PriorityError> {
        let evaluated_at = evaluated_at.unwrap_or_else(Utc::now);
        let request = input.into_request(evaluated_at).map_err(|err| {
            warn!(error = %err, "rejected blood request");
            err
        })?;
        Ok(self.score(&request, Some(evaluated_at)))
    }

    /// Score every request against one shared instant and order by descending score.
    /// Equal scores keep their input order.
    pub fn rank(
        &self,
        requests: &[BloodRequest],
        evaluated_at: Option<DateTime<Utc>>,
    ) -> Vec<PriorityResult> {
        let evaluated_at = evaluated_at.unwrap_or_else(Utc::now);
        let mut results: Vec<PriorityResult> = requests
            .iter()
            .map(|request| self.score(request, Some(evaluated_at)))
            .collect();
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results
    }
}
