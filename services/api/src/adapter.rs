use blood_priority::priority::{BloodRequestInput, PriorityEngine, PriorityResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Read;
use tracing::warn;

/// Wire shape returned to dashboard callers for a single scored request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct PriorityResponse {
    pub(crate) score: u8,
    pub(crate) is_critical: bool,
    pub(crate) escalation_reason: Option<String>,
    pub(crate) classification_log: Vec<String>,
}

impl From<PriorityResult> for PriorityResponse {
    fn from(result: PriorityResult) -> Self {
        Self {
            score: result.score,
            is_critical: result.is_critical,
            escalation_reason: result.escalation_reason,
            classification_log: result.classification_log,
        }
    }
}

/// Entry in a ranked listing; carries the id so callers can match results back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct RankedPriority {
    pub(crate) request_id: String,
    #[serde(flatten)]
    pub(crate) priority: PriorityResponse,
}

impl From<PriorityResult> for RankedPriority {
    fn from(result: PriorityResult) -> Self {
        Self {
            request_id: result.request_id.0.clone(),
            priority: PriorityResponse::from(result),
        }
    }
}

/// Adapter output: either a scored response or a boundary error object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub(crate) enum AdapterOutput {
    Scored(PriorityResponse),
    Failed { error: String },
}

impl AdapterOutput {
    fn failed(message: impl Into<String>) -> Self {
        let error = message.into();
        warn!(%error, "priority request rejected at adapter boundary");
        Self::Failed { error }
    }

    pub(crate) fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|err| {
            serde_json::json!({ "error": format!("failed to encode response: {err}") }).to_string()
        })
    }
}

pub(crate) fn parse_instant(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|err| format!("failed to parse '{raw}' as an RFC 3339 timestamp ({err})"))
}

/// Score one JSON request object. Every failure is folded into [`AdapterOutput::Failed`].
pub(crate) fn score_json(
    engine: &PriorityEngine,
    raw: Option<&str>,
    evaluated_at: Option<DateTime<Utc>>,
) -> AdapterOutput {
    let Some(raw) = raw else {
        return AdapterOutput::failed("No input provided");
    };

    let input: BloodRequestInput = match serde_json::from_str(raw) {
        Ok(input) => input,
        Err(err) => return AdapterOutput::failed(err.to_string()),
    };

    match engine.score_input(input, evaluated_at) {
        Ok(result) => AdapterOutput::Scored(result.into()),
        Err(err) => AdapterOutput::failed(err.to_string()),
    }
}

/// Resolve the CLI payload: `-` reads stdin, anything else is the JSON itself.
pub(crate) fn read_payload<R: Read>(
    arg: Option<String>,
    mut stdin: R,
) -> Result<Option<String>, String> {
    match arg.as_deref() {
        Some("-") => {
            let mut buffer = String::new();
            stdin
                .read_to_string(&mut buffer)
                .map_err(|err| format!("failed to read stdin: {err}"))?;
            Ok(Some(buffer))
        }
        _ => Ok(arg),
    }
}
