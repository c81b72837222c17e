use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::PriorityError;

/// Caller-assigned identifier for a blood request. Uniqueness is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(pub String);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Clinical context that raised the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestType {
    Accident,
    Surgery,
    Childbirth,
    Thalassemia,
}

impl RequestType {
    pub const ALL: [RequestType; 4] = [
        RequestType::Accident,
        RequestType::Surgery,
        RequestType::Childbirth,
        RequestType::Thalassemia,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            RequestType::Accident => "ACCIDENT",
            RequestType::Surgery => "SURGERY",
            RequestType::Childbirth => "CHILDBIRTH",
            RequestType::Thalassemia => "THALASSEMIA",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RequestType {
    type Err = PriorityError;

    /// Exact, case-sensitive match against the upper-case labels.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        RequestType::ALL
            .into_iter()
            .find(|kind| kind.label() == value)
            .ok_or_else(|| PriorityError::InvalidRequestType {
                value: value.to_string(),
            })
    }
}

/// Immutable snapshot of a blood request handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodRequest {
    pub request_id: RequestId,
    pub request_type: RequestType,
    /// Carried through for downstream matching; never scored.
    pub blood_group: String,
    pub units_required: i32,
    pub request_time: DateTime<Utc>,
    pub hospital_id: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Loosely typed request as it arrives from JSON adapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodRequestInput {
    #[serde(default = "default_request_id")]
    pub request_id: String,
    #[serde(default)]
    pub request_type: Option<String>,
    #[serde(default)]
    pub blood_group: Option<String>,
    #[serde(default)]
    pub units_required: i32,
    #[serde(default, alias = "origin_id")]
    pub hospital_id: Option<String>,
    #[serde(default)]
    pub request_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_request_id() -> String {
    "TEMP_ID".to_string()
}

impl BloodRequestInput {
    /// Validate the request type and build a snapshot. A missing `request_time`
    /// means the need arose at `received_at`.
    pub fn into_request(self, received_at: DateTime<Utc>) -> Result<BloodRequest, PriorityError> {
        let request_type = match self.request_type.as_deref() {
            Some(raw) => raw.parse::<RequestType>()?,
            None => {
                return Err(PriorityError::InvalidRequestType {
                    value: "<missing>".to_string(),
                })
            }
        };

        Ok(BloodRequest {
            request_id: RequestId(self.request_id),
            request_type,
            blood_group: self.blood_group.unwrap_or_default(),
            units_required: self.units_required,
            request_time: self.request_time.unwrap_or(received_at),
            hospital_id: self.hospital_id.unwrap_or_default(),
            notes: self.notes,
        })
    }
}

/// Factors that can contribute to a priority score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityFactor {
    BaseScore,
    TimeDecay,
    DemandPressure,
    Cap,
}

/// Discrete contribution to a priority score, kept for structured audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: PriorityFactor,
    pub points: i64,
    pub notes: String,
}

/// Scored request with its escalation decision and audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityResult {
    pub request_id: RequestId,
    pub score: u8,
    pub is_critical: bool,
    pub escalation_reason: Option<String>,
    pub classification_log: Vec<String>,
    pub components: Vec<ScoreComponent>,
}

impl PriorityResult {
    pub fn points_for(&self, factor: PriorityFactor) -> i64 {
        self.components
            .iter()
            .filter(|component| component.factor == factor)
            .map(|component| component.points)
            .sum()
    }
}
