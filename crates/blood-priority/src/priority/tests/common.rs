use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::priority::domain::{BloodRequest, RequestId, RequestType};
use crate::priority::{PriorityEngine, PriorityPolicy};

pub(super) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn engine() -> PriorityEngine {
    PriorityEngine::new(PriorityPolicy::standard())
}

pub(super) fn request(request_type: RequestType, units: i32, minutes_ago: i64) -> BloodRequest {
    request_at(request_type, units, now() - Duration::minutes(minutes_ago))
}

pub(super) fn request_at(
    request_type: RequestType,
    units: i32,
    request_time: DateTime<Utc>,
) -> BloodRequest {
    BloodRequest {
        request_id: RequestId("REQ-001".to_string()),
        request_type,
        blood_group: "A+".to_string(),
        units_required: units,
        request_time,
        hospital_id: "H-123".to_string(),
        notes: None,
    }
}
