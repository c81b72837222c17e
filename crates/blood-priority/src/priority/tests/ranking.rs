use super::common::*;
use crate::priority::domain::{RequestId, RequestType};

#[test]
fn rank_orders_by_descending_score() {
    let mut routine = request(RequestType::Thalassemia, 1, 0);
    routine.request_id = RequestId("routine".to_string());
    let mut trauma = request(RequestType::Accident, 2, 0);
    trauma.request_id = RequestId("trauma".to_string());
    let mut surgery = request(RequestType::Surgery, 5, 30);
    surgery.request_id = RequestId("surgery".to_string());

    let ranked = engine().rank(&[routine, trauma, surgery], Some(now()));

    let order: Vec<&str> = ranked.iter().map(|r| r.request_id.0.as_str()).collect();
    assert_eq!(order, vec!["trauma", "surgery", "routine"]);
}

#[test]
fn rank_keeps_input_order_for_equal_scores() {
    let mut first = request(RequestType::Childbirth, 5, 0);
    first.request_id = RequestId("first".to_string());
    let mut second = request(RequestType::Accident, 1, 0);
    second.request_id = RequestId("second".to_string());

    let ranked = engine().rank(&[first, second], Some(now()));

    assert_eq!(ranked[0].score, ranked[1].score);
    assert_eq!(ranked[0].request_id.0, "first");
}

#[test]
fn rank_of_nothing_is_empty() {
    assert!(engine().rank(&[], Some(now())).is_empty());
}
