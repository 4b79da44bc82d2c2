#![allow(dead_code)]

use cors_guard::{ErrorBody, Header, ResponseEvent};

/// Unwraps the single response-start of a recorded event sequence.
pub fn single_start(events: &[ResponseEvent]) -> (u16, Vec<Header>) {
    let mut starts = events.iter().filter(|event| event.is_start());
    let start = starts.next().unwrap_or_else(|| panic!("no start event in {:?}", events));
    assert!(
        starts.next().is_none(),
        "more than one start event in {:?}",
        events
    );
    match start {
        ResponseEvent::Start { status, headers } => (*status, headers.clone()),
        _ => unreachable!(),
    }
}

pub fn start_count(events: &[ResponseEvent]) -> usize {
    events.iter().filter(|event| event.is_start()).count()
}

/// Concatenates every body chunk of a recorded event sequence.
pub fn collected_body(events: &[ResponseEvent]) -> Vec<u8> {
    events
        .iter()
        .filter_map(|event| match event {
            ResponseEvent::Body { bytes, .. } => Some(bytes.as_ref()),
            _ => None,
        })
        .collect::<Vec<&[u8]>>()
        .concat()
}

pub fn json_message(events: &[ResponseEvent]) -> String {
    let body: ErrorBody =
        serde_json::from_slice(&collected_body(events)).expect("body deserializes as JSON message");
    body.message
}
