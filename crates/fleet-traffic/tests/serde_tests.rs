// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![cfg(feature = "serde")]
//! Conflict results and solver settings load from caller configuration.

use fleet_geom::{CcdSolverType, ContinuousCollisionRequest};
use fleet_traffic::{ConflictData, ConflictDetector, Time};

#[test]
fn conflict_data_serializes_as_plain_json() {
    let conflict = ConflictData {
        time: Time::from_nanos(4_292_893_219),
        segments: (2, 0),
    };
    let json = serde_json::to_value(conflict).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({ "time": { "nanos": 4_292_893_219_i64 }, "segments": [2, 0] })
    );
    let back: ConflictData = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, conflict);
}

#[test]
fn detector_builds_from_partial_request() {
    let request: ContinuousCollisionRequest =
        serde_json::from_str(r#"{ "solver": "naive", "naive_steps": 250 }"#).expect("parse");
    assert_eq!(request.solver, CcdSolverType::Naive);
    assert_eq!(request.naive_steps, 250);
    let detector = ConflictDetector::new(request).expect("valid request");
    assert_eq!(detector.backend().request().naive_steps, 250);

    let bad: ContinuousCollisionRequest =
        serde_json::from_str(r#"{ "tolerance": 0.0 }"#).expect("parse");
    assert!(ConflictDetector::new(bad).is_err());
}
