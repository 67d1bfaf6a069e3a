// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Pinned-seed properties relating broad phase, narrow phase and early exit.

mod common;

use common::{disc, polyline};
use fleet_geom::CcdSolver;
use fleet_traffic::{possible_conflict, ConflictDetector, Trajectory};
use proptest::prelude::*;
use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};

// Re-run with another seed by editing SEED_BYTES or exporting PROPTEST_SEED.
const SEED_BYTES: [u8; 32] = [
    0x17, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0,
];

fn trajectory() -> impl Strategy<Value = Trajectory> {
    let point = prop::array::uniform2(-4.0f64..4.0);
    (prop::collection::vec(point, 2..5), 0.0f64..3.0, 0.1f64..0.8).prop_map(
        |(points, t0, radius)| polyline("L1", &disc(radius), &points, t0),
    )
}

#[test]
fn broad_phase_is_sound_and_early_exit_keeps_the_first_conflict() {
    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES);
    let config = PropConfig {
        cases: 96,
        ..PropConfig::default()
    };
    let mut runner = TestRunner::new_with_rng(config, rng);

    let detector = ConflictDetector::<CcdSolver>::default();

    runner
        .run(&(trajectory(), trajectory()), |(a, b)| {
            let all = detector.narrow_phase(&a, &b, false).expect("valid trajectories");
            if !all.is_empty() {
                prop_assert_eq!(possible_conflict(&a, &b), Ok(true));
            }

            let first = detector.between(&a, &b, true).expect("valid trajectories");
            prop_assert_eq!(&first[..], &all[..all.len().min(1)]);

            for conflict in &all {
                let (ia, ib) = conflict.segments;
                let sa = a.segment(ia).expect("segment in a");
                let sb = b.segment(ib).expect("segment in b");
                prop_assert!(conflict.time >= sa.start_time().max(sb.start_time()));
                prop_assert!(conflict.time <= sa.finish_time().min(sb.finish_time()));
            }
            prop_assert!(all.windows(2).all(|w| w[0].time <= w[1].time));
            Ok(())
        })
        .expect("property holds");
}
