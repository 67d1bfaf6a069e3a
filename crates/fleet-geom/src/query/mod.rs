// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Proximity queries between posed convex shapes.

#[doc = "Separation distance via parry."]
pub mod distance;
