// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Bounding volumes used by broad-phase pruning.
//!
//! Overlap semantics are inclusive on faces: two boxes that merely touch are
//! treated as overlapping, so pruning never rejects a pair whose exact shapes
//! are in contact.

#[doc = "Axis-aligned bounding boxes (map frame)."]
pub mod aabb;
