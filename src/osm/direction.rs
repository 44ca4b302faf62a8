// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use super::Profile;
use crate::Tags;

/// Values of one-way tags restricting travel to the direction of the way.
pub const ONEWAY_FORWARD: &[&str] = &["yes", "true", "1"];

/// Values of one-way tags restricting travel to the opposite direction of the way.
pub const ONEWAY_BACKWARD: &[&str] = &["-1", "reverse"];

/// Values of `cycleway` tags describing contraflow infrastructure.
pub const OPPOSITE_LANES: &[&str] = &["opposite", "opposite_lane", "opposite_track"];

const ONEWAY_ANY: &[&str] = &["yes", "true", "1", "-1", "reverse"];

/// Checks if a way is traversable forward (first return value) and
/// backwards (second return value) by the vehicle class of the [Profile].
///
/// This function must only be called for ways classified as
/// [WayAccess::Routable](crate::osm::WayAccess::Routable).
/// At least one of the returned values is always true.
///
/// The way is first checked for any one-way restriction: generic (`oneway`,
/// `vehicle:forward`, `vehicle:backward`) restrictions not lifted by
/// the vehicle class forward/backward tags, vehicle class restrictions
/// ([Profile::oneway_key], [Profile::forward_key], [Profile::backward_key]) and one-way
/// cycle lanes. One-way restricted ways and roundabouts then become bidirectional
/// if contraflow is permitted, e.g. by `oneway:bicycle=no` or `cycleway=opposite_lane`.
pub fn resolve_directions(tags: &Tags, is_roundabout: bool, profile: &Profile) -> (bool, bool) {
    if (is_oneway(tags, profile) || is_roundabout) && !is_contraflow_permitted(tags, profile) {
        let backward = is_oneway_backward(tags, profile);
        (!backward, backward)
    } else {
        (true, true)
    }
}

fn is_oneway(tags: &Tags, profile: &Profile) -> bool {
    let restricted = |key: &str| tags.get(key).is_some_and(|v| profile.is_restricted(v));
    let intended = |key: &str| tags.get(key).is_some_and(|v| profile.is_intended(v));

    (tags.has_tag_in("oneway", ONEWAY_FORWARD) && !intended(profile.backward_key))
        || (tags.has_tag_in("oneway", ONEWAY_BACKWARD) && !intended(profile.forward_key))
        || tags.has_tag_in(profile.oneway_key, ONEWAY_ANY)
        || tags.has_tag_in("cycleway:left:oneway", ONEWAY_ANY)
        || tags.has_tag_in("cycleway:right:oneway", ONEWAY_ANY)
        || (restricted("vehicle:backward") && !intended(profile.forward_key))
        || (restricted("vehicle:forward") && !intended(profile.backward_key))
        || restricted(profile.forward_key)
        || restricted(profile.backward_key)
}

fn is_contraflow_permitted(tags: &Tags, profile: &Profile) -> bool {
    tags.has_tag(profile.oneway_key, "no")
        || tags.get("cycleway:both").is_some_and(|v| v != "no")
        || tags.has_tag_in("cycleway", OPPOSITE_LANES)
        || tags.has_tag_in("cycleway:left", OPPOSITE_LANES)
        || tags.has_tag_in("cycleway:right", OPPOSITE_LANES)
        || tags.has_tag("cycleway:left:oneway", "no")
        || tags.has_tag("cycleway:right:oneway", "no")
}

fn is_oneway_backward(tags: &Tags, profile: &Profile) -> bool {
    let restricted = |key: &str| tags.get(key).is_some_and(|v| profile.is_restricted(v));

    tags.has_tag_in("oneway", ONEWAY_BACKWARD)
        || tags.has_tag_in(profile.oneway_key, ONEWAY_BACKWARD)
        || tags.has_tag_in("cycleway:left:oneway", ONEWAY_BACKWARD)
        || tags.has_tag_in("cycleway:right:oneway", ONEWAY_BACKWARD)
        || restricted("vehicle:forward")
        || restricted(profile.forward_key)
}
