// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use super::{is_ferry, resolve_restrictions, Profile, Restriction};
use crate::Tags;

/// Result of classifying a way with [classify_way].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WayAccess {
    /// The way is usable and should be added to the routing graph.
    Routable,

    /// The way is a ferry route, usable in both directions.
    Ferry,

    /// The way is not usable by the vehicle class.
    Skip,
}

impl WayAccess {
    pub fn can_skip(self) -> bool {
        self == Self::Skip
    }

    pub fn is_ferry(self) -> bool {
        self == Self::Ferry
    }

    pub fn is_routable(self) -> bool {
        self == Self::Routable
    }
}

/// Decides whether a way with given tags is usable by the vehicle class described by the [Profile].
///
/// Structural exclusions (`highway` value outside [Profile::allowed_highways], motorways,
/// `motorroad=yes` and, if [Profile::block_fords] is set, fords) are checked before the
/// access tags. Apart from `highway` kinds, those exclusions are lifted if the
/// vehicle class tag has an intended value (e.g. `bicycle=yes`).
/// A vehicle class tag set to [Profile::dismount_value] always makes the way routable.
///
/// Ways without a `highway` tag are only usable if they are platforms, piers
/// or explicitly allowed (possibly as [WayAccess::Ferry]).
pub fn classify_way(tags: &Tags, profile: &Profile) -> WayAccess {
    let Some(highway) = tags.get("highway") else {
        return classify_non_highway(tags, profile);
    };

    if !profile.is_allowed_highway(highway) {
        return WayAccess::Skip;
    }

    let vehicle = tags.get(profile.vehicle_key());

    // Usable, even if only walking beside the vehicle
    if vehicle == Some(profile.dismount_value) {
        return WayAccess::Routable;
    }

    let allowed_explicitly = vehicle.is_some_and(|v| profile.is_intended(v));
    if !allowed_explicitly {
        if highway == "motorway" || highway == "motorway_link" {
            return WayAccess::Skip;
        }

        if tags.has_tag("motorroad", "yes") {
            return WayAccess::Skip;
        }

        if profile.block_fords && is_ford(highway, tags) {
            return WayAccess::Skip;
        }
    }

    match resolve_restrictions(tags, profile) {
        Restriction::Deny => WayAccess::Skip,
        Restriction::Allow | Restriction::NoMatch => WayAccess::Routable,
    }
}

fn classify_non_highway(tags: &Tags, profile: &Profile) -> WayAccess {
    if tags.has_tag("railway", "platform") || tags.has_tag("man_made", "pier") {
        return WayAccess::Routable;
    }

    match resolve_restrictions(tags, profile) {
        Restriction::Allow if is_ferry(tags) => WayAccess::Ferry,
        Restriction::Allow => WayAccess::Routable,
        Restriction::Deny => WayAccess::Skip,

        // Without an explicit allowance, not even ferries are assumed usable,
        // e.g. `route=ferry + foot=yes` is skipped.
        Restriction::NoMatch => WayAccess::Skip,
    }
}

fn is_ford(highway: &str, tags: &Tags) -> bool {
    highway == "ford" || tags.get("ford").is_some_and(|v| v != "no")
}
