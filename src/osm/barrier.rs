// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use super::{resolve_restrictions, Profile, Restriction};
use crate::Tags;

/// Checks if a node with given tags blocks passage of the vehicle class of the [Profile].
///
/// Explicit access tags take precedence over the `barrier` kind, so that
/// `barrier=gate + access=no` blocks, but `barrier=fence + bicycle=yes` does not.
/// Locked barriers (`locked=yes`) block, unless the vehicle class is explicitly allowed.
pub fn is_barrier(tags: &Tags, profile: &Profile) -> bool {
    match resolve_restrictions(tags, profile) {
        Restriction::Deny => return true,
        Restriction::Allow => return false,
        Restriction::NoMatch => {}
    }

    if tags.has_tag("locked", "yes") || tags.has_tag_in("barrier", profile.barriers) {
        true
    } else {
        profile.block_fords && tags.has_tag("ford", "yes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::osm::{Options, BICYCLE_PROFILE};
    use crate::tags::tags;

    fn barrier(tags: &Tags) -> bool {
        is_barrier(tags, &BICYCLE_PROFILE)
    }

    #[test]
    fn gates() {
        let mut node = tags! {"barrier": "gate"};
        assert!(!barrier(&node));
        node.insert("access", "no");
        assert!(barrier(&node));
        node.insert("bicycle", "yes");
        assert!(!barrier(&node));
    }

    #[test]
    fn locked_gates() {
        let mut node = tags! {"barrier": "gate", "locked": "yes"};
        assert!(barrier(&node));
        node.insert("access", "yes");
        assert!(!barrier(&node));
        node.remove("access");
        node.insert("bicycle", "yes");
        assert!(!barrier(&node));
        node.insert("bicycle", "no");
        assert!(barrier(&node));
        assert!(!barrier(&tags! {"barrier": "gate", "locked": "no"}));
    }

    #[test]
    fn barrier_kinds() {
        assert!(!barrier(&tags! {}));
        assert!(!barrier(&tags! {"barrier": "bollard"}));
        assert!(!barrier(&tags! {"barrier": "lift_gate"}));
        assert!(barrier(&tags! {"barrier": "fence"}));
        assert!(barrier(&tags! {"barrier": "stile"}));
        assert!(!barrier(&tags! {"barrier": "fence", "bicycle": "designated"}));
        assert!(!barrier(&tags! {"barrier": "kissing_gate", "access": "yes"}));
        assert!(barrier(&tags! {"barrier": "bollard", "vehicle": "private"}));
    }

    #[test]
    fn fords() {
        let node = tags! {"ford": "yes"};
        assert!(!barrier(&node));

        let profile = BICYCLE_PROFILE.with_options(&Options {
            block_fords: true,
            ..Options::default()
        });
        assert!(is_barrier(&node, &profile));
        assert!(!is_barrier(&tags! {"ford": "yes", "bicycle": "yes"}, &profile));
    }
}
