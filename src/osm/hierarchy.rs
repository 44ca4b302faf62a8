// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use super::Profile;
use crate::Tags;

/// Outcome of [resolve_restrictions].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restriction {
    /// An explicitly restricted value was found, e.g. `access=no`.
    Deny,

    /// An explicitly intended value was found, e.g. `bicycle=yes`.
    Allow,

    /// No restriction key is present, or the first present key
    /// has neither a restricted nor an intended value.
    NoMatch,
}

/// Checks the explicit access restrictions of a feature, by following
/// [Profile::restriction_keys] from most to least specific.
///
/// Only the first present key is evaluated. Its `;`-separated values are
/// checked in order and the first restricted or intended value decides the outcome.
/// A present key with unrecognized values (e.g. `vehicle=unknown`) still
/// shadows all less specific keys, and results in [Restriction::NoMatch].
pub fn resolve_restrictions(tags: &Tags, profile: &Profile) -> Restriction {
    let Some(values) = profile
        .restriction_keys
        .iter()
        .find_map(|&key| tags.values(key))
    else {
        return Restriction::NoMatch;
    };

    for value in values {
        if profile.is_restricted(value) {
            return Restriction::Deny;
        }
        if profile.is_intended(value) {
            return Restriction::Allow;
        }
    }

    Restriction::NoMatch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::osm::{Options, BICYCLE_PROFILE};
    use crate::tags::tags;

    fn resolve(tags: &Tags) -> Restriction {
        resolve_restrictions(tags, &BICYCLE_PROFILE)
    }

    #[test]
    fn no_keys() {
        assert_eq!(resolve(&tags! {}), Restriction::NoMatch);
        assert_eq!(resolve(&tags! {"foot": "no"}), Restriction::NoMatch);
        assert_eq!(resolve(&tags! {"motor_vehicle": "yes"}), Restriction::NoMatch);
    }

    #[test]
    fn single_key() {
        assert_eq!(resolve(&tags! {"access": "no"}), Restriction::Deny);
        assert_eq!(resolve(&tags! {"access": "yes"}), Restriction::Allow);
        assert_eq!(resolve(&tags! {"vehicle": "delivery"}), Restriction::Deny);
        assert_eq!(resolve(&tags! {"bicycle": "designated"}), Restriction::Allow);
        assert_eq!(resolve(&tags! {"access": "restricted"}), Restriction::NoMatch);
    }

    #[test]
    fn most_specific_key_wins() {
        assert_eq!(
            resolve(&tags! {"access": "no", "vehicle": "yes"}),
            Restriction::Allow,
        );
        assert_eq!(
            resolve(&tags! {"access": "yes", "vehicle": "no"}),
            Restriction::Deny,
        );
        assert_eq!(
            resolve(&tags! {"access": "no", "vehicle": "no", "bicycle": "permissive"}),
            Restriction::Allow,
        );
        assert_eq!(
            resolve(&tags! {"access": "yes", "vehicle": "yes", "bicycle": "no"}),
            Restriction::Deny,
        );
    }

    #[test]
    fn present_key_with_unknown_value_blocks_less_specific_keys() {
        assert_eq!(
            resolve(&tags! {"access": "no", "vehicle": "unknown"}),
            Restriction::NoMatch,
        );
        assert_eq!(
            resolve(&tags! {"access": "yes", "bicycle": "customers"}),
            Restriction::NoMatch,
        );
    }

    #[test]
    fn empty_key_is_missing() {
        assert_eq!(
            resolve(&tags! {"access": "no", "vehicle": ""}),
            Restriction::Deny,
        );
    }

    #[test]
    fn multiple_values() {
        assert_eq!(resolve(&tags! {"access": "customers;no"}), Restriction::Deny);
        assert_eq!(resolve(&tags! {"access": "yes;no"}), Restriction::Allow);
        assert_eq!(resolve(&tags! {"access": "no;yes"}), Restriction::Deny);
        assert_eq!(resolve(&tags! {"access": ";;"}), Restriction::NoMatch);
        assert_eq!(resolve(&tags! {"access": ";designated"}), Restriction::Allow);
    }

    #[test]
    fn private() {
        assert_eq!(resolve(&tags! {"access": "private"}), Restriction::Deny);

        let profile = BICYCLE_PROFILE.with_options(&Options {
            block_private: false,
            ..Options::default()
        });
        assert_eq!(
            resolve_restrictions(&tags! {"access": "private"}, &profile),
            Restriction::Allow,
        );
    }
}
