// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::str::FromStr;

/// Describes how OSM access tags are interpreted for a single vehicle class.
///
/// A profile is plain data: every list is consulted by the shared algorithms in
/// [classify_way](crate::osm::classify_way), [resolve_directions](crate::osm::resolve_directions)
/// and [is_barrier](crate::osm::is_barrier), so the same code serves any vehicle class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile<'a> {
    /// Human readable name of the vehicle class,
    /// customary the most specific [access tag](https://wiki.openstreetmap.org/wiki/Key:access).
    pub name: &'a str,

    /// Array of OSM [access tags](https://wiki.openstreetmap.org/wiki/Key:access#Land-based_transportation)
    /// in order from **most to least** specific. Only the first present key is ever considered,
    /// so the order is part of the profile's meaning.
    pub restriction_keys: &'a [&'a str],

    /// Access values which explicitly deny usage of a way or node.
    ///
    /// `private` must not be listed here, see [Profile::block_private].
    pub restricted_values: &'a [&'a str],

    /// Access values which explicitly permit usage of a way or node.
    ///
    /// `private` must not be listed here, see [Profile::block_private].
    pub intended_values: &'a [&'a str],

    /// Values of the `highway` tag which this vehicle class may use at all.
    pub allowed_highways: &'a [&'a str],

    /// Values of the `barrier` tag on nodes which block passage, unless explicitly overridden.
    pub barriers: &'a [&'a str],

    /// Value of the vehicle class tag which marks a way usable only
    /// when walking beside the vehicle (e.g. `bicycle=dismount`).
    pub dismount_value: &'a str,

    /// Vehicle-class specific one-way tag, e.g. `oneway:bicycle`.
    pub oneway_key: &'a str,

    /// Vehicle-class specific forward access tag, e.g. `bicycle:forward`.
    pub forward_key: &'a str,

    /// Vehicle-class specific backward access tag, e.g. `bicycle:backward`.
    pub backward_key: &'a str,

    /// Treat [fords](https://wiki.openstreetmap.org/wiki/Key:ford) as impassable,
    /// unless the vehicle class is explicitly allowed.
    pub block_fords: bool,

    /// Treat `private` as a restricted value (if true), or an intended value (if false).
    pub block_private: bool,
}

impl<'a> Profile<'a> {
    /// Returns the most specific restriction key, e.g. `bicycle`.
    pub fn vehicle_key(&self) -> &'a str {
        self.restriction_keys.first().copied().unwrap_or(self.name)
    }

    /// Checks if a single access value explicitly denies usage.
    pub fn is_restricted(&self, value: &str) -> bool {
        if value == "private" {
            self.block_private
        } else {
            self.restricted_values.contains(&value)
        }
    }

    /// Checks if a single access value explicitly permits usage.
    pub fn is_intended(&self, value: &str) -> bool {
        if value == "private" {
            !self.block_private
        } else {
            self.intended_values.contains(&value)
        }
    }

    pub fn is_allowed_highway(&self, value: &str) -> bool {
        self.allowed_highways.contains(&value)
    }

    /// Returns a copy of this profile with the provided [Options] applied.
    pub const fn with_options(self, options: &Options) -> Self {
        Self {
            block_fords: options.block_fords,
            block_private: options.block_private,
            ..self
        }
    }

    /// Returns the [BICYCLE_PROFILE] with the provided [Options] applied.
    pub const fn bicycle(options: &Options) -> Profile<'static> {
        BICYCLE_PROFILE.with_options(options)
    }
}

/// Construction-time switches of a [Profile].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// See [Profile::block_fords]. Defaults to false.
    pub block_fords: bool,

    /// See [Profile::block_private]. Defaults to true.
    pub block_private: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            block_fords: false,
            block_private: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("missing '=' in option: {0:?}")]
    MissingSeparator(String),

    #[error("invalid boolean for {key}: {value:?}")]
    InvalidBool { key: String, value: String },
}

impl FromStr for Options {
    type Err = OptionsError;

    /// Parses options in the `key=value|key=value` form, e.g. `block_fords=true|block_private=false`.
    /// Options which are not provided keep their default values; unknown options are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut options = Options::default();

        for pair in s.split('|').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| OptionsError::MissingSeparator(pair.to_string()))?;
            let (key, value) = (key.trim(), value.trim());

            match key {
                "block_fords" => options.block_fords = parse_bool(key, value)?,
                "block_private" => options.block_private = parse_bool(key, value)?,
                _ => log::warn!("ignoring unknown option: {}", key),
            }
        }

        Ok(options)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, OptionsError> {
    match value {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(OptionsError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// [Profile] for bicycles with default [Options], following the
/// [land-based access hierarchy](https://wiki.openstreetmap.org/wiki/Key:access#Land-based_transportation).
pub const BICYCLE_PROFILE: Profile<'static> = Profile {
    name: "bicycle",
    restriction_keys: &["bicycle", "vehicle", "access"],
    restricted_values: &["no", "agricultural", "forestry", "delivery"],
    intended_values: &["yes", "designated", "official", "permissive", "destination"],
    allowed_highways: &[
        "living_street",
        "steps",
        "cycleway",
        "path",
        "footway",
        "platform",
        "pedestrian",
        "track",
        "service",
        "residential",
        "unclassified",
        "road",
        "bridleway",
        "motorway",
        "motorway_link",
        "trunk",
        "trunk_link",
        "primary",
        "primary_link",
        "secondary",
        "secondary_link",
        "tertiary",
        "tertiary_link",
    ],
    barriers: &["fence", "kissing_gate", "stile", "turnstile", "jersey_barrier"],
    dismount_value: "dismount",
    oneway_key: "oneway:bicycle",
    forward_key: "bicycle:forward",
    backward_key: "bicycle:backward",
    block_fords: false,
    block_private: true,
};
