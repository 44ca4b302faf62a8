// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Access classification of [OpenStreetMap](https://www.openstreetmap.org/) ways
//! for bicycle routing graphs.
//!
//! Given the tags of a way, it decides whether the way is usable by a vehicle class
//! ([classify_way](osm::classify_way)), and in which directions
//! ([resolve_directions](osm::resolve_directions)). The results are written as
//! a pair of forward/backward flags into any [EdgeFlags] store by an [AccessParser](osm::AccessParser).
//! Interpretation of tags is customizable via [profiles](crate::osm::Profile).
//!
//! # Example
//!
//! ```
//! use wayaccess::osm::{AccessParser, Options, Profile, Way, WayAccess};
//! use wayaccess::{FlagArray, Tags};
//!
//! let profile = Profile::bicycle(&Options::default());
//! let parser = AccessParser::new(&profile);
//!
//! let way = Way::new(1, Tags::from_iter([("highway", "residential"), ("oneway", "yes")]));
//! let mut access = FlagArray::new();
//! let roundabout = FlagArray::new();
//!
//! let outcome = parser.handle_way_tags(0, &mut access, &roundabout, &way);
//! assert_eq!(outcome, WayAccess::Routable);
//! assert_eq!(access.get(0), (true, false));
//! ```

mod edge;
pub mod osm;
mod tags;

pub use edge::{EdgeFlags, FlagArray};
pub use tags::{Tag, TagParseError, Tags, VALUE_DELIMITER};
