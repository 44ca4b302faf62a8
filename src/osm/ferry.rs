// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::Tags;

/// Values of the `route` tag describing ferry-like connections,
/// which need a different speed model than regular ways.
pub const FERRY_ROUTES: &[&str] = &["ferry", "shuttle_train"];

/// Checks if a way represents a [ferry route](https://wiki.openstreetmap.org/wiki/Tag:route%3Dferry).
pub fn is_ferry(tags: &Tags) -> bool {
    tags.has_tag_in("route", FERRY_ROUTES) && !tags.has_tag("ferry", "no")
}
