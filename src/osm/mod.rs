// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

mod barrier;
mod direction;
mod ferry;
mod hierarchy;
mod parser;
mod profile;
mod way;

pub use barrier::is_barrier;
pub use direction::{resolve_directions, ONEWAY_BACKWARD, ONEWAY_FORWARD, OPPOSITE_LANES};
pub use ferry::{is_ferry, FERRY_ROUTES};
pub use hierarchy::{resolve_restrictions, Restriction};
pub use parser::{AccessParser, Way};
pub use profile::{Options, OptionsError, Profile, BICYCLE_PROFILE};
pub use way::{classify_way, WayAccess};
