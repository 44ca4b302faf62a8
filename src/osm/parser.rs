// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use super::{classify_way, is_barrier, resolve_directions, Profile, WayAccess};
use crate::{EdgeFlags, Tags};

/// Represents an [OSM way](https://wiki.openstreetmap.org/wiki/Way), or a part of it,
/// which is about to become a graph edge.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Way {
    pub id: i64,
    pub tags: Tags,

    /// Tags of the nodes of this way. Only consulted for [Way::barrier_edge]s,
    /// for which the first node is the represented barrier.
    pub node_tags: Vec<Tags>,

    /// Set if this way is a synthesized edge representing a barrier node.
    pub barrier_edge: bool,
}

impl Way {
    pub fn new(id: i64, tags: Tags) -> Self {
        Self {
            id,
            tags,
            ..Self::default()
        }
    }

    /// Creates a synthesized edge representing the barrier node with given tags.
    pub fn barrier_edge(id: i64, tags: Tags, barrier_node: Tags) -> Self {
        Self {
            id,
            tags,
            node_tags: vec![barrier_node],
            barrier_edge: true,
        }
    }
}

/// Writes the access flags of ways into edge attribute storage, as described by a [Profile].
///
/// The parser holds no mutable state and may be shared between threads,
/// as long as every edge is only handled once.
#[derive(Debug, Clone, Copy)]
pub struct AccessParser<'a> {
    profile: &'a Profile<'a>,
}

impl<'a> AccessParser<'a> {
    pub fn new(profile: &'a Profile<'a>) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &'a Profile<'a> {
        self.profile
    }

    /// Classifies a way, see [classify_way].
    pub fn access(&self, way: &Way) -> WayAccess {
        classify_way(&way.tags, self.profile)
    }

    /// Classifies a way and writes its forward/backward access into `access` at `edge_id`.
    ///
    /// Nothing is written for skipped ways. Ferries are accessible in both directions;
    /// other ways follow [resolve_directions], with the roundabout flag read from
    /// the forward direction of `roundabout`. Afterwards, barrier edges with a blocking
    /// barrier node (see [is_barrier]) lose access in both directions.
    pub fn handle_way_tags<A: EdgeFlags, R: EdgeFlags>(
        &self,
        edge_id: usize,
        access: &mut A,
        roundabout: &R,
        way: &Way,
    ) -> WayAccess {
        let outcome = self.access(way);
        if outcome.can_skip() {
            log::trace!("way {} skipped", way.id);
            return outcome;
        }

        if outcome.is_ferry() {
            access.set_bool(false, edge_id, true);
            access.set_bool(true, edge_id, true);
        } else {
            let is_roundabout = roundabout.get_bool(false, edge_id);
            let (forward, backward) = resolve_directions(&way.tags, is_roundabout, self.profile);
            debug_assert!(forward || backward, "way {} inaccessible", way.id);

            access.set_bool(false, edge_id, forward);
            access.set_bool(true, edge_id, backward);
        }

        if way.barrier_edge {
            self.handle_barrier_edge(edge_id, access, way);
        }

        outcome
    }

    fn handle_barrier_edge<A: EdgeFlags>(&self, edge_id: usize, access: &mut A, way: &Way) {
        let Some(node) = way.node_tags.first() else {
            log::warn!("barrier edge of way {} has no node tags", way.id);
            return;
        };

        if is_barrier(node, self.profile) {
            log::trace!("way {} blocked by barrier", way.id);
            access.set_bool(false, edge_id, false);
            access.set_bool(true, edge_id, false);
        }
    }
}
