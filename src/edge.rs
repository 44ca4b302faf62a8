// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

/// Per-edge, per-direction boolean attribute storage.
///
/// `reverse == false` addresses the direction along the stored geometry of the edge
/// (forward), `reverse == true` the opposite one (backward).
pub trait EdgeFlags {
    fn get_bool(&self, reverse: bool, edge_id: usize) -> bool;
    fn set_bool(&mut self, reverse: bool, edge_id: usize, value: bool);
}

/// Bit-packed, in-memory [EdgeFlags] implementation, using two bits per edge.
///
/// The array grows on writes; flags of never-written edges read as `false`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FlagArray(Vec<u8>);

impl FlagArray {
    const EDGES_PER_BYTE: usize = 4;

    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an array with space preallocated for `edges` edges.
    pub fn with_capacity(edges: usize) -> Self {
        Self(Vec::with_capacity(edges.div_ceil(Self::EDGES_PER_BYTE)))
    }

    /// Returns the (forward, backward) pair of flags for an edge.
    pub fn get(&self, edge_id: usize) -> (bool, bool) {
        (self.get_bool(false, edge_id), self.get_bool(true, edge_id))
    }

    fn position(reverse: bool, edge_id: usize) -> (usize, u8) {
        let byte = edge_id / Self::EDGES_PER_BYTE;
        let shift = (edge_id % Self::EDGES_PER_BYTE) * 2 + reverse as usize;
        (byte, 1 << shift)
    }
}

impl EdgeFlags for FlagArray {
    fn get_bool(&self, reverse: bool, edge_id: usize) -> bool {
        let (byte, mask) = Self::position(reverse, edge_id);
        self.0.get(byte).is_some_and(|&b| b & mask != 0)
    }

    fn set_bool(&mut self, reverse: bool, edge_id: usize, value: bool) {
        let (byte, mask) = Self::position(reverse, edge_id);
        if byte >= self.0.len() {
            if !value {
                return;
            }
            self.0.resize(byte + 1, 0);
        }

        if value {
            self.0[byte] |= mask;
        } else {
            self.0[byte] &= !mask;
        }
    }
}
