//! Shortest-path resolution over the conversion graph.
//!
//! Every edge application can round, so the resolver looks for the path
//! with the fewest edges: a breadth-first search from the source unit,
//! expanding outgoing edges in registration order. Units are marked when
//! enqueued, which bounds the search on cyclic graphs and makes the first
//! discovery of the target a shortest one.

use std::collections::VecDeque;

use tracing::{debug, trace};
use uc_core::{Real, UcError, UcResult, UnitId};

use crate::graph::Edge;
use crate::registry::Registry;

/// Ordered edges leading from a source unit to a target unit.
#[derive(Debug, Clone, Default)]
pub struct ConversionPath<'a> {
    edges: Vec<&'a Edge>,
}

impl<'a> ConversionPath<'a> {
    /// The identity path.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn edges(&self) -> &[&'a Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Units visited along the path, excluding the source.
    pub fn hops(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.edges.iter().map(|e| e.to)
    }

    /// Apply every edge in order.
    pub fn apply(&self, x: Real) -> Real {
        self.edges.iter().fold(x, |acc, edge| edge.apply(acc))
    }
}

/// Fixed-size visited set over the unit arena.
struct VisitedSet {
    words: Vec<u64>,
}

impl VisitedSet {
    fn with_capacity(bits: usize) -> Self {
        Self {
            words: vec![0; bits.div_ceil(64)],
        }
    }

    /// Mark `slot`; returns false if it was already marked.
    fn insert(&mut self, slot: usize) -> bool {
        let (word, bit) = (slot / 64, 1u64 << (slot % 64));
        let fresh = self.words[word] & bit == 0;
        self.words[word] |= bit;
        fresh
    }
}

impl Registry {
    /// Find the shortest chain of conversions from `from` to `to`.
    ///
    /// Ties between equally short paths go to the edges registered first.
    pub fn resolve(&self, from: UnitId, to: UnitId) -> UcResult<ConversionPath<'_>> {
        let source = self.checked_unit(from)?;
        let target = self.checked_unit(to)?;

        if from == to {
            return Ok(ConversionPath::empty());
        }

        let graph = self.graph();
        let mut visited = VisitedSet::with_capacity(self.len());
        // Edge index through which each unit was first reached.
        let mut via: Vec<Option<usize>> = vec![None; self.len()];
        let mut queue = VecDeque::new();

        visited.insert(from.slot());
        queue.push_back(from);

        while let Some(unit) = queue.pop_front() {
            trace!(unit = %unit, "expand");
            for &edge_idx in graph.neighbor_indices(unit) {
                let next = graph.edges()[edge_idx].to;
                if !visited.insert(next.slot()) {
                    continue;
                }
                via[next.slot()] = Some(edge_idx);
                if next == to {
                    let path = self.walk_back(&via, from, to);
                    debug!(
                        from = %source.name,
                        to = %target.name,
                        edges = path.len(),
                        "resolved conversion"
                    );
                    return Ok(path);
                }
                queue.push_back(next);
            }
        }

        debug!(from = %source.name, to = %target.name, "no conversion path");
        Err(UcError::NoConversionPath {
            from: source.name.clone(),
            to: target.name.clone(),
        })
    }

    /// Rebuild the path by following `via` from the target to the source.
    fn walk_back(&self, via: &[Option<usize>], from: UnitId, to: UnitId) -> ConversionPath<'_> {
        let edges = self.graph().edges();
        let mut path = Vec::new();
        let mut cursor = to;
        while cursor != from {
            // Every unit on the discovered chain was reached through an edge.
            let Some(idx) = via[cursor.slot()] else {
                break;
            };
            let edge = &edges[idx];
            path.push(edge);
            cursor = edge.from;
        }
        path.reverse();
        ConversionPath { edges: path }
    }
}
