//! Conversion graph data structures.

use std::fmt;
use std::sync::Arc;

use uc_core::{Real, UnitId};

/// Numeric transform carried by one edge.
///
/// Ratio conversions use `Scale`/`Divide` so the inverse divides by the
/// registered ratio instead of multiplying by its reciprocal.
#[derive(Clone)]
pub enum Transform {
    /// `x * ratio`
    Scale(Real),
    /// `x / ratio`
    Divide(Real),
    /// Any other mapping, e.g. an affine temperature scale.
    Custom(Arc<dyn Fn(Real) -> Real + Send + Sync>),
}

impl Transform {
    #[inline]
    pub fn apply(&self, x: Real) -> Real {
        match self {
            Transform::Scale(r) => x * r,
            Transform::Divide(r) => x / r,
            Transform::Custom(f) => f(x),
        }
    }

    pub fn is_linear(&self) -> bool {
        !matches!(self, Transform::Custom(_))
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Scale(r) => write!(f, "Scale({r})"),
            Transform::Divide(r) => write!(f, "Divide({r})"),
            Transform::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// One elementary, directed conversion step.
#[derive(Debug, Clone)]
pub struct Edge {
    pub from: UnitId,
    pub to: UnitId,
    pub transform: Transform,
}

impl Edge {
    #[inline]
    pub fn apply(&self, x: Real) -> Real {
        self.transform.apply(x)
    }
}

/// Frozen conversion graph.
///
/// Edges live in one vector in registration order; outgoing adjacency is
/// stored compactly as offsets into a flat list of edge indices.
#[derive(Debug, Clone, Default)]
pub struct ConversionGraph {
    pub(crate) edges: Vec<Edge>,

    /// Unit i's outgoing edges are `unit_edges[unit_edge_offsets[i]..unit_edge_offsets[i+1]]`.
    pub(crate) unit_edge_offsets: Vec<usize>,

    /// Flat list of edge indices, grouped by source unit, registration order within a group.
    pub(crate) unit_edges: Vec<usize>,
}

impl ConversionGraph {
    /// Freeze `edges` over an arena of `unit_count` units.
    pub(crate) fn from_edges(unit_count: usize, edges: Vec<Edge>) -> Self {
        let (unit_edge_offsets, unit_edges) = Self::build_adjacency(unit_count, &edges);
        Self {
            edges,
            unit_edge_offsets,
            unit_edges,
        }
    }

    /// Counting sort by source unit; stable, so registration order survives.
    fn build_adjacency(unit_count: usize, edges: &[Edge]) -> (Vec<usize>, Vec<usize>) {
        let mut offsets = vec![0usize; unit_count + 1];
        for edge in edges {
            offsets[edge.from.slot() + 1] += 1;
        }
        for i in 0..unit_count {
            offsets[i + 1] += offsets[i];
        }

        let mut cursor = offsets.clone();
        let mut flat = vec![0usize; edges.len()];
        for (idx, edge) in edges.iter().enumerate() {
            let slot = &mut cursor[edge.from.slot()];
            flat[*slot] = idx;
            *slot += 1;
        }

        (offsets, flat)
    }

    /// Return all edges in registration order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, idx: usize) -> Option<&Edge> {
        self.edges.get(idx)
    }

    pub fn unit_count(&self) -> usize {
        self.unit_edge_offsets.len().saturating_sub(1)
    }

    /// Indices of the outgoing edges of `unit`, in registration order.
    pub fn neighbor_indices(&self, unit: UnitId) -> &[usize] {
        let idx = unit.slot();
        if idx >= self.unit_count() {
            return &[];
        }
        let start = self.unit_edge_offsets[idx];
        let end = self.unit_edge_offsets[idx + 1];
        &self.unit_edges[start..end]
    }

    /// Outgoing edges of `unit`, in registration order.
    pub fn neighbors(&self, unit: UnitId) -> impl Iterator<Item = &Edge> {
        self.neighbor_indices(unit)
            .iter()
            .map(move |&idx| &self.edges[idx])
    }

    /// The edge registered for the directed pair, if any.
    pub fn edge_between(&self, from: UnitId, to: UnitId) -> Option<&Edge> {
        self.neighbors(from).find(|e| e.to == to)
    }
}
