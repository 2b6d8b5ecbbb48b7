//! Incremental registry builder.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, trace, warn};
use uc_core::{QuantityId, Real, UnitId};

use crate::error::GraphError;
use crate::graph::{ConversionGraph, Edge, Transform};
use crate::registry::Registry;
use crate::unit::{Quantity, Unit, UnitOptions};

/// Builder for the unit registry and its conversion graph.
///
/// Unit-definition tables call `define_unit` and the `define_*_conversion`
/// helpers, then `build()` freezes everything into an immutable `Registry`.
/// Every method validates its input before touching any state, so a failed
/// call leaves the builder unchanged.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    quantities: Vec<Quantity>,
    quantity_ids: HashMap<String, QuantityId>,
    units: Vec<Unit>,
    unit_ids: HashMap<String, UnitId>,
    edges: Vec<Edge>,
    edge_pairs: HashSet<(UnitId, UnitId)>,
}

impl RegistryBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for the quantity `name`, creating it on first use.
    pub fn quantity(&mut self, name: impl Into<String>) -> Result<QuantityId, GraphError> {
        let name = name.into();
        if name.is_empty() {
            return Err(GraphError::EmptyName { what: "quantity" });
        }
        if let Some(&id) = self.quantity_ids.get(&name) {
            return Ok(id);
        }

        let id = QuantityId::from_index(self.quantities.len() as u32);
        self.quantity_ids.insert(name.clone(), id);
        self.quantities.push(Quantity { id, name });
        Ok(id)
    }

    /// Register a unit and return its id.
    pub fn define_unit(
        &mut self,
        name: impl Into<String>,
        symbol: impl Into<String>,
        quantity: QuantityId,
        options: UnitOptions,
    ) -> Result<UnitId, GraphError> {
        let name = name.into();
        if name.is_empty() {
            return Err(GraphError::EmptyName { what: "unit" });
        }
        if quantity.slot() >= self.quantities.len() {
            return Err(GraphError::InvalidQuantityRef { quantity });
        }
        if self.unit_ids.contains_key(&name) {
            return Err(GraphError::DuplicateUnit { name });
        }

        let id = UnitId::from_index(self.units.len() as u32);
        trace!(unit = %name, id = %id, "define unit");
        self.unit_ids.insert(name.clone(), id);
        self.units.push(Unit {
            id,
            name,
            symbol: symbol.into(),
            quantity,
            aliases: options.aliases,
            symbols: options.symbols,
            system: options.system,
        });
        Ok(id)
    }

    /// Insert one directed edge.
    pub fn add_edge(
        &mut self,
        from: UnitId,
        to: UnitId,
        transform: Transform,
    ) -> Result<(), GraphError> {
        self.check_pair(from, to)?;
        self.check_free(from, to)?;
        self.push_edge(from, to, transform);
        Ok(())
    }

    /// Register `a -> b` as `x * ratio` and `b -> a` as `x / ratio`.
    ///
    /// Both edges are inserted or neither is.
    pub fn define_ratio_conversion(
        &mut self,
        a: UnitId,
        b: UnitId,
        ratio: Real,
    ) -> Result<(), GraphError> {
        self.check_pair(a, b)?;
        if !ratio.is_finite() || ratio == 0.0 {
            return Err(GraphError::InvalidRatio {
                from: self.name_of(a).to_owned(),
                to: self.name_of(b).to_owned(),
                ratio,
            });
        }
        self.check_free(a, b)?;
        self.check_free(b, a)?;

        self.push_edge(a, b, Transform::Scale(ratio));
        self.push_edge(b, a, Transform::Divide(ratio));
        Ok(())
    }

    /// Register an arbitrary conversion pair: `forward` maps `a` to `b` and
    /// `inverse` maps `b` back to `a`.
    pub fn define_conversion<F, G>(
        &mut self,
        a: UnitId,
        b: UnitId,
        forward: F,
        inverse: G,
    ) -> Result<(), GraphError>
    where
        F: Fn(Real) -> Real + Send + Sync + 'static,
        G: Fn(Real) -> Real + Send + Sync + 'static,
    {
        self.check_pair(a, b)?;
        self.check_free(a, b)?;
        self.check_free(b, a)?;

        self.push_edge(a, b, Transform::Custom(Arc::new(forward)));
        self.push_edge(b, a, Transform::Custom(Arc::new(inverse)));
        Ok(())
    }

    /// Look up a unit defined so far.
    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(id.slot())
    }

    /// Look up a unit by canonical name.
    pub fn unit_named(&self, name: &str) -> Option<UnitId> {
        self.unit_ids.get(name).copied()
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Freeze into an immutable `Registry`.
    pub fn build(self) -> Registry {
        let graph = ConversionGraph::from_edges(self.units.len(), self.edges);
        let registry = Registry::new(self.quantities, self.units, self.unit_ids, graph);
        debug!(
            quantities = registry.quantities().len(),
            units = registry.len(),
            edges = registry.graph().edges().len(),
            "registry built"
        );
        registry
    }

    /// Freeze and run `Registry::audit`, failing on the first issue found.
    pub fn build_audited(self) -> Result<Registry, GraphError> {
        let registry = self.build();
        let mut issues = registry.audit();
        if issues.is_empty() {
            return Ok(registry);
        }
        for issue in &issues {
            warn!(%issue, "registry audit");
        }
        Err(issues.swap_remove(0))
    }

    fn check_unit(&self, id: UnitId) -> Result<(), GraphError> {
        if id.slot() < self.units.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidUnitRef { unit: id })
        }
    }

    fn check_pair(&self, from: UnitId, to: UnitId) -> Result<(), GraphError> {
        self.check_unit(from)?;
        self.check_unit(to)?;
        if from == to {
            return Err(GraphError::SelfConversion {
                unit: self.name_of(from).to_owned(),
            });
        }
        Ok(())
    }

    fn check_free(&self, from: UnitId, to: UnitId) -> Result<(), GraphError> {
        if self.edge_pairs.contains(&(from, to)) {
            return Err(GraphError::DuplicateEdge {
                from: self.name_of(from).to_owned(),
                to: self.name_of(to).to_owned(),
            });
        }
        Ok(())
    }

    fn push_edge(&mut self, from: UnitId, to: UnitId, transform: Transform) {
        trace!(from = %from, to = %to, ?transform, "add edge");
        self.edge_pairs.insert((from, to));
        self.edges.push(Edge {
            from,
            to,
            transform,
        });
    }

    /// Name of an already-checked unit.
    fn name_of(&self, id: UnitId) -> &str {
        self.units
            .get(id.slot())
            .map(|u| u.name.as_str())
            .unwrap_or("<unregistered>")
    }
}
