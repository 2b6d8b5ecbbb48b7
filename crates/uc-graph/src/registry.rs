//! The frozen unit registry.

use std::collections::HashMap;

use uc_core::{QuantityId, UcError, UcResult, UnitId};

use crate::graph::ConversionGraph;
use crate::unit::{Quantity, Unit};

/// Immutable set of units, quantities and the conversion graph between them.
///
/// Built once by `RegistryBuilder::build` and shared read-only afterwards;
/// the registry is `Send + Sync`, so lookups and conversions need no locking.
#[derive(Debug, Clone)]
pub struct Registry {
    quantities: Vec<Quantity>,
    units: Vec<Unit>,
    unit_ids: HashMap<String, UnitId>,

    /// Unit ids ordered by (quantity name, unit name).
    sorted: Vec<UnitId>,

    graph: ConversionGraph,
}

impl Registry {
    pub(crate) fn new(
        quantities: Vec<Quantity>,
        units: Vec<Unit>,
        unit_ids: HashMap<String, UnitId>,
        graph: ConversionGraph,
    ) -> Self {
        let mut sorted: Vec<UnitId> = units.iter().map(|u| u.id).collect();
        sorted.sort_by(|&a, &b| {
            let (ua, ub) = (&units[a.slot()], &units[b.slot()]);
            let qa = &quantities[ua.quantity.slot()].name;
            let qb = &quantities[ub.quantity.slot()].name;
            qa.cmp(qb).then_with(|| ua.name.cmp(&ub.name))
        });

        Self {
            quantities,
            units,
            unit_ids,
            sorted,
            graph,
        }
    }

    /// Number of registered units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// All quantities, in registration order.
    pub fn quantities(&self) -> &[Quantity] {
        &self.quantities
    }

    pub fn quantity(&self, id: QuantityId) -> Option<&Quantity> {
        self.quantities.get(id.slot())
    }

    pub fn quantity_named(&self, name: &str) -> Option<&Quantity> {
        self.quantities.iter().find(|q| q.name == name)
    }

    /// Get a unit by ID (returns None if it was not issued by this registry).
    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(id.slot())
    }

    /// Exact lookup by canonical name only; see `find` for user input.
    pub fn unit_named(&self, name: &str) -> Option<UnitId> {
        self.unit_ids.get(name).copied()
    }

    /// Every unit, ordered by quantity name then unit name.
    pub fn all_units(&self) -> impl Iterator<Item = &Unit> {
        self.sorted.iter().map(move |id| &self.units[id.slot()])
    }

    /// Units of one quantity, in `all_units` order.
    pub fn units_of(&self, quantity: QuantityId) -> impl Iterator<Item = &Unit> {
        self.all_units().filter(move |u| u.quantity == quantity)
    }

    pub fn graph(&self) -> &ConversionGraph {
        &self.graph
    }

    pub(crate) fn checked_unit(&self, id: UnitId) -> UcResult<&Unit> {
        self.unit(id).ok_or(UcError::UnknownUnit { id: id.index() })
    }
}

#[cfg(test)]
mod tests {
    use crate::{RegistryBuilder, UnitOptions};
    use uc_core::Id;

    use super::*;

    #[test]
    fn registry_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
    }

    #[test]
    fn all_units_sorted_by_quantity_then_name() {
        let mut builder = RegistryBuilder::new();
        let time = builder.quantity("time").unwrap();
        let length = builder.quantity("length").unwrap();
        for (name, q) in [
            ("second", time),
            ("meter", length),
            ("hour", time),
            ("foot", length),
        ] {
            builder.define_unit(name, name, q, UnitOptions::new()).unwrap();
        }
        let registry = builder.build();

        let names: Vec<&str> = registry.all_units().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["foot", "meter", "hour", "second"]);

        let times: Vec<&str> = registry.units_of(time).map(|u| u.name.as_str()).collect();
        assert_eq!(times, ["hour", "second"]);
    }

    #[test]
    fn accessors() {
        let mut builder = RegistryBuilder::new();
        let q = builder.quantity("length").unwrap();
        let m = builder.define_unit("meter", "m", q, UnitOptions::new()).unwrap();
        let registry = builder.build();

        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
        assert_eq!(registry.unit_named("meter"), Some(m));
        assert_eq!(registry.quantity(q).map(|q| q.name.as_str()), Some("length"));
        assert_eq!(registry.quantity_named("length").map(|q| q.id), Some(q));

        let bogus = Id::from_index(999);
        assert!(registry.unit(bogus).is_none());
        assert_eq!(
            registry.checked_unit(bogus).unwrap_err(),
            UcError::UnknownUnit { id: 999 }
        );
    }
}
