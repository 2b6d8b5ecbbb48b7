//! Registry audit: checks on unit-definition data that are too global to
//! run per registration call.

use std::collections::HashMap;

use rayon::prelude::*;
use uc_core::UnitId;

use crate::error::GraphError;
use crate::registry::Registry;
use crate::unit::Quantity;

impl Registry {
    /// Report data-definition problems: names claimed by more than one unit,
    /// and quantities whose units are not all mutually convertible.
    ///
    /// An empty result means every same-quantity conversion resolves.
    pub fn audit(&self) -> Vec<GraphError> {
        let mut issues = self.name_collisions();
        issues.extend(self.disconnected_quantities());
        issues
    }

    /// Names (exact, case-sensitive) that appear in the name sets of two
    /// different units. The first owner in `all_units` order is reported.
    pub fn name_collisions(&self) -> Vec<GraphError> {
        let mut owners: HashMap<&str, UnitId> = HashMap::new();
        let mut issues = Vec::new();

        for unit in self.all_units() {
            for name in unit.names() {
                match owners.get(name) {
                    Some(&owner) if owner != unit.id => {
                        issues.push(GraphError::NameCollision {
                            name: name.to_owned(),
                            first: self.name_of(owner),
                            second: unit.name.clone(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        owners.insert(name, unit.id);
                    }
                }
            }
        }
        issues
    }

    /// One issue per unit that cannot be converted to and from the first
    /// unit of its quantity using same-quantity edges only.
    pub fn disconnected_quantities(&self) -> Vec<GraphError> {
        let predecessors = self.predecessors();
        self.quantities()
            .par_iter()
            .flat_map_iter(|q| self.check_quantity(q, &predecessors))
            .collect()
    }

    fn check_quantity(&self, quantity: &Quantity, predecessors: &[Vec<UnitId>]) -> Vec<GraphError> {
        let members: Vec<UnitId> = self.units_of(quantity.id).map(|u| u.id).collect();
        let Some(&root) = members.first() else {
            return Vec::new();
        };

        let forward = self.reach(root, quantity, |u| {
            self.graph().neighbors(u).map(|e| e.to).collect()
        });
        let backward = self.reach(root, quantity, |u| predecessors[u.slot()].clone());

        members
            .iter()
            .filter(|u| !forward[u.slot()] || !backward[u.slot()])
            .map(|&u| GraphError::DisconnectedQuantity {
                quantity: quantity.name.clone(),
                root: self.name_of(root),
                unit: self.name_of(u),
            })
            .collect()
    }

    /// Units of `quantity` reachable from `root` via `next`.
    fn reach<F>(&self, root: UnitId, quantity: &Quantity, next: F) -> Vec<bool>
    where
        F: Fn(UnitId) -> Vec<UnitId>,
    {
        let mut seen = vec![false; self.len()];
        let mut stack = vec![root];
        seen[root.slot()] = true;

        while let Some(u) = stack.pop() {
            for v in next(u) {
                let same_quantity = self.unit(v).is_some_and(|unit| unit.quantity == quantity.id);
                if same_quantity && !seen[v.slot()] {
                    seen[v.slot()] = true;
                    stack.push(v);
                }
            }
        }
        seen
    }

    fn predecessors(&self) -> Vec<Vec<UnitId>> {
        let mut preds = vec![Vec::new(); self.len()];
        for edge in self.graph().edges() {
            preds[edge.to.slot()].push(edge.from);
        }
        preds
    }

    fn name_of(&self, id: UnitId) -> String {
        self.unit(id).map(|u| u.name.clone()).unwrap_or_default()
    }
}
