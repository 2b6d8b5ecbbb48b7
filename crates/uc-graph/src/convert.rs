//! Composing a resolved path into a converted value.

use uc_core::{Real, UcResult, UnitId};

use crate::registry::Registry;

/// A magnitude expressed in a particular unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Value {
    pub magnitude: Real,
    pub unit: UnitId,
}

impl Value {
    pub fn new(magnitude: Real, unit: UnitId) -> Self {
        Self { magnitude, unit }
    }

    /// Re-express this value in `to`.
    pub fn convert_to(&self, registry: &Registry, to: UnitId) -> UcResult<Value> {
        registry.convert(self.magnitude, self.unit, to)
    }
}

impl Registry {
    /// Convert `x` from one unit to another along the shortest conversion path.
    pub fn convert(&self, x: Real, from: UnitId, to: UnitId) -> UcResult<Value> {
        let path = self.resolve(from, to)?;
        Ok(Value::new(path.apply(x), to))
    }

    /// Like `convert`, for callers that already know the units are
    /// convertible.
    ///
    /// # Panics
    ///
    /// Panics if no conversion path exists or either unit is unknown.
    pub fn convert_or_abort(&self, x: Real, from: UnitId, to: UnitId) -> Value {
        match self.convert(x, from, to) {
            Ok(value) => value,
            Err(err) => panic!("conversion failed: {err}"),
        }
    }
}
