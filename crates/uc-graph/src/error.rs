//! Registration and audit error types.

use uc_core::{QuantityId, UcError, UnitId};

/// Errors raised while defining units and conversions, or found by an audit.
///
/// All of these point at corrupt unit-definition data, never at user input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// A unit or quantity was given an empty name.
    #[error("{what} name must not be empty")]
    EmptyName { what: &'static str },

    /// Two units share the same canonical name.
    #[error("unit \"{name}\" is already registered")]
    DuplicateUnit { name: String },

    /// A conversion refers to a unit this builder never issued.
    #[error("unit id {unit} is not registered")]
    InvalidUnitRef { unit: UnitId },

    /// A unit refers to a quantity this builder never issued.
    #[error("quantity id {quantity} is not registered")]
    InvalidQuantityRef { quantity: QuantityId },

    /// A conversion from a unit to itself.
    #[error("conversion from \"{unit}\" to itself")]
    SelfConversion { unit: String },

    /// The directed pair already has an edge.
    #[error("conversion from \"{from}\" to \"{to}\" is already registered")]
    DuplicateEdge { from: String, to: String },

    /// Ratio is zero, negative zero or not finite.
    #[error("invalid ratio {ratio} for conversion \"{from}\" -> \"{to}\"")]
    InvalidRatio { from: String, to: String, ratio: f64 },

    /// Some name in two different units' name sets is identical.
    #[error("name \"{name}\" is shared by \"{first}\" and \"{second}\"")]
    NameCollision {
        name: String,
        first: String,
        second: String,
    },

    /// A quantity's units do not form one connected conversion graph.
    #[error("quantity \"{quantity}\": \"{unit}\" is not connected to \"{root}\"")]
    DisconnectedQuantity {
        quantity: String,
        root: String,
        unit: String,
    },
}

impl From<GraphError> for UcError {
    fn from(err: GraphError) -> Self {
        UcError::Registration(err.to_string())
    }
}
