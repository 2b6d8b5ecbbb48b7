//! uc-graph: unit registry and conversion graph for unitconv.
//!
//! Provides:
//! - Unit and quantity records
//! - Incremental registry builder with ratio and custom conversions
//! - Shortest-path conversion resolution and value conversion
//! - Name/symbol/alias lookup
//! - Audit of unit-definition data
//!
//! # Example
//!
//! ```
//! use uc_graph::{RegistryBuilder, UnitOptions};
//!
//! let mut builder = RegistryBuilder::new();
//! let time = builder.quantity("time").unwrap();
//! let s = builder.define_unit("second", "s", time, UnitOptions::new()).unwrap();
//! let h = builder.define_unit("hour", "h", time, UnitOptions::new()).unwrap();
//! builder.define_ratio_conversion(h, s, 3600.0).unwrap();
//! let registry = builder.build();
//!
//! let hour = registry.find("hours").unwrap();
//! assert_eq!(registry.convert(2.0, hour, s).unwrap().magnitude, 7200.0);
//! ```

pub mod builder;
pub mod convert;
pub mod error;
pub mod graph;
pub mod lookup;
pub mod registry;
pub mod resolve;
pub mod unit;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::RegistryBuilder;
pub use convert::Value;
pub use error::GraphError;
pub use graph::{ConversionGraph, Edge, Transform};
pub use registry::Registry;
pub use resolve::ConversionPath;
pub use unit::{Quantity, Unit, UnitOptions, UnitSystem};
