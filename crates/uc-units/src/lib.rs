//! uc-units: built-in unit tables for unitconv.
//!
//! Each quantity module registers its units and ratio conversions on a
//! `RegistryBuilder`. `registry()` exposes the process-wide registry built
//! from every table.
//!
//! ```
//! let units = uc_units::registry();
//! let from = units.find("m3/s").unwrap();
//! let to = units.find("cubic meter per hour").unwrap();
//! assert_eq!(units.convert(1.0, from, to).unwrap().magnitude, 3600.0);
//! ```

use std::sync::LazyLock;

use tracing::debug;
use uc_core::UcResult;
use uc_graph::{GraphError, Registry, RegistryBuilder};

pub mod volume_flow_rate;

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| match build_registry() {
    Ok(registry) => registry,
    // Corrupt static tables would give wrong answers, not errors; refuse to start.
    Err(err) => panic!("built-in unit tables are invalid: {err}"),
});

/// Register every built-in quantity.
pub fn register_all(builder: &mut RegistryBuilder) -> Result<(), GraphError> {
    volume_flow_rate::register(builder)?;
    Ok(())
}

/// Build and audit a fresh registry from the built-in tables.
pub fn build_registry() -> UcResult<Registry> {
    let mut builder = RegistryBuilder::new();
    register_all(&mut builder)?;
    let registry = builder.build_audited()?;
    debug!(units = registry.len(), "built-in registry ready");
    Ok(registry)
}

/// The process-wide registry of built-in units, built on first use.
///
/// # Panics
///
/// Panics on first use if the built-in tables fail registration or audit.
pub fn registry() -> &'static Registry {
    &REGISTRY
}
