//! Volume flow rate: cubic lengths per second, minute, hour and day.

use uc_core::{QuantityId, Real, UnitId};
use uc_graph::{GraphError, RegistryBuilder, UnitOptions, UnitSystem};

pub const QUANTITY: &str = "volume flow rate";

struct Volume {
    name: &'static str,
    /// British spelling, registered as an alias.
    alt_name: Option<&'static str>,
    symbol: &'static str,
    /// Symbol with a plain `3` instead of `³`.
    ascii: Option<&'static str>,
    /// How many of this volume make one cubic meter.
    per_cubic_meter: Real,
    system: Option<UnitSystem>,
}

struct Period {
    name: &'static str,
    symbol: &'static str,
    /// Letter used by the `m3s-1` style symbols.
    letter: char,
    seconds: Real,
}

const INCH: Real = 0.0254;
const FOOT: Real = 0.3048;
const YARD: Real = 0.9144;

const VOLUMES: [Volume; 6] = [
    Volume {
        name: "cubic meter",
        alt_name: Some("cubic metre"),
        symbol: "m³",
        ascii: Some("m3"),
        per_cubic_meter: 1.0,
        system: Some(UnitSystem::Si),
    },
    Volume {
        name: "cubic decimeter",
        alt_name: Some("cubic decimetre"),
        symbol: "dm³",
        ascii: Some("dm3"),
        per_cubic_meter: 1e3,
        system: Some(UnitSystem::Si),
    },
    Volume {
        name: "cubic centimeter",
        alt_name: Some("cubic centimetre"),
        symbol: "cm³",
        ascii: Some("cm3"),
        per_cubic_meter: 1e6,
        system: Some(UnitSystem::Si),
    },
    Volume {
        name: "cubic inch",
        alt_name: None,
        symbol: "in³",
        ascii: None,
        per_cubic_meter: 1.0 / (INCH * INCH * INCH),
        system: None,
    },
    Volume {
        name: "cubic foot",
        alt_name: None,
        symbol: "ft³",
        ascii: None,
        per_cubic_meter: 1.0 / (FOOT * FOOT * FOOT),
        system: None,
    },
    Volume {
        name: "cubic yard",
        alt_name: None,
        symbol: "yd³",
        ascii: None,
        per_cubic_meter: 1.0 / (YARD * YARD * YARD),
        system: None,
    },
];

const PERIODS: [Period; 4] = [
    Period {
        name: "second",
        symbol: "s",
        letter: 's',
        seconds: 1.0,
    },
    Period {
        name: "minute",
        symbol: "min",
        letter: 'm',
        seconds: 60.0,
    },
    Period {
        name: "hour",
        symbol: "h",
        letter: 'h',
        seconds: 3600.0,
    },
    Period {
        name: "day",
        symbol: "d",
        letter: 'd',
        seconds: 86400.0,
    },
];

/// Register every volume flow rate unit and the conversions between them.
///
/// Cubic meter per second is the hub for the time axis; within each period
/// every other volume hangs off the cubic meter unit.
pub fn register(builder: &mut RegistryBuilder) -> Result<QuantityId, GraphError> {
    let quantity = builder.quantity(QUANTITY)?;

    // ids[v][p]
    let mut ids: Vec<Vec<UnitId>> = Vec::with_capacity(VOLUMES.len());
    for volume in &VOLUMES {
        let mut row = Vec::with_capacity(PERIODS.len());
        for period in &PERIODS {
            let (name, symbol, options) = unit_definition(volume, period);
            row.push(builder.define_unit(name, symbol, quantity, options)?);
        }
        ids.push(row);
    }

    let base = ids[0][0];
    for (p, period) in PERIODS.iter().enumerate().skip(1) {
        builder.define_ratio_conversion(base, ids[0][p], period.seconds)?;
    }

    for (v, volume) in VOLUMES.iter().enumerate().skip(1) {
        for p in 0..PERIODS.len() {
            builder.define_ratio_conversion(ids[0][p], ids[v][p], volume.per_cubic_meter)?;
        }
    }

    Ok(quantity)
}

fn unit_definition(volume: &Volume, period: &Period) -> (String, String, UnitOptions) {
    let name = format!("{} per {}", volume.name, period.name);
    let symbol = format!("{}/{}", volume.symbol, period.symbol);

    let mut options = UnitOptions::new();
    if let Some(alt) = volume.alt_name {
        options = options.aliases([format!("{} per {}", alt, period.name)]);
    }
    if let Some(ascii) = volume.ascii {
        options = options.symbols([
            format!("{}/{}", ascii, period.symbol),
            format!("{}{}-1", ascii, period.letter),
        ]);
    }
    if let Some(system) = volume.system {
        options = options.system(system);
    }

    (name, symbol, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_units_carry_variants() {
        let (name, symbol, options) = unit_definition(&VOLUMES[1], &PERIODS[1]);
        assert_eq!(name, "cubic decimeter per minute");
        assert_eq!(symbol, "dm³/min");
        assert_eq!(options.aliases, ["cubic decimetre per minute"]);
        assert_eq!(options.symbols, ["dm3/min", "dm3m-1"]);
        assert_eq!(options.system, Some(UnitSystem::Si));
    }

    #[test]
    fn customary_units_are_bare() {
        let (name, symbol, options) = unit_definition(&VOLUMES[4], &PERIODS[3]);
        assert_eq!(name, "cubic foot per day");
        assert_eq!(symbol, "ft³/d");
        assert!(options.aliases.is_empty());
        assert!(options.symbols.is_empty());
        assert_eq!(options.system, None);
    }

    #[test]
    fn registers_full_grid() {
        let mut builder = RegistryBuilder::new();
        register(&mut builder).unwrap();
        assert_eq!(builder.unit_count(), VOLUMES.len() * PERIODS.len());
        // 3 time edges + 5 volumes x 4 periods, each in both directions
        assert_eq!(builder.edge_count(), 2 * (3 + 5 * 4));
    }

    #[test]
    fn registering_twice_fails() {
        let mut builder = RegistryBuilder::new();
        register(&mut builder).unwrap();
        assert!(matches!(
            register(&mut builder),
            Err(GraphError::DuplicateUnit { .. })
        ));
    }
}
