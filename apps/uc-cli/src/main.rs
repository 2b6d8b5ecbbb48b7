use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::Level;
use uc_core::{UcError, UnitId};
use uc_graph::{Registry, Unit};

#[derive(Parser)]
#[command(name = "uc")]
#[command(about = "unitconv CLI - look up units and convert values", long_about = None)]
struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List known units, sorted by quantity then name
    List {
        /// Only list units of this quantity
        #[arg(short, long)]
        quantity: Option<String>,
    },
    /// Resolve a name, symbol or alias to a unit
    Find {
        /// Name, symbol or alias (plurals accepted)
        name: String,
    },
    /// Convert a value between two units
    Convert {
        /// Value to convert
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Source unit
        from: String,
        /// Target unit
        to: String,
        /// Show the chain of units the conversion goes through
        #[arg(long)]
        path: bool,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Units(#[from] UcError),

    #[error("quantity \"{0}\" not found")]
    UnknownQuantity(String),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Serialize)]
struct UnitReport {
    name: String,
    symbol: String,
    quantity: String,
    aliases: Vec<String>,
    symbols: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
}

#[derive(Debug, Serialize)]
struct ConversionReport {
    input: f64,
    from: String,
    from_symbol: String,
    to: String,
    to_symbol: String,
    magnitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<String>>,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let registry = uc_units::registry();

    match cli.command {
        Commands::List { quantity } => cmd_list(registry, quantity.as_deref(), cli.json),
        Commands::Find { name } => cmd_find(registry, &name, cli.json),
        Commands::Convert {
            value,
            from,
            to,
            path,
        } => cmd_convert(registry, value, &from, &to, path, cli.json),
    }
}

fn cmd_list(registry: &Registry, quantity: Option<&str>, json: bool) -> CliResult<()> {
    let reports = list_units(registry, quantity)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    let mut current = "";
    for report in &reports {
        if report.quantity != current {
            println!("{}:", report.quantity);
            current = &report.quantity;
        }
        println!("  {:<32} {}", report.name, report.symbol);
    }
    Ok(())
}

fn cmd_find(registry: &Registry, name: &str, json: bool) -> CliResult<()> {
    let id = registry.find(name)?;
    let report = unit_report(registry, id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{} ({})", report.name, report.symbol);
        println!("  quantity: {}", report.quantity);
        if let Some(system) = &report.system {
            println!("  system:   {}", system);
        }
        if !report.aliases.is_empty() {
            println!("  aliases:  {}", report.aliases.join(", "));
        }
        if !report.symbols.is_empty() {
            println!("  symbols:  {}", report.symbols.join(", "));
        }
    }
    Ok(())
}

fn cmd_convert(
    registry: &Registry,
    value: f64,
    from: &str,
    to: &str,
    show_path: bool,
    json: bool,
) -> CliResult<()> {
    let report = convert(registry, value, from, to, show_path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {} = {} {}",
        report.input, report.from_symbol, report.magnitude, report.to_symbol
    );
    if let Some(path) = &report.path {
        println!("  via: {}", path.join(" -> "));
    }
    Ok(())
}

fn list_units(registry: &Registry, quantity: Option<&str>) -> CliResult<Vec<UnitReport>> {
    let units: Vec<&Unit> = match quantity {
        Some(name) => {
            let q = registry
                .quantity_named(name)
                .ok_or_else(|| CliError::UnknownQuantity(name.to_string()))?;
            registry.units_of(q.id).collect()
        }
        None => registry.all_units().collect(),
    };
    units
        .into_iter()
        .map(|u| unit_report(registry, u.id))
        .collect()
}

fn unit_report(registry: &Registry, id: UnitId) -> CliResult<UnitReport> {
    let unit = registry
        .unit(id)
        .ok_or(UcError::UnknownUnit { id: id.index() })?;
    let quantity = registry
        .quantity(unit.quantity)
        .map(|q| q.name.clone())
        .unwrap_or_default();

    Ok(UnitReport {
        name: unit.name.clone(),
        symbol: unit.symbol.clone(),
        quantity,
        aliases: unit.aliases.clone(),
        symbols: unit.symbols.clone(),
        system: unit.system.map(|s| s.to_string()),
    })
}

fn convert(
    registry: &Registry,
    input: f64,
    from: &str,
    to: &str,
    show_path: bool,
) -> CliResult<ConversionReport> {
    let from_id = registry.find(from)?;
    let to_id = registry.find(to)?;
    let resolved = registry.resolve(from_id, to_id)?;

    let path = show_path.then(|| {
        std::iter::once(from_id)
            .chain(resolved.hops())
            .map(|id| name_of(registry, id))
            .collect()
    });

    Ok(ConversionReport {
        input,
        from: name_of(registry, from_id),
        from_symbol: symbol_of(registry, from_id),
        to: name_of(registry, to_id),
        to_symbol: symbol_of(registry, to_id),
        magnitude: resolved.apply(input),
        path,
    })
}

fn name_of(registry: &Registry, id: UnitId) -> String {
    registry
        .unit(id)
        .map(|u| u.name.clone())
        .unwrap_or_default()
}

fn symbol_of(registry: &Registry, id: UnitId) -> String {
    registry
        .unit(id)
        .map(|u| u.symbol.clone())
        .unwrap_or_default()
}
