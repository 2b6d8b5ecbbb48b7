//! Unit and quantity records.

use std::fmt;

use uc_core::{QuantityId, UnitId};

/// A physical dimension, e.g. "volume flow rate".
///
/// Identity is the name: the builder hands out one id per distinct name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantity {
    pub id: QuantityId,
    pub name: String,
}

/// Measurement system a unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitSystem {
    Si,
    Imperial,
    UsCustomary,
    Other(&'static str),
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Si => f.write_str("SI"),
            UnitSystem::Imperial => f.write_str("imperial"),
            UnitSystem::UsCustomary => f.write_str("US customary"),
            UnitSystem::Other(name) => f.write_str(name),
        }
    }
}

/// Optional attributes passed to `RegistryBuilder::define_unit`.
#[derive(Debug, Clone, Default)]
pub struct UnitOptions {
    pub aliases: Vec<String>,
    pub symbols: Vec<String>,
    pub system: Option<UnitSystem>,
}

impl UnitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    pub fn symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols.extend(symbols.into_iter().map(Into::into));
        self
    }

    pub fn system(mut self, system: UnitSystem) -> Self {
        self.system = Some(system);
        self
    }
}

/// A registered measurement unit.
///
/// Equality and hashing go through `id` only: two units are the same unit
/// iff they are the same registry entry.
#[derive(Debug, Clone)]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    pub symbol: String,
    pub quantity: QuantityId,
    pub aliases: Vec<String>,
    pub symbols: Vec<String>,
    pub system: Option<UnitSystem>,
}

impl Unit {
    /// Every string this unit answers to: name, symbol, aliases, then
    /// alternate symbols.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
            .chain(std::iter::once(self.symbol.as_str()))
            .chain(self.aliases.iter().map(String::as_str))
            .chain(self.symbols.iter().map(String::as_str))
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Unit {}

impl std::hash::Hash for Unit {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uc_core::Id;

    fn sample(id: u32, name: &str) -> Unit {
        Unit {
            id: Id::from_index(id),
            name: name.into(),
            symbol: "m".into(),
            quantity: Id::from_index(0),
            aliases: vec!["metre".into()],
            symbols: vec!["mtr".into()],
            system: Some(UnitSystem::Si),
        }
    }

    #[test]
    fn names_in_declaration_order() {
        let unit = sample(0, "meter");
        let names: Vec<&str> = unit.names().collect();
        assert_eq!(names, ["meter", "m", "metre", "mtr"]);
    }

    #[test]
    fn equality_is_identity() {
        assert_ne!(sample(0, "meter"), sample(1, "meter"));
        assert_eq!(sample(2, "meter"), sample(2, "renamed"));
    }

    #[test]
    fn options_builder_accumulates() {
        let opts = UnitOptions::new()
            .aliases(["a", "b"])
            .symbols(["s"])
            .aliases(["c"])
            .system(UnitSystem::Imperial);
        assert_eq!(opts.aliases, ["a", "b", "c"]);
        assert_eq!(opts.symbols, ["s"]);
        assert_eq!(opts.system, Some(UnitSystem::Imperial));
    }
}
