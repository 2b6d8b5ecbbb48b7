//! Resolving user-supplied strings to units.

use uc_core::{UcError, UcResult, UnitId};

use crate::registry::Registry;
use crate::unit::Unit;

/// How a candidate name is compared with the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Match {
    Exact,
    IgnoreCase,
}

impl Registry {
    /// Find the unit answering to `s` by name, symbol, alias or alternate
    /// symbol.
    ///
    /// Three passes over `all_units` order, the first hit wins:
    /// exact match, then case-insensitive match, then (for input ending in
    /// `s`/`S`) case-insensitive match with that one character stripped.
    pub fn find(&self, s: &str) -> UcResult<UnitId> {
        if let Some(id) = self.scan(s, Match::Exact) {
            return Ok(id);
        }
        if let Some(id) = self.scan(s, Match::IgnoreCase) {
            return Ok(id);
        }
        if let Some(singular) = s.strip_suffix(|c: char| c == 's' || c == 'S') {
            if let Some(id) = self.scan(singular, Match::IgnoreCase) {
                return Ok(id);
            }
        }
        Err(UcError::not_found(s))
    }

    fn scan(&self, s: &str, mode: Match) -> Option<UnitId> {
        self.all_units()
            .find(|unit| matches_unit(s, unit, mode))
            .map(|unit| unit.id)
    }
}

fn matches_unit(s: &str, unit: &Unit, mode: Match) -> bool {
    unit.names().any(|name| match mode {
        Match::Exact => name == s,
        Match::IgnoreCase => eq_fold(name, s),
    })
}

/// Case-insensitive comparison under simple case folding: lowercase each
/// char, then merge the lowercase variants that share a fold class.
fn eq_fold(a: &str, b: &str) -> bool {
    if a.len() == b.len() && a.eq_ignore_ascii_case(b) {
        return true;
    }
    a.chars()
        .flat_map(char::to_lowercase)
        .map(fold)
        .eq(b.chars().flat_map(char::to_lowercase).map(fold))
}

/// Lowercase letters whose fold class holds a second lowercase form.
fn fold(c: char) -> char {
    match c {
        'ſ' => 's',
        'ς' => 'σ',
        'µ' => 'μ',
        'ϐ' => 'β',
        'ϑ' => 'θ',
        'ϕ' => 'φ',
        'ϖ' => 'π',
        'ϰ' => 'κ',
        'ϱ' => 'ρ',
        'ϵ' => 'ε',
        '\u{345}' | '\u{1fbe}' => 'ι',
        'ẛ' => 'ṡ',
        c => c,
    }
}
