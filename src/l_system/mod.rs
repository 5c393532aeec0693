//! The l_system module provides a simple Lindenmayer grammar expander for use with
//! plotted line-art. Take a look at the [`crate::l_system::Grammar`] struct for
//! more details, and examples.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::TurtleError;
use crate::turtle::{interpret, Drawing};

/// Ready-made grammars with sensible default iteration counts.
pub mod presets;

/// RON persistence for grammars and grammar catalogs.
pub mod grammar_file;

/// # RuleTable
///
/// Maps a single symbol to its replacement. Symbols without an entry rewrite
/// to themselves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleTable(HashMap<char, String>);

impl RuleTable {
    pub fn new() -> RuleTable {
        RuleTable(HashMap::new())
    }

    /// Adds (or replaces) the rule for `symbol`.
    pub fn with_rule(mut self, symbol: char, replacement: &str) -> Self {
        self.0.insert(symbol, replacement.to_string());
        self
    }

    pub fn get(&self, symbol: char) -> Option<&str> {
        self.0.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends the rewrite of `symbol` to `out`: its replacement when a rule
    /// exists, the symbol itself otherwise.
    pub fn rewrite(&self, symbol: char, out: &mut String) {
        match self.0.get(&symbol) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(symbol),
        }
    }

    /// Runs one generation over `state`.
    pub fn expand_once(&self, state: &str) -> String {
        let mut next = String::with_capacity(state.len());
        for c in state.chars() {
            self.rewrite(c, &mut next);
        }
        next
    }

    /// Parses rule text, one `symbol -> replacement` per line.
    ///
    /// Whitespace around the arrow is ignored. Blank lines are skipped quietly;
    /// lines with no arrow, or with anything other than exactly one symbol on the
    /// left, are skipped with a warning. Later rules for the same symbol win.
    ///
    /// ```
    /// use lsys_plot::l_system::RuleTable;
    /// let rules = RuleTable::parse("f -> f+f-f-f+f\n x->  yf+ ");
    /// assert_eq!(rules.get('f'), Some("f+f-f-f+f"));
    /// assert_eq!(rules.get('x'), Some("yf+"));
    /// ```
    pub fn parse(text: &str) -> RuleTable {
        let mut rules = RuleTable::new();
        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let Some((lhs, rhs)) = line.split_once("->") else {
                log::warn!("Skipping rule line {}: no '->' in {:?}", lineno + 1, line);
                continue;
            };
            let mut symbols = lhs.trim().chars();
            match (symbols.next(), symbols.next()) {
                (Some(symbol), None) => {
                    rules.0.insert(symbol, rhs.trim().to_string());
                }
                _ => log::warn!(
                    "Skipping rule line {}: left side {:?} is not a single symbol",
                    lineno + 1,
                    lhs.trim()
                ),
            }
        }
        rules
    }
}

impl<S: Into<String>> FromIterator<(char, S)> for RuleTable {
    fn from_iter<I: IntoIterator<Item = (char, S)>>(iter: I) -> Self {
        RuleTable(iter.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

/// # Grammar
///
/// An immutable L-system: rules, seed and turn angle, plus an optional default
/// iteration count and display name. Build a new one instead of editing.
///
/// # Example
///
/// ```rust
/// use lsys_plot::l_system::{Grammar, RuleTable};
///
/// let koch = Grammar::new(
///     RuleTable::new().with_rule('f', "f+f-f-f+f"),
///     "f",
///     90.0,
/// ).with_name("Koch curve").with_iterations(3);
///
/// let drawing = koch.compute(2).expect("balanced brackets");
/// assert_eq!(drawing.paths.0.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grammar {
    rules: RuleTable,
    seed: String,
    angle: f64,
    #[serde(default)]
    iterations: Option<u32>,
    #[serde(default)]
    name: Option<String>,
}

impl Grammar {
    pub fn new(rules: RuleTable, seed: &str, angle: f64) -> Grammar {
        Grammar {
            rules,
            seed: seed.to_string(),
            angle,
            iterations: None,
            name: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = Some(iterations);
        self
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Turn angle in degrees.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn iterations(&self) -> Option<u32> {
        self.iterations
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Case-insensitive name match, ignoring surrounding whitespace.
    pub fn is_named(&self, name: &str) -> bool {
        self.name()
            .map(|n| n.eq_ignore_ascii_case(name.trim()))
            .unwrap_or(false)
    }

    /// #expand
    ///
    /// Expands the grammar by the requested number of generations. Returns the
    /// symbol string, ready for [`crate::turtle::interpret`] or
    /// [`crate::turtle::TurtleTrait::walk_lpath`]. Output length grows with
    /// every generation; bounding `iterations` is up to the caller.
    pub fn expand(&self, iterations: u32) -> String {
        let mut state = self.seed.clone();
        for generation in 0..iterations {
            state = self.rules.expand_once(&state);
            log::trace!("generation {} is {} symbols", generation + 1, state.len());
        }
        state
    }

    /// Expands and interprets in one go.
    pub fn compute(&self, iterations: u32) -> Result<Drawing, TurtleError> {
        interpret(&self.expand(iterations), self.angle)
    }

    /// Computes at the grammar's own iteration count. A missing or zero count
    /// means there is nothing to render, reported as `Ok(None)`.
    pub fn compute_default(&self) -> Result<Option<Drawing>, TurtleError> {
        match self.iterations {
            Some(n) if n > 0 => self.compute(n).map(Some),
            _ => Ok(None),
        }
    }
}

/// Free-function form of [`Grammar::expand`].
pub fn expand(grammar: &Grammar, iterations: u32) -> String {
    grammar.expand(iterations)
}

#[cfg(test)]
mod test {
    use super::*;

    fn algae() -> Grammar {
        Grammar::new(
            RuleTable::from_iter([('A', "AB"), ('B', "A")]),
            "A",
            0.0,
        )
    }

    #[test]
    fn test_expand_simple() {
        let system = algae();
        assert_eq!(system.expand(2), "ABA");
        assert_eq!(system.expand(5), "ABAABABAABAAB");
    }

    #[test]
    fn test_expand_zero_is_seed() {
        let system = algae();
        assert_eq!(expand(&system, 0), "A");
        let empty = Grammar::new(RuleTable::new(), "", 45.0);
        assert_eq!(empty.expand(4), "");
    }

    #[test]
    fn test_expand_compositional() {
        let system = Grammar::new(
            RuleTable::new()
                .with_rule('x', "x+yf+")
                .with_rule('y', "-fx-y"),
            "fx",
            90.0,
        );
        for n in 0..6 {
            assert_eq!(
                system.expand(n + 1),
                system.rules().expand_once(&system.expand(n))
            );
        }
    }

    #[test]
    fn test_koch_one_generation() {
        let koch = Grammar::new(RuleTable::new().with_rule('F', "F+F-F-F+F"), "F", 90.0);
        assert_eq!(koch.expand(1), "F+F-F-F+F");
    }

    #[test]
    fn test_unknown_symbols_pass_through() {
        let system = Grammar::new(RuleTable::new().with_rule('a', "ab"), "a[Z]é", 30.0);
        assert_eq!(system.expand(2), "abb[Z]é");
    }

    #[test]
    fn test_erasing_rule() {
        let rules = RuleTable::parse("x ->\nf -> ff");
        assert_eq!(rules.get('x'), Some(""));
        assert_eq!(rules.expand_once("fxf"), "ffff");
    }

    #[test]
    fn test_parse_skips_bad_lines() {
        let rules = RuleTable::parse("\nno arrow here\nab -> c\n -> d\nf->g\nf -> h\n");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.get('f'), Some("h"));
    }

    #[test]
    fn test_compute_default() {
        let g = algae();
        assert_eq!(g.compute_default(), Ok(None));
        let g = algae().with_iterations(0);
        assert_eq!(g.compute_default(), Ok(None));
        let g = Grammar::new(RuleTable::new().with_rule('f', "ff"), "f", 90.0)
            .with_iterations(2);
        let drawing = g.compute_default().unwrap().unwrap();
        assert!((drawing.bounds.max_x - 4.0).abs() < 0.0001);
    }

    #[test]
    fn test_builders() {
        let g = algae().with_name("algae").with_iterations(3);
        assert_eq!(g.name(), Some("algae"));
        assert_eq!(g.iterations(), Some(3));
        assert_eq!(g.seed(), "A");
        assert_eq!(g.angle(), 0.0);
    }
}
