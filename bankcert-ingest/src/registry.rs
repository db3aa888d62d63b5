//! Name-based parser resolution.
//!
//! Parsers are registered under a canonical bank identifier. Resolution
//! tries the requested spelling first, then any alias spellings recorded
//! for it — some banks have been referred to by more than one spelling
//! historically, and both must keep resolving.

use std::collections::HashMap;

use crate::contract::StatementParser;
use crate::parsers::{HdfcParser, IciciParser};

pub type ParserFactory = fn() -> Box<dyn StatementParser>;

/// No implementation was found under any tolerated spelling.
#[derive(Debug, Clone)]
pub struct ResolutionError {
    pub bank: String,
    pub tried: Vec<String>,
}

impl std::fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "no parser registered for bank {:?} (tried {:?})",
            self.bank, self.tried
        )
    }
}

impl std::error::Error for ResolutionError {}

/// Registry of known parser implementations, keyed by name, with an
/// ordered alias list per identifier.
pub struct ParserRegistry {
    factories: HashMap<String, ParserFactory>,
    aliases: HashMap<String, Vec<String>>,
}

impl ParserRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// The registry of shipped parsers. The `icic` spelling is an alias
    /// of `icici`, kept in both directions so either name resolves.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("icici", || Box::new(IciciParser));
        registry.register("hdfc", || Box::new(HdfcParser));
        registry.add_alias("icici", "icic");
        registry.add_alias("icic", "icici");
        registry
    }

    pub fn register(&mut self, name: &str, factory: ParserFactory) {
        self.factories.insert(name.to_string(), factory);
    }

    /// Record an extra spelling to try when resolving `bank`.
    pub fn add_alias(&mut self, bank: &str, spelling: &str) {
        let spellings = self.aliases.entry(bank.to_string()).or_default();
        if !spellings.iter().any(|s| s == spelling) {
            spellings.push(spelling.to_string());
        }
    }

    /// Spellings tried for `bank`, primary first.
    pub fn candidates(&self, bank: &str) -> Vec<String> {
        let mut names = vec![bank.to_string()];
        if let Some(spellings) = self.aliases.get(bank) {
            names.extend(spellings.iter().cloned());
        }
        names
    }

    /// Locate the implementation for a bank, trying the primary spelling
    /// first and falling back to aliases. A fresh parser is built per
    /// resolution; parsers are never reused across documents.
    pub fn resolve(&self, bank: &str) -> Result<Box<dyn StatementParser>, ResolutionError> {
        let tried = self.candidates(bank);
        for name in &tried {
            if let Some(factory) = self.factories.get(name) {
                return Ok(factory());
            }
        }
        Err(ResolutionError {
            bank: bank.to_string(),
            tried,
        })
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}
