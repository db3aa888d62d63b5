//! bankcert-ingest: the statement parser contract, name-based parser
//! resolution, and the bank-specific parsers shipped with the harness.

pub mod contract;
pub mod parsers;
pub mod registry;

pub use contract::StatementParser;
pub use registry::{ParserRegistry, ResolutionError};
