//! bankcert-harness: per-bank fixture conventions and the verification
//! run that certifies one parser against one reference table.

pub mod fixture;
pub mod runner;

pub use fixture::Fixture;
pub use runner::{HarnessError, Report, run};
