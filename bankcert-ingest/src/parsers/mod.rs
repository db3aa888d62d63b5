//! Bank-specific statement parsers (extracted PDF text).

pub mod hdfc;
pub mod icici;

pub use hdfc::HdfcParser;
pub use icici::IciciParser;
