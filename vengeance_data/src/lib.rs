//! Shared data model for Vengeance world descriptions.

pub mod defs;
pub mod parse;
pub mod validate;

pub use defs::*;
pub use parse::parse_world;
pub use validate::{GameFormatError, RESERVED_WORD, validate_world};
