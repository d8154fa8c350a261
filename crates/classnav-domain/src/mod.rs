//! Domain layer for classnav
//!
//! Holds the capability ports (class/file conversion, source location, file
//! listing, prompting), the value objects they exchange, and the generic
//! chain combinator used to compose multiple strategies behind a single
//! port. No I/O happens in this crate; concrete strategies live in
//! `classnav-providers`.

pub mod chain;
pub mod converter;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use chain::Chain;
pub use converter::ClassFileConverter;
pub use error::{Error, Result};
pub use value_objects::{ClassName, FilePath, SourceCode};
