//! Application services for classnav
//!
//! Thin orchestration over the domain ports: each service pulls the chains
//! it needs and produces a serializable report for the console layer to
//! render.

pub mod class_search;
pub mod file_info;
pub mod normalizer;

pub use class_search::{ClassSearch, ClassSearchResult};
pub use file_info::{FileInfo, FileInfoReport};
pub use normalizer::ClassFileNormalizer;
