//! Infrastructure layer for classnav
//!
//! Cross-cutting concerns the rest of the workspace composes on: the
//! tag-aware service container, configuration loading, logging setup, and
//! the core wiring extension that populates the container with every
//! resolution service.

pub mod bootstrap;
pub mod config;
pub mod di;
pub mod logging;

pub use bootstrap::{build_container, CoreExtension, Extension};
pub use config::{AppConfig, ConfigLoader};
pub use di::{Attributes, Container, ContainerBuilder, ServiceId, Tag};
