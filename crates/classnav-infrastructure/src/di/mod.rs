//! Dependency injection
//!
//! A two-phase service container: definitions are collected into a
//! [`ContainerBuilder`] during wiring, then frozen into a [`Container`]
//! whose services are built lazily and memoized for the life of the
//! process. Capability tags group service ids for ordered retrieval.

pub mod container;

pub use container::{Attributes, Container, ContainerBuilder, ServiceId, Tag};
