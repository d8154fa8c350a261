//! Tag-aware lazy service container
//!
//! Services are registered once under a process-unique string id, each with
//! a factory closure and optional capability tags. Resolution builds the
//! instance on first request and memoizes it; later resolves return the
//! same shared handle. Factories receive the container and may resolve
//! their own dependencies; a factory that reaches its own id again, however
//! indirectly, fails with `CircularDependency` instead of recursing.
//!
//! The whole runtime is single-flow command execution, so the instance
//! cache and the resolution stack use interior mutability without locking.

use crate::config::AppConfig;
use classnav_domain::error::{Error, Result};
use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::trace;

/// Process-unique service identifier
pub type ServiceId = String;

/// Tag-scoped attributes, an arbitrary key/value mapping consumers of the
/// tag interpret (e.g. the `name` a dumper is keyed by)
pub type Attributes = HashMap<String, String>;

/// Shared, type-erased service instance
type Instance = Arc<dyn Any + Send + Sync>;

type BoxedFactory = Box<dyn Fn(&Container) -> Result<Instance>>;

/// A capability tag attached to a service registration
#[derive(Debug, Clone, Default)]
pub struct Tag {
    name: String,
    attributes: Attributes,
}

impl Tag {
    /// A tag with no attributes
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
        }
    }

    /// Attach an attribute
    pub fn with_attribute<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// The tag name
    pub fn name(&self) -> &str {
        &self.name
    }
}

struct ServiceDefinition {
    factory: BoxedFactory,
}

/// Collects service definitions during wiring
///
/// Mirrors the builder-then-freeze shape of the catalog pattern: wiring code
/// registers factories (never invoking them), `build` produces the
/// immutable [`Container`].
#[derive(Default)]
pub struct ContainerBuilder {
    definitions: HashMap<ServiceId, ServiceDefinition>,
    tag_index: HashMap<String, Vec<(ServiceId, Attributes)>>,
}

impl std::fmt::Debug for ContainerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContainerBuilder")
            .field("definitions", &self.definitions.len())
            .field("tags", &self.tag_index.len())
            .finish()
    }
}

impl ContainerBuilder {
    /// An empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a service factory under `id`
    ///
    /// The factory runs at most once, on first resolution. Fails with
    /// `DuplicateService` when `id` is already taken; re-registration is a
    /// wiring defect, not something to merge silently.
    pub fn register<T, F>(&mut self, id: &str, factory: F) -> Result<&mut Self>
    where
        T: Any + Send + Sync,
        F: Fn(&Container) -> Result<T> + 'static,
    {
        self.register_tagged(id, Vec::new(), factory)
    }

    /// Register a service factory with capability tags
    ///
    /// Tag order inside the index is registration order — chains built from
    /// a tag try members first-registered-first.
    pub fn register_tagged<T, F>(&mut self, id: &str, tags: Vec<Tag>, factory: F) -> Result<&mut Self>
    where
        T: Any + Send + Sync,
        F: Fn(&Container) -> Result<T> + 'static,
    {
        if self.definitions.contains_key(id) {
            return Err(Error::duplicate_service(id));
        }
        trace!(id, tags = tags.len(), "registered service");
        self.definitions.insert(
            id.to_string(),
            ServiceDefinition {
                factory: Box::new(move |container| {
                    factory(container).map(|value| Arc::new(value) as Instance)
                }),
            },
        );
        for tag in tags {
            self.tag_index
                .entry(tag.name)
                .or_default()
                .push((id.to_string(), tag.attributes));
        }
        Ok(self)
    }

    /// Freeze the definitions into a resolvable container
    pub fn build(self, config: AppConfig) -> Container {
        Container {
            definitions: self.definitions,
            tag_index: self.tag_index,
            config,
            instances: RefCell::new(HashMap::new()),
            resolving: RefCell::new(Vec::new()),
        }
    }
}

/// The frozen service container
///
/// Definitions and the tag index are immutable after `build`; the instance
/// cache is the only mutable state, written exactly once per id.
pub struct Container {
    definitions: HashMap<ServiceId, ServiceDefinition>,
    tag_index: HashMap<String, Vec<(ServiceId, Attributes)>>,
    config: AppConfig,
    instances: RefCell<HashMap<ServiceId, Instance>>,
    resolving: RefCell<Vec<ServiceId>>,
}

impl Container {
    /// Resolve a service to its shared instance
    ///
    /// `T` is the type the factory returned — conventionally an `Arc` so
    /// every caller shares one instance. Fails with `UnknownService` for an
    /// unregistered id, `CircularDependency` when resolution reaches an id
    /// already being constructed, and `ServiceType` when `T` does not match
    /// the registered factory's type. A failing factory caches nothing; the
    /// next resolve retries it.
    pub fn resolve<T>(&self, id: &str) -> Result<T>
    where
        T: Any + Send + Sync + Clone,
    {
        if let Some(instance) = self.instances.borrow().get(id) {
            return downcast::<T>(id, instance);
        }

        let definition = self
            .definitions
            .get(id)
            .ok_or_else(|| Error::unknown_service(id))?;

        {
            let resolving = self.resolving.borrow();
            if resolving.iter().any(|pending| pending == id) {
                return Err(Error::circular_dependency(id, resolving.as_slice()));
            }
        }

        trace!(id, "constructing service");
        self.resolving.borrow_mut().push(id.to_string());
        let constructed = (definition.factory)(self);
        self.resolving.borrow_mut().pop();

        let instance = constructed?;
        self.instances
            .borrow_mut()
            .insert(id.to_string(), instance.clone());
        downcast::<T>(id, &instance)
    }

    /// Services registered under a tag, in registration order
    ///
    /// Unknown tags yield an empty slice; this never fails.
    pub fn tagged(&self, tag: &str) -> &[(ServiceId, Attributes)] {
        self.tag_index.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a service id is registered
    pub fn has(&self, id: &str) -> bool {
        self.definitions.contains_key(id)
    }

    /// The immutable parameter surface factories read from
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

fn downcast<T>(id: &str, instance: &Instance) -> Result<T>
where
    T: Any + Clone,
{
    instance
        .downcast_ref::<T>()
        .cloned()
        .ok_or_else(|| Error::ServiceType {
            id: id.to_string(),
            expected: std::any::type_name::<T>(),
        })
}
