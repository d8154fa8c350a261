//! Error handling types

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for classnav
///
/// Container and autoloader errors are wiring/environment defects and are
/// never retried; strategy faults travel through chains verbatim inside the
/// `Io`/`Json`/`Process` variants so the root cause stays identifiable.
#[derive(Error, Debug)]
pub enum Error {
    /// A service id was registered twice
    #[error("service '{id}' is already registered")]
    DuplicateService {
        /// The offending service id
        id: String,
    },

    /// A service id was resolved without being registered
    #[error("no service registered with id '{id}'")]
    UnknownService {
        /// The unknown service id
        id: String,
    },

    /// A factory resolved its own id, directly or transitively
    #[error("circular dependency while resolving service '{id}' ({path})")]
    CircularDependency {
        /// The id whose resolution closed the cycle
        id: String,
        /// The resolution path that led back to `id`, `->`-joined
        path: String,
    },

    /// A cached service instance did not have the requested type
    #[error("service '{id}' does not have the requested type {expected}")]
    ServiceType {
        /// The service id
        id: String,
        /// Name of the type the caller asked for
        expected: &'static str,
    },

    /// An autoloader path does not exist
    #[error("could not locate autoloader file '{path}'")]
    AutoloaderNotFound {
        /// The missing path
        path: PathBuf,
    },

    /// An autoloader file exists but does not satisfy the autoloader shape
    #[error("autoloader file '{path}' is invalid: {message}")]
    InvalidAutoloader {
        /// The offending path
        path: PathBuf,
        /// What was wrong with it
        message: String,
    },

    /// Configuration-related error
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// An external process (e.g. `git`) failed
    #[error("process error: {message}")]
    Process {
        /// Description of the process failure
        message: String,
    },
}

impl Error {
    /// Create a duplicate service error
    pub fn duplicate_service<S: Into<String>>(id: S) -> Self {
        Self::DuplicateService { id: id.into() }
    }

    /// Create an unknown service error
    pub fn unknown_service<S: Into<String>>(id: S) -> Self {
        Self::UnknownService { id: id.into() }
    }

    /// Create a circular dependency error from the resolution stack
    pub fn circular_dependency<S: Into<String>>(id: S, stack: &[String]) -> Self {
        let id = id.into();
        let mut path = stack.to_vec();
        path.push(id.clone());
        Self::CircularDependency {
            id,
            path: path.join(" -> "),
        }
    }

    /// Create an invalid autoloader error
    pub fn invalid_autoloader<P: Into<PathBuf>, S: Into<String>>(path: P, message: S) -> Self {
        Self::InvalidAutoloader {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a process error
    pub fn process<S: Into<String>>(message: S) -> Self {
        Self::Process {
            message: message.into(),
        }
    }
}
