//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::DocumentStore;
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Document load/save
    pub store: DocumentStore,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> Self {
        let settings = Arc::new(settings);
        let store = DocumentStore::new(Arc::clone(&fs));

        Self {
            settings,
            fs,
            store,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_settings_when_container_built_then_settings_readable() {
        let settings = Settings {
            color: false,
            log_level: "debug".into(),
        };

        let container = ServiceContainer::new(settings.clone());

        assert_eq!(*container.settings, settings);
        assert_eq!(
            container.settings.log_filter(),
            tracing::level_filters::LevelFilter::DEBUG
        );
    }
}
