//! Container bootstrap
//!
//! Declarative wiring: extensions register factories into a
//! [`ContainerBuilder`], and [`build_container`] composes them into the
//! frozen container. [`CoreExtension`] wires every resolution service —
//! autoload maps, conversion chains, filesystems, source locators and the
//! application services built on them. Console-specific services (dumpers,
//! prompts) are wired by the CLI crate's own extension.

use crate::config::AppConfig;
use crate::di::{Container, ContainerBuilder, Tag};
use classnav_application::{ClassFileNormalizer, ClassSearch, FileInfo};
use classnav_domain::chain::Chain;
use classnav_domain::converter::ClassFileConverter;
use classnav_domain::error::Result;
use classnav_domain::ports::{ClassToFile, FileListProvider, FileToClass, SourceLocator};
use classnav_providers::composer::{
    discover, AutoloaderMap, ComposerClassToFile, ComposerFileListProvider, ComposerFileToClass,
};
use classnav_providers::filesystem::{GitFilesystem, SimpleFilesystem};
use classnav_providers::locator::{ConverterSourceLocator, StubSourceLocator};
use std::sync::Arc;
use tracing::debug;

/// Well-known service ids
pub mod services {
    /// Autoload maps discovered from the configured manifest paths
    pub const COMPOSER_CLASS_LOADERS: &str = "composer.class_loaders";
    /// First-match class→file chain over the autoload maps
    pub const CLASS_TO_FILE_CHAIN: &str = "convert.class_to_file";
    /// First-match file→class chain over the autoload maps
    pub const FILE_TO_CLASS_CHAIN: &str = "convert.file_to_class";
    /// Bidirectional converter facade
    pub const CONVERTER: &str = "convert.converter";
    /// Directory-walk file listing rooted at the working directory
    pub const FILESYSTEM_SIMPLE: &str = "filesystem.simple";
    /// Git-tracked file listing rooted at the working directory
    pub const FILESYSTEM_GIT: &str = "filesystem.git";
    /// Union file listing over the autoload roots
    pub const FILESYSTEM_COMPOSER: &str = "filesystem.composer";
    /// Stub-directory source locator
    pub const LOCATOR_STUB: &str = "locator.stub";
    /// Converter-backed project source locator
    pub const LOCATOR_PROJECT: &str = "locator.project";
    /// First-match source locator chain built from the tag index
    pub const SOURCE_LOCATOR_CHAIN: &str = "locator.chain";
    /// Class search application service
    pub const CLASS_SEARCH: &str = "application.class_search";
    /// File info application service
    pub const FILE_INFO: &str = "application.file_info";
    /// Class/file input normalizer
    pub const NORMALIZER: &str = "application.class_file_normalizer";
}

/// Well-known capability tags
pub mod tags {
    /// Source locators, chained in registration order
    pub const SOURCE_LOCATOR: &str = "locator.source_locator";
    /// Output dumpers, keyed by their `name` attribute
    pub const DUMPER: &str = "console.dumper";
}

/// A batch of service registrations
pub trait Extension {
    /// Register this extension's services into the builder
    fn load(&self, builder: &mut ContainerBuilder) -> Result<()>;
}

/// Compose extensions into a ready container
pub fn build_container(config: AppConfig, extensions: &[&dyn Extension]) -> Result<Container> {
    let mut builder = ContainerBuilder::new();
    for extension in extensions {
        extension.load(&mut builder)?;
    }
    debug!(extensions = extensions.len(), "container wired");
    Ok(builder.build(config))
}

/// Core wiring: every non-console service of the tool
pub struct CoreExtension;

impl Extension for CoreExtension {
    fn load(&self, builder: &mut ContainerBuilder) -> Result<()> {
        self.register_composer(builder)?;
        self.register_conversion(builder)?;
        self.register_filesystems(builder)?;
        self.register_locators(builder)?;
        self.register_application_services(builder)?;
        Ok(())
    }
}

impl CoreExtension {
    fn register_composer(&self, builder: &mut ContainerBuilder) -> Result<()> {
        builder.register(services::COMPOSER_CLASS_LOADERS, |container| {
            let paths = container.config().autoload_paths();
            discover(&paths)
        })?;
        Ok(())
    }

    fn register_conversion(&self, builder: &mut ContainerBuilder) -> Result<()> {
        builder.register(services::CLASS_TO_FILE_CHAIN, |container| {
            let loaders: Vec<Arc<AutoloaderMap>> =
                container.resolve(services::COMPOSER_CLASS_LOADERS)?;
            let members = loaders
                .iter()
                .map(|map| Arc::new(ComposerClassToFile::new(map.clone())) as Arc<dyn ClassToFile>)
                .collect();
            Ok(Chain::new(members))
        })?;

        builder.register(services::FILE_TO_CLASS_CHAIN, |container| {
            let loaders: Vec<Arc<AutoloaderMap>> =
                container.resolve(services::COMPOSER_CLASS_LOADERS)?;
            let members = loaders
                .iter()
                .map(|map| Arc::new(ComposerFileToClass::new(map.clone())) as Arc<dyn FileToClass>)
                .collect();
            Ok(Chain::new(members))
        })?;

        builder.register(services::CONVERTER, |container| {
            let to_file: Chain<dyn ClassToFile> =
                container.resolve(services::CLASS_TO_FILE_CHAIN)?;
            let to_class: Chain<dyn FileToClass> =
                container.resolve(services::FILE_TO_CLASS_CHAIN)?;
            Ok(Arc::new(ClassFileConverter::new(to_file, to_class)))
        })?;
        Ok(())
    }

    fn register_filesystems(&self, builder: &mut ContainerBuilder) -> Result<()> {
        builder.register(services::FILESYSTEM_SIMPLE, |container| {
            Ok(Arc::new(SimpleFilesystem::new(container.config().cwd()))
                as Arc<dyn FileListProvider>)
        })?;

        builder.register(services::FILESYSTEM_GIT, |container| {
            Ok(Arc::new(GitFilesystem::new(container.config().cwd())) as Arc<dyn FileListProvider>)
        })?;

        builder.register(services::FILESYSTEM_COMPOSER, |container| {
            let loaders: Vec<Arc<AutoloaderMap>> =
                container.resolve(services::COMPOSER_CLASS_LOADERS)?;
            let members = loaders
                .iter()
                .map(|map| {
                    Arc::new(ComposerFileListProvider::new(map.clone()))
                        as Arc<dyn FileListProvider>
                })
                .collect();
            Ok(Arc::new(Chain::new(members)) as Arc<dyn FileListProvider>)
        })?;
        Ok(())
    }

    fn register_locators(&self, builder: &mut ContainerBuilder) -> Result<()> {
        // registration order is trial order: stub signatures are consulted
        // before project sources
        builder.register_tagged(
            services::LOCATOR_STUB,
            vec![Tag::new(tags::SOURCE_LOCATOR)],
            |container| {
                let config = container.config();
                Ok(Arc::new(StubSourceLocator::new(
                    config.stub_dir(),
                    config.cache_dir(),
                )) as Arc<dyn SourceLocator>)
            },
        )?;

        builder.register_tagged(
            services::LOCATOR_PROJECT,
            vec![Tag::new(tags::SOURCE_LOCATOR)],
            |container| {
                let converter: Arc<ClassFileConverter> = container.resolve(services::CONVERTER)?;
                Ok(Arc::new(ConverterSourceLocator::new(converter)) as Arc<dyn SourceLocator>)
            },
        )?;

        builder.register(services::SOURCE_LOCATOR_CHAIN, |container| {
            let mut members = Vec::new();
            for (id, _attributes) in container.tagged(tags::SOURCE_LOCATOR) {
                members.push(container.resolve::<Arc<dyn SourceLocator>>(id)?);
            }
            Ok(Arc::new(Chain::new(members)))
        })?;
        Ok(())
    }

    fn register_application_services(&self, builder: &mut ContainerBuilder) -> Result<()> {
        builder.register(services::CLASS_SEARCH, |container| {
            let filesystem: Arc<dyn FileListProvider> =
                container.resolve(services::FILESYSTEM_COMPOSER)?;
            let converter: Arc<ClassFileConverter> = container.resolve(services::CONVERTER)?;
            Ok(Arc::new(ClassSearch::new(filesystem, converter)))
        })?;

        builder.register(services::FILE_INFO, |container| {
            let converter: Arc<ClassFileConverter> = container.resolve(services::CONVERTER)?;
            Ok(Arc::new(FileInfo::new(converter)))
        })?;

        builder.register(services::NORMALIZER, |container| {
            let converter: Arc<ClassFileConverter> = container.resolve(services::CONVERTER)?;
            Ok(Arc::new(ClassFileNormalizer::new(converter)))
        })?;
        Ok(())
    }
}
