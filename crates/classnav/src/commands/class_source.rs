//! `class-source` command

use classnav_application::ClassFileNormalizer;
use classnav_domain::chain::Chain;
use classnav_domain::ports::SourceLocator;
use classnav_infrastructure::bootstrap::services;
use classnav_infrastructure::di::Container;
use std::io::Write;
use std::sync::Arc;

/// Print the source defining a class, located through the locator chain
///
/// Accepts a class name or a file path; the source is written verbatim, not
/// through a dumper.
pub fn run(container: &Container, input: &str) -> anyhow::Result<()> {
    let normalizer: Arc<ClassFileNormalizer> = container.resolve(services::NORMALIZER)?;
    let Some(class) = normalizer.normalize_to_class(input)? else {
        anyhow::bail!("could not derive a class name from '{input}'");
    };

    let locator: Arc<Chain<dyn SourceLocator>> = container.resolve(services::SOURCE_LOCATOR_CHAIN)?;
    let Some(source) = locator.locate(&class)? else {
        anyhow::bail!("could not locate source for class '{class}'");
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(source.code.as_bytes())?;
    Ok(())
}
