use respath_core::{EmbeddedTable, ResolverConfig, SourceResolver};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;

/// Builds a resolver session for the host.
///
/// The session reads the process-wide embedded table (empty unless the host
/// called [`install_embedded`] first) and is seeded according to `config`.
pub fn build_default_resolver(config: &ResolverConfig) -> SourceResolver {
    let resolver = SourceResolver::from_config(config, respath_core::embedded::global());
    tracing::debug!(
        "Resolver ready in {} mode with {} source locations",
        config.mode,
        resolver.registry().len()
    );
    resolver
}

/// Loads configuration (defaults, optional JSON file, then `RESPATH_*`
/// environment) and builds a resolver from it.
pub fn build_resolver_from_env(config_file: Option<&Path>) -> respath_core::Result<SourceResolver> {
    let config = ResolverConfig::load(config_file)?;
    Ok(build_default_resolver(&config))
}

/// Installs the table compiled into the host binary. Returns false when a
/// table was already installed; the first one stays in effect.
pub fn install_embedded(table: EmbeddedTable) -> bool {
    match respath_core::embedded::install(table) {
        Ok(()) => true,
        Err(_) => {
            tracing::warn!("Embedded resource table already installed; keeping the first one");
            false
        }
    }
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    respath_core::logging::init_logging(component, to_stderr)
}
