mod lookup;
mod manifest;
mod paths;

use clap::{Parser, Subcommand};
use respath_core::{Mode, ResolverConfig, SourceResolver};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "respath",
    version,
    about = "Resolve resource names against a source path of directories and jars",
    long_about = "respath looks up logical resource names such as cljs/core.cljs the way the \
                  runtime does: embedded resources first, then every registered directory or \
                  jar in order. Use it to check which copy of a namespace will be loaded."
)]
pub struct Cli {
    /// Add a directory or jar to the source path (repeatable)
    #[arg(short = 's', long = "source-path", value_name = "PATH", global = true)]
    pub source_paths: Vec<String>,

    /// Embedded resource mode: packaged or development
    #[arg(long, env = "RESPATH_MODE", global = true)]
    pub mode: Option<String>,

    /// Build-output directory used for embedded names in development mode
    #[arg(long, value_name = "DIR", global = true)]
    pub dev_root: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Do not register the current directory
    #[arg(long, global = true)]
    pub no_cwd: bool,

    /// Also log to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Machine-readable output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List registered source locations
    Paths,
    /// Show where a resource name resolves to
    Resolve {
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Print the content a resource name resolves to
    Cat {
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Print every copy of manifest files found on the source path
    #[command(
        long_about = "Manifest files such as deps.cljs are merged across all libraries rather \
                      than shadowed, so every location that has one is reported."
    )]
    Manifest {
        #[arg(value_name = "FILE", required = true)]
        filenames: Vec<String>,
    },
    /// List entries of a jar under a prefix
    Ls {
        #[arg(value_name = "ARCHIVE")]
        archive: PathBuf,
        #[arg(value_name = "PREFIX", default_value = "")]
        prefix: String,
    },
}

impl Cli {
    /// Layer flags over the file/environment configuration
    pub fn resolver_config(&self) -> respath_core::Result<ResolverConfig> {
        let mut config = ResolverConfig::load(self.config.as_deref())?;
        if let Some(mode) = &self.mode {
            config.mode = mode.parse::<Mode>()?;
        }
        if let Some(root) = &self.dev_root {
            config.dev_root = root.clone();
        }
        if self.no_cwd {
            config.seed_cwd = false;
        }
        config.source_paths.extend(self.source_paths.iter().cloned());
        Ok(config)
    }
}

pub fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = respath_runtime::init_logging("cli", cli.verbose);

    let config = cli.resolver_config()?;
    let resolver: SourceResolver = respath_runtime::build_default_resolver(&config);
    tracing::debug!("Source path: {:?}", resolver.source_paths());

    match &cli.command {
        Commands::Paths => paths::run(&resolver, cli.json),
        Commands::Resolve { name } => lookup::resolve(&resolver, name, cli.json),
        Commands::Cat { name } => lookup::cat(&resolver, name, cli.json),
        Commands::Manifest { filenames } => manifest::run(&resolver, filenames, cli.json),
        Commands::Ls { archive, prefix } => lookup::ls(&resolver, archive, prefix, cli.json),
    }
}
