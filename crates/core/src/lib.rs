//! Resolve logical resource names (`cljs/core.cljs`) to content held in
//! plain directories, jar archives, or a table embedded in the host binary.

pub mod archive;
pub mod cache;
pub mod completion;
pub mod config;
pub mod descriptor;
pub mod embedded;
pub mod error;
pub mod export;
pub mod logging;
pub mod manifest;
pub mod path;
pub mod probe;
pub mod reader;
pub mod registry;
pub mod resolver;

pub use config::{Mode, ResolverConfig};
pub use descriptor::{ManifestMatch, ResourceDescriptor, SourceContent};
pub use embedded::{EmbeddedResources, EmbeddedTable};
pub use error::{Result, SourceError};
pub use registry::{LocationKind, SourceLocation, SourceRegistry};
pub use resolver::SourceResolver;
