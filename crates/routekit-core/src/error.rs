//! Error types for routekit-core

use crate::evaluator::ModuleError;
use std::path::PathBuf;

/// Result type for routekit-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Route-declaration loading failures, classified.
///
/// Recoverable after the first cycle: the resolver falls back to the last
/// known-good manifest instead of failing the cycle. Fatal on the first
/// cycle, when no prior manifest exists.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    /// No route config module exists under the app directory
    #[error("Route config file not found at \"{path}\".")]
    NotFound { path: PathBuf },

    /// The route config module failed to execute
    #[error("Route config in \"{file}\" is invalid.")]
    Evaluation {
        file: String,
        #[source]
        source: ModuleError,
    },

    /// The evaluated route tree failed structural validation
    #[error(transparent)]
    Validation(#[from] routekit_routes::Error),
}

/// Errors that can occur during configuration resolution
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No root route module exists under the app directory
    #[error("Could not find a root route module in the app directory as \"{path}\"")]
    MissingRootRoute { path: PathBuf },

    /// Route-declaration loading failed
    #[error(transparent)]
    ConfigLoad(#[from] ConfigLoadError),

    /// The `prerender` field has an unsupported shape; fatal at any cycle
    #[error(
        "The `prerender` config must be a boolean, an array of string paths, or a function returning a boolean or array of string paths"
    )]
    InvalidPrerenderShape,

    /// The configured basename contradicts the dev server's base path;
    /// fatal at any cycle
    #[error(
        "When using the `basename` config and the dev server `base` config, the `basename` config must begin with `base` for the default dev server (basename: \"{basename}\", base: \"{public_path}\")"
    )]
    BasenameMismatch {
        basename: String,
        public_path: String,
    },

    /// No server entry could be determined
    #[error(
        "Could not determine server runtime. Please install @routekit/node, or provide a custom entry.server.tsx/jsx file in your app directory."
    )]
    MissingRuntime,

    /// A preset was supplied without a name
    #[error("Routekit presets must have a `name` property defined.")]
    UnnamedPreset,

    /// A preset's config-contribution hook failed
    #[error("Preset \"{preset}\" config hook failed: {message}")]
    PresetConfig { preset: String, message: String },

    /// A preset's resolved-notification hook failed
    #[error("Preset \"{preset}\" resolved hook failed: {message}")]
    PresetResolved { preset: String, message: String },

    // Transparent wrappers for underlying crate errors
    /// Route model error from routekit-routes
    #[error(transparent)]
    Routes(#[from] routekit_routes::Error),

    /// Filesystem error from routekit-fs
    #[error(transparent)]
    Fs(#[from] routekit_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}

impl Error {
    /// Whether this is a route-loading failure eligible for the
    /// stale-manifest fallback after the first cycle.
    pub fn is_route_load_error(&self) -> bool {
        matches!(self, Error::MissingRootRoute { .. } | Error::ConfigLoad(_))
    }
}
