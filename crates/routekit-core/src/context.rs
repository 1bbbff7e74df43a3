//! Per-cycle resolution inputs.

use std::path::PathBuf;

/// The dev-tool command a cycle runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DevCommand {
    /// Serving the app from source (dev server).
    Serve,
    /// Producing a build.
    Build,
}

/// Inputs for one resolution cycle, supplied by the embedding dev tool.
#[derive(Debug, Clone)]
pub struct ResolveContext {
    /// Project root directory. Expected to be absolute.
    pub root_directory: PathBuf,

    /// Command the cycle runs under.
    pub command: DevCommand,

    /// Serving base path configured on the embedding dev server.
    pub public_path: String,

    /// Whether the dev server runs in middleware mode, which suppresses the
    /// basename/base-path compatibility check.
    pub middleware_mode: bool,

    /// Whether the route config module changed since the previous cycle.
    pub route_config_changed: bool,
}

impl ResolveContext {
    pub fn new(root_directory: impl Into<PathBuf>, command: DevCommand) -> Self {
        Self {
            root_directory: root_directory.into(),
            command,
            public_path: "/".to_string(),
            middleware_mode: false,
            route_config_changed: false,
        }
    }

    pub fn with_public_path(mut self, public_path: impl Into<String>) -> Self {
        self.public_path = public_path.into();
        self
    }

    pub fn with_middleware_mode(mut self, enabled: bool) -> Self {
        self.middleware_mode = enabled;
        self
    }

    pub fn with_route_config_changed(mut self, changed: bool) -> Self {
        self.route_config_changed = changed;
        self
    }
}
