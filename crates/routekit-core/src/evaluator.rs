//! Route tree evaluation.
//!
//! Evaluating the user's route config module is delegated to an external
//! [`RouteModuleRunner`]; this module locates the files involved, normalizes
//! the runner's output into a validated [`RouteManifest`], and classifies
//! every failure into the [`ConfigLoadError`] taxonomy so the orchestrator
//! can apply the stale-manifest fallback policy.

use crate::error::{ConfigLoadError, Error, Result};
use async_trait::async_trait;
use routekit_fs::find_entry;
use routekit_routes::{RouteManifest, RouteNode, flatten_route_tree, validate_route_tree};
use std::fmt;
use std::path::{Path, PathBuf};

/// Logical name of the root route module within the app directory.
pub const ROOT_ROUTE_BASENAME: &str = "root";

/// Logical name of the route config module within the app directory.
pub const ROUTES_MODULE_BASENAME: &str = "routes";

/// Source position reported by a module runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: PathBuf,
    pub line: u32,
    pub column: u32,
}

/// Failure surfaced by a module runner, with optional source context.
#[derive(Debug, Clone)]
pub struct ModuleError {
    pub message: String,
    pub location: Option<SourceLocation>,
    pub frame: Option<String>,
}

impl ModuleError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
            frame: None,
        }
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.frame = Some(frame.into());
        self
    }
}

impl fmt::Display for ModuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ModuleError {}

/// Output of executing a route config module.
#[derive(Debug, Clone, Default)]
pub struct RouteModuleOutput {
    /// The declared route tree.
    pub routes: Vec<RouteNode>,
}

/// External collaborator that executes a route config module.
///
/// Module transform, caching and invalidation are the runner's concern. An
/// export that resolves asynchronously is awaited by the runner, so by the
/// time `execute_file` returns, the tree has one normalized shape.
#[async_trait]
pub trait RouteModuleRunner: Send + Sync {
    async fn execute_file(
        &self,
        path: &Path,
    ) -> std::result::Result<RouteModuleOutput, ModuleError>;
}

/// Evaluate the route config module under `app_directory` into a manifest.
///
/// The returned manifest always leads with the synthetic root entry, even
/// for an empty route tree. Failures classify as: missing root route module,
/// missing route config module, module execution failure, or structural
/// validation failure.
pub async fn evaluate_routes(
    runner: &dyn RouteModuleRunner,
    root_directory: &Path,
    app_directory: &Path,
) -> Result<RouteManifest> {
    let Some(root_route_file) = find_entry(app_directory, ROOT_ROUTE_BASENAME) else {
        return Err(Error::MissingRootRoute {
            path: display_relative(root_directory, &app_directory.join("root.tsx")),
        });
    };

    let mut manifest = RouteManifest::new(root_route_file.to_string_lossy().into_owned());

    let Some(route_config_file) = find_entry(app_directory, ROUTES_MODULE_BASENAME) else {
        return Err(ConfigLoadError::NotFound {
            path: display_relative(root_directory, &app_directory.join("routes.ts")),
        }
        .into());
    };

    let module_path = app_directory.join(&route_config_file);
    tracing::debug!(?module_path, "evaluating route config module");

    let output =
        runner
            .execute_file(&module_path)
            .await
            .map_err(|source| ConfigLoadError::Evaluation {
                file: route_config_file.to_string_lossy().into_owned(),
                source,
            })?;

    validate_route_tree(&output.routes).map_err(ConfigLoadError::Validation)?;
    manifest.extend(flatten_route_tree(&output.routes));

    Ok(manifest)
}

/// Human-readable diagnostic for a route-loading failure.
///
/// Recognized configuration problems render as a single friendly line.
/// Module execution failures include the source location and code frame when
/// the runner supplies them, else the raw error text.
pub fn format_route_error(error: &Error, app_directory: &Path) -> String {
    match error {
        Error::ConfigLoad(ConfigLoadError::Evaluation { file, source }) => {
            let mut lines = vec![format!("Route config in \"{file}\" is invalid."), String::new()];
            match (&source.location, &source.frame) {
                (Some(location), Some(frame)) => {
                    let position = display_relative(app_directory, &location.file);
                    lines.push(format!(
                        "{}:{}:{}",
                        position.display(),
                        location.line,
                        location.column
                    ));
                    lines.push(frame.trim().to_string());
                }
                _ => lines.push(source.message.clone()),
            }
            lines.join("\n")
        }
        other => other.to_string(),
    }
}

fn display_relative(base: &Path, target: &Path) -> PathBuf {
    target
        .strip_prefix(base)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| target.to_path_buf())
}
