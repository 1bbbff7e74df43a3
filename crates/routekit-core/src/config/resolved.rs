//! The total, resolved configuration record.

use super::partial::{Prerender, ServerModuleFormat};
use crate::hooks::{BuildEndHook, ServerBundlesHook};
use routekit_routes::RouteManifest;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// The fully-resolved configuration for one cycle.
///
/// Every field is populated, defaulted where the user and presets provided
/// nothing. Constructed exactly once per resolution cycle and published only
/// behind [`Frozen`](super::Frozen); the next cycle supersedes the value, it
/// is never mutated in place.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Absolute path to the application source directory.
    pub app_directory: PathBuf,

    /// The app basename.
    pub basename: String,

    /// Absolute path to the build output directory.
    pub build_directory: PathBuf,

    /// Called after a full build completes.
    pub build_end: Option<BuildEndHook>,

    /// Enabled future feature flags.
    pub future: BTreeMap<String, bool>,

    /// Normalized prerender specification.
    pub prerender: Option<Prerender>,

    /// Every available route, keyed by route id.
    pub routes: RouteManifest,

    /// File name of the server build output.
    pub server_build_file: String,

    /// Assigns routes to server bundles.
    pub server_bundles: Option<ServerBundlesHook>,

    /// Output format of the server build.
    pub server_module_format: ServerModuleFormat,

    /// Whether server-side rendering is enabled.
    pub ssr: bool,
}
