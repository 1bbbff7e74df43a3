//! Configuration and route-manifest resolution engine for Routekit.
//!
//! Given a user-supplied configuration, a set of composable presets, and a
//! filesystem containing route-declaration source, this crate produces one
//! frozen, fully-resolved configuration plus a route manifest per cycle,
//! tolerating and recovering from invalid intermediate states during
//! watch-mode re-resolution.
//!
//! # Architecture
//!
//! `routekit-core` sits above the leaf crates and below the dev-tool
//! integration that drives it:
//!
//! ```text
//!        dev-tool integration (watcher, module runner)
//!                          |
//!                    routekit-core
//!                          |
//!                 +--------+--------+
//!                 |                 |
//!            routekit-fs     routekit-routes
//! ```
//!
//! A cycle flows through preset contribution, the config merge, cross-field
//! validation, route-tree evaluation, freezing, and preset post-processing —
//! see [`resolver::ConfigResolver`]. Route-loading failures after the first
//! cycle fall back to the last known-good manifest so a long-running dev
//! session survives transient authoring mistakes.

pub mod config;
pub mod context;
pub mod entry;
pub mod error;
pub mod evaluator;
pub mod hooks;
pub mod presets;
pub mod resolver;
pub mod session;

pub use config::{
    Frozen, Prerender, ResolvedConfig, RouterConfig, ServerModuleFormat, merge, merge_configs,
};
pub use context::{DevCommand, ResolveContext};
pub use entry::{BOT_DETECTION_PACKAGE, EntryFiles, SERVER_RUNTIME_PACKAGE, resolve_entry_files};
pub use error::{ConfigLoadError, Error, Result};
pub use evaluator::{ModuleError, RouteModuleOutput, RouteModuleRunner, SourceLocation};
pub use hooks::{
    AggregateHookError, BuildEndArgs, BuildEndHook, HookError, HookResult, PrerenderArgs,
    PrerenderHook, ServerBundlesArgs, ServerBundlesHook,
};
pub use presets::Preset;
pub use resolver::ConfigResolver;
pub use session::ResolutionSession;
