//! Configuration model
//!
//! The configuration flows through three shapes: sparse [`RouterConfig`]
//! records from the user and from presets, the merge algebra in [`merge`]
//! that folds them together with per-field combination rules, and the total
//! [`ResolvedConfig`] published behind [`Frozen`] once per cycle.

pub mod freeze;
pub mod merge;
pub mod partial;
pub mod resolved;

pub use freeze::Frozen;
pub use merge::{merge, merge_configs};
pub use partial::{Prerender, RouterConfig, ServerModuleFormat};
pub use resolved::ResolvedConfig;
