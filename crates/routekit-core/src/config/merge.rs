//! Merge algebra over partial configurations.

use super::partial::{Prerender, RouterConfig};
use crate::hooks::BuildEndHook;
use crate::presets::Preset;
use std::collections::BTreeMap;

/// Merge two partial configs, `overlay` taking precedence.
///
/// An unset field on the overlay never clobbers a set field on the base.
/// Three fields combine instead of overriding when both sides set them:
///
/// - `build_end`: both hooks are invoked concurrently by the merged hook,
///   which completes once both complete and aggregates every failure;
/// - `future`: the flag maps are merged per key, the overlay winning per
///   flag rather than replacing the map wholesale;
/// - `presets`: the lists are concatenated, base presets first.
pub fn merge(base: RouterConfig, overlay: RouterConfig) -> RouterConfig {
    RouterConfig {
        app_directory: overlay.app_directory.or(base.app_directory),
        basename: overlay.basename.or(base.basename),
        build_directory: overlay.build_directory.or(base.build_directory),
        build_end: merge_build_end(base.build_end, overlay.build_end),
        future: merge_future(base.future, overlay.future),
        prerender: merge_prerender(base.prerender, overlay.prerender),
        presets: merge_presets(base.presets, overlay.presets),
        server_build_file: overlay.server_build_file.or(base.server_build_file),
        server_bundles: overlay.server_bundles.or(base.server_bundles),
        server_module_format: overlay.server_module_format.or(base.server_module_format),
        ssr: overlay.ssr.or(base.ssr),
    }
}

/// Left-to-right fold of [`merge`] over an ordered list of configs, later
/// configs taking precedence.
pub fn merge_configs<I>(configs: I) -> RouterConfig
where
    I: IntoIterator<Item = RouterConfig>,
{
    configs.into_iter().fold(RouterConfig::default(), merge)
}

fn merge_build_end(
    base: Option<BuildEndHook>,
    overlay: Option<BuildEndHook>,
) -> Option<BuildEndHook> {
    match (base, overlay) {
        (Some(base), Some(overlay)) => Some(BuildEndHook::merged(base, overlay)),
        (base, overlay) => overlay.or(base),
    }
}

fn merge_future(
    base: Option<BTreeMap<String, bool>>,
    overlay: Option<BTreeMap<String, bool>>,
) -> Option<BTreeMap<String, bool>> {
    match (base, overlay) {
        (Some(mut base), Some(overlay)) => {
            base.extend(overlay);
            Some(base)
        }
        (base, overlay) => overlay.or(base),
    }
}

fn merge_prerender(base: Option<Prerender>, overlay: Option<Prerender>) -> Option<Prerender> {
    overlay.or(base)
}

fn merge_presets(base: Option<Vec<Preset>>, overlay: Option<Vec<Preset>>) -> Option<Vec<Preset>> {
    match (base, overlay) {
        (Some(mut base), Some(overlay)) => {
            base.extend(overlay);
            Some(base)
        }
        (base, overlay) => overlay.or(base),
    }
}
