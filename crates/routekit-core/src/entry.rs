//! Client and server entry-file resolution.

use crate::config::ResolvedConfig;
use crate::error::{Error, Result};
use routekit_fs::{PackageManager, PackageManifest, find_entry};
use std::path::{Path, PathBuf};

/// npm package providing the default server runtime entry.
pub const SERVER_RUNTIME_PACKAGE: &str = "@routekit/node";

/// npm package required by the default server entry for bot detection.
pub const BOT_DETECTION_PACKAGE: &str = "isbot";

const BOT_DETECTION_VERSION: &str = "^5";
const DEFAULT_CLIENT_ENTRY: &str = "entry.client.tsx";
const DEFAULT_SERVER_ENTRY: &str = "entry.server.node.tsx";

/// Resolved entry files for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFiles {
    pub client_entry_path: PathBuf,
    pub server_entry_path: PathBuf,
}

/// Resolve the client and server entry files for `config`.
///
/// User-provided entries under the app directory win; otherwise bundled
/// defaults from `defaults_directory` are used. A defaulted server entry
/// requires the server runtime package to be declared in `package.json` —
/// and if the bot-detection package is missing, it is added to the manifest
/// and the detected package manager's install command runs to completion
/// before resolution continues. This is the one place the engine mutates
/// project files.
pub async fn resolve_entry_files(
    root_directory: &Path,
    defaults_directory: &Path,
    config: &ResolvedConfig,
) -> Result<EntryFiles> {
    let app_directory = &config.app_directory;

    let user_client_entry = find_entry(app_directory, "entry.client");
    let user_server_entry = find_entry(app_directory, "entry.server");

    let server_entry_file = match &user_server_entry {
        Some(file) => file.clone(),
        None => {
            let mut manifest = PackageManifest::load(root_directory)?;
            if !manifest.has_dependency(SERVER_RUNTIME_PACKAGE) {
                return Err(Error::MissingRuntime);
            }

            if !manifest.has_dependency(BOT_DETECTION_PACKAGE) {
                tracing::info!(
                    "adding `{BOT_DETECTION_PACKAGE}@5` to your package.json, you should commit this change"
                );
                manifest.add_dependency(BOT_DETECTION_PACKAGE, BOT_DETECTION_VERSION);
                manifest.save()?;

                let package_manager =
                    PackageManager::detect(root_directory).unwrap_or(PackageManager::Npm);
                package_manager.install(root_directory).await?;
            }

            PathBuf::from(DEFAULT_SERVER_ENTRY)
        }
    };

    let client_entry_path = match &user_client_entry {
        Some(file) => app_directory.join(file),
        None => defaults_directory.join(DEFAULT_CLIENT_ENTRY),
    };
    let server_entry_path = if user_server_entry.is_some() {
        app_directory.join(&server_entry_file)
    } else {
        defaults_directory.join(&server_entry_file)
    };

    Ok(EntryFiles {
        client_entry_path,
        server_entry_path,
    })
}
