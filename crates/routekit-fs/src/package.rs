//! Project `package.json` access and package-manager invocation.

use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// File name of the project's dependency manifest.
pub const PACKAGE_MANIFEST: &str = "package.json";

/// A project's `package.json`, held as a raw JSON document so fields this
/// crate does not model survive a load/save round trip.
#[derive(Debug, Clone)]
pub struct PackageManifest {
    path: PathBuf,
    document: Map<String, Value>,
}

impl PackageManifest {
    /// Load the manifest from `<root_directory>/package.json`.
    pub fn load(root_directory: &Path) -> Result<Self> {
        let path = root_directory.join(PACKAGE_MANIFEST);
        if !path.is_file() {
            return Err(Error::ManifestNotFound { path });
        }

        let content = std::fs::read_to_string(&path).map_err(|source| Error::io(&path, source))?;
        let value: Value =
            serde_json::from_str(&content).map_err(|source| Error::ManifestParse {
                path: path.clone(),
                message: source.to_string(),
            })?;
        let Value::Object(document) = value else {
            return Err(Error::ManifestParse {
                path,
                message: "expected a top-level object".to_string(),
            });
        };

        Ok(Self { path, document })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Declared version requirement for `name` under `dependencies`.
    pub fn dependency(&self, name: &str) -> Option<&str> {
        self.document.get("dependencies")?.get(name)?.as_str()
    }

    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependency(name).is_some()
    }

    /// Add or replace an entry under `dependencies`.
    pub fn add_dependency(&mut self, name: &str, version: &str) {
        let dependencies = self
            .document
            .entry("dependencies")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Some(map) = dependencies.as_object_mut() {
            map.insert(name.to_string(), Value::String(version.to_string()));
        }
    }

    /// Write the manifest back to disk.
    pub fn save(&self) -> Result<()> {
        let mut content = serde_json::to_string_pretty(&self.document).map_err(|source| {
            Error::ManifestParse {
                path: self.path.clone(),
                message: source.to_string(),
            }
        })?;
        content.push('\n');
        std::fs::write(&self.path, content).map_err(|source| Error::io(&self.path, source))
    }
}

/// Package managers recognized by lock-file detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

const LOCK_FILES: [(&str, PackageManager); 4] = [
    ("bun.lockb", PackageManager::Bun),
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("yarn.lock", PackageManager::Yarn),
    ("package-lock.json", PackageManager::Npm),
];

impl PackageManager {
    /// Detect the package manager from the lock file present in
    /// `root_directory`, or `None` when no lock file exists.
    pub fn detect(root_directory: &Path) -> Option<Self> {
        LOCK_FILES
            .iter()
            .find(|(lock_file, _)| root_directory.join(lock_file).is_file())
            .map(|(_, manager)| *manager)
    }

    /// The executable name for this manager.
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// Run `<manager> install` in `root_directory`, blocking the current
    /// cycle until the command completes or fails.
    pub async fn install(&self, root_directory: &Path) -> Result<()> {
        let command = self.command();
        tracing::info!(command, ?root_directory, "installing dependencies");

        let status = Command::new(command)
            .arg("install")
            .current_dir(root_directory)
            .status()
            .await
            .map_err(|_| Error::CommandFailed {
                command: format!("{command} install"),
            })?;

        if !status.success() {
            return Err(Error::CommandFailed {
                command: format!("{command} install"),
            });
        }
        Ok(())
    }
}
