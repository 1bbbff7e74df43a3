//! Entry-file probing and project manifest access for Routekit.
//!
//! The pieces of the engine that touch the filesystem directly: locating
//! logical entry files by fixed-extension probing, and reading/updating the
//! project's `package.json` together with the package manager that owns it.

pub mod entry;
pub mod error;
pub mod package;

pub use entry::{ENTRY_EXTENSIONS, find_entry};
pub use error::{Error, Result};
pub use package::{PACKAGE_MANIFEST, PackageManager, PackageManifest};
