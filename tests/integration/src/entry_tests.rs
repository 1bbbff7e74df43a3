//! Entry-file resolution tests.

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use routekit_core::{
    ConfigResolver, DevCommand, Error, Frozen, ModuleError, ResolveContext, ResolvedConfig,
    RouteModuleOutput, RouteModuleRunner, RouterConfig, resolve_entry_files,
};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

struct EmptyRunner;

#[async_trait]
impl RouteModuleRunner for EmptyRunner {
    async fn execute_file(
        &self,
        _path: &Path,
    ) -> std::result::Result<RouteModuleOutput, ModuleError> {
        Ok(RouteModuleOutput::default())
    }
}

/// Build a project on disk and resolve its config for entry-file tests.
async fn resolved_config(temp: &TempDir, package_json: &str) -> Frozen<ResolvedConfig> {
    let app = temp.path().join("app");
    std::fs::create_dir_all(&app).unwrap();
    std::fs::write(app.join("root.tsx"), "").unwrap();
    std::fs::write(app.join("routes.ts"), "").unwrap();
    std::fs::write(temp.path().join("package.json"), package_json).unwrap();

    let context = ResolveContext::new(temp.path(), DevCommand::Serve);
    ConfigResolver::new(Arc::new(EmptyRunner))
        .resolve(&context, RouterConfig::default())
        .await
        .unwrap()
}

#[tokio::test]
async fn user_provided_entries_win_over_bundled_defaults() {
    let temp = TempDir::new().unwrap();
    let config = resolved_config(&temp, r#"{ "name": "demo" }"#).await;
    std::fs::write(temp.path().join("app/entry.client.tsx"), "").unwrap();
    std::fs::write(temp.path().join("app/entry.server.jsx"), "").unwrap();

    let defaults = TempDir::new().unwrap();
    let entries = resolve_entry_files(temp.path(), defaults.path(), &config)
        .await
        .unwrap();

    assert_eq!(
        entries.client_entry_path,
        temp.path().join("app/entry.client.tsx")
    );
    assert_eq!(
        entries.server_entry_path,
        temp.path().join("app/entry.server.jsx")
    );
}

#[tokio::test]
async fn missing_server_entry_falls_back_to_the_bundled_runtime_entry() {
    let temp = TempDir::new().unwrap();
    let config = resolved_config(
        &temp,
        r#"{
            "name": "demo",
            "dependencies": { "@routekit/node": "^1.0.0", "isbot": "^5" }
        }"#,
    )
    .await;

    let defaults = TempDir::new().unwrap();
    let entries = resolve_entry_files(temp.path(), defaults.path(), &config)
        .await
        .unwrap();

    assert_eq!(
        entries.client_entry_path,
        defaults.path().join("entry.client.tsx")
    );
    assert_eq!(
        entries.server_entry_path,
        defaults.path().join("entry.server.node.tsx")
    );
}

#[tokio::test]
async fn missing_server_runtime_dependency_is_an_error() {
    let temp = TempDir::new().unwrap();
    let config = resolved_config(
        &temp,
        r#"{ "name": "demo", "dependencies": { "isbot": "^5" } }"#,
    )
    .await;

    let defaults = TempDir::new().unwrap();
    let error = resolve_entry_files(temp.path(), defaults.path(), &config)
        .await
        .unwrap_err();
    assert!(matches!(error, Error::MissingRuntime));
}

#[tokio::test]
async fn a_user_server_entry_needs_no_runtime_dependency() {
    let temp = TempDir::new().unwrap();
    let config = resolved_config(&temp, r#"{ "name": "demo" }"#).await;
    std::fs::write(temp.path().join("app/entry.server.tsx"), "").unwrap();

    let defaults = TempDir::new().unwrap();
    let entries = resolve_entry_files(temp.path(), defaults.path(), &config)
        .await
        .unwrap();

    assert_eq!(
        entries.server_entry_path,
        temp.path().join("app/entry.server.tsx")
    );
    // The client entry still defaults independently.
    assert_eq!(
        entries.client_entry_path,
        defaults.path().join("entry.client.tsx")
    );
}
