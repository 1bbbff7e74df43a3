//! End-to-end resolution tests against a real filesystem.
//!
//! The route module runner used here parses the route config file as JSON,
//! standing in for the dev tool's module execution pipeline while keeping
//! the full locate → execute → validate → flatten flow on disk.

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use routekit_core::{
    ConfigResolver, DevCommand, Error, ModuleError, Preset, ResolveContext, RouteModuleOutput,
    RouteModuleRunner, RouterConfig,
};
use routekit_routes::{ROOT_ROUTE_ID, RouteNode};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

struct JsonRouteRunner;

#[async_trait]
impl RouteModuleRunner for JsonRouteRunner {
    async fn execute_file(
        &self,
        path: &Path,
    ) -> std::result::Result<RouteModuleOutput, ModuleError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|error| ModuleError::new(error.to_string()))?;
        let routes: Vec<RouteNode> = serde_json::from_str(&content)
            .map_err(|error| ModuleError::new(format!("invalid route config: {error}")))?;
        Ok(RouteModuleOutput { routes })
    }
}

fn write_project(temp: &TempDir, routes_json: &str) {
    let app = temp.path().join("app");
    std::fs::create_dir_all(&app).unwrap();
    std::fs::write(app.join("root.tsx"), "export default function Root() {}\n").unwrap();
    std::fs::write(app.join("routes.ts"), routes_json).unwrap();
}

fn serve_context(root: &Path) -> ResolveContext {
    ResolveContext::new(root, DevCommand::Serve)
}

#[tokio::test]
async fn a_watch_mode_session_survives_a_broken_route_config() {
    let temp = TempDir::new().unwrap();
    write_project(
        &temp,
        r#"[{ "path": "about", "file": "routes/about.tsx" }]"#,
    );

    let mut resolver = ConfigResolver::new(Arc::new(JsonRouteRunner));

    let first = resolver
        .resolve(&serve_context(temp.path()), RouterConfig::default())
        .await
        .unwrap();
    assert!(first.routes.contains("routes/about"));
    assert!(!resolver.session().is_first_load());

    // The user saves a file with a syntax error. The session keeps serving
    // the previous manifest instead of crashing.
    std::fs::write(temp.path().join("app/routes.ts"), "[{ oops").unwrap();
    let second = resolver
        .resolve(
            &serve_context(temp.path()).with_route_config_changed(true),
            RouterConfig::default(),
        )
        .await
        .unwrap();
    assert_eq!(second.routes, first.routes);

    // The user fixes the file; the new manifest replaces the stale one.
    std::fs::write(
        temp.path().join("app/routes.ts"),
        r#"[
            { "path": "about", "file": "routes/about.tsx" },
            { "path": "contact", "file": "routes/contact.tsx" }
        ]"#,
    )
    .unwrap();
    let third = resolver
        .resolve(
            &serve_context(temp.path()).with_route_config_changed(true),
            RouterConfig::default(),
        )
        .await
        .unwrap();
    assert!(third.routes.contains("routes/contact"));
    assert_ne!(third.routes, first.routes);
}

#[tokio::test]
async fn the_same_broken_config_is_fatal_on_a_fresh_session() {
    let temp = TempDir::new().unwrap();
    write_project(&temp, "[{ oops");

    let mut resolver = ConfigResolver::new(Arc::new(JsonRouteRunner));
    let error = resolver
        .resolve(&serve_context(temp.path()), RouterConfig::default())
        .await
        .unwrap_err();
    assert!(error.is_route_load_error());
    assert!(resolver.session().is_first_load());
}

#[tokio::test]
async fn independent_sessions_do_not_share_fallback_state() {
    let temp = TempDir::new().unwrap();
    write_project(
        &temp,
        r#"[{ "path": "about", "file": "routes/about.tsx" }]"#,
    );

    let mut warm = ConfigResolver::new(Arc::new(JsonRouteRunner));
    warm.resolve(&serve_context(temp.path()), RouterConfig::default())
        .await
        .unwrap();

    std::fs::write(temp.path().join("app/routes.ts"), "[{ oops").unwrap();

    // The warmed-up session falls back; a fresh one has nothing to fall
    // back to and fails.
    warm.resolve(&serve_context(temp.path()), RouterConfig::default())
        .await
        .unwrap();

    let mut fresh = ConfigResolver::new(Arc::new(JsonRouteRunner));
    fresh
        .resolve(&serve_context(temp.path()), RouterConfig::default())
        .await
        .unwrap_err();
}

#[tokio::test]
async fn config_file_and_presets_combine_end_to_end() {
    let temp = TempDir::new().unwrap();
    write_project(&temp, "[]");

    let mut user_config = RouterConfig::parse(
        r#"
basename = "/docs"
build_directory = "dist"

[future]
unstable_lazy_manifest = true
"#,
    )
    .unwrap();
    user_config.presets = Some(vec![
        Preset::new("platform").with_config(|_| async {
            Ok(RouterConfig {
                server_build_file: Some("platform.js".to_string()),
                ..RouterConfig::default()
            })
        }),
    ]);

    let context = serve_context(temp.path()).with_public_path("/docs");
    let mut resolver = ConfigResolver::new(Arc::new(JsonRouteRunner));
    let config = resolver.resolve(&context, user_config).await.unwrap();

    assert_eq!(config.basename, "/docs");
    assert_eq!(config.build_directory, temp.path().join("dist"));
    assert_eq!(config.server_build_file, "platform.js");
    assert_eq!(config.future.get("unstable_lazy_manifest"), Some(&true));
    assert_eq!(config.routes.len(), 1);
}

#[tokio::test]
async fn the_demo_fixture_app_resolves() {
    let fixture = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/apps/demo-app");

    let mut resolver = ConfigResolver::new(Arc::new(JsonRouteRunner));
    let config = resolver
        .resolve(&serve_context(&fixture), RouterConfig::default())
        .await
        .unwrap();

    assert!(config.routes.contains(ROOT_ROUTE_ID));
    assert!(config.routes.contains("routes/home"));
    assert_eq!(
        config.routes.get("routes/home").unwrap().parent_id.as_deref(),
        Some(ROOT_ROUTE_ID)
    );
}

#[tokio::test]
async fn basename_mismatch_is_fatal_even_after_a_good_cycle() {
    let temp = TempDir::new().unwrap();
    write_project(&temp, "[]");

    let mut resolver = ConfigResolver::new(Arc::new(JsonRouteRunner));
    resolver
        .resolve(&serve_context(temp.path()), RouterConfig::default())
        .await
        .unwrap();

    let user_config = RouterConfig {
        basename: Some("/docs".to_string()),
        ..RouterConfig::default()
    };
    let context = serve_context(temp.path()).with_public_path("/base/");
    let error = resolver.resolve(&context, user_config).await.unwrap_err();
    assert!(matches!(error, Error::BasenameMismatch { .. }));
}
