//! End-to-end tests for the `resource-routes` binary.

use std::process::Command;

use resource_routes_http::{ActionMethod, ResourceCollection, ResourceEndpoint, ResourceModule};
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_resource-routes");

fn write_registry(dir: &TempDir) -> String {
    let mut resources: ResourceCollection = ResourceCollection::new("/api");
    resources.register(
        "test",
        Some(
            ResourceModule::new()
                .with_action("index", ())
                .with_action("show", ())
                .with_action("actionWithDetail", ()),
        ),
        vec![ResourceEndpoint::new(
            ActionMethod::Get,
            "/:id/action/:detail",
            "actionWithDetail",
        )],
    );

    let path = dir.path().join("routes.json");
    std::fs::write(&path, resources.to_json_string().unwrap()).unwrap();
    path.to_str().unwrap().to_string()
}

fn run(args: &[&str]) -> (bool, String, String) {
    let output = Command::new(BIN)
        .args(args)
        .env_remove("ROUTES_URL_ROOT")
        .env_remove("ROUTES_GLOBAL_PATH_PREFIX")
        .env("ROUTES_LOG_LEVEL", "error")
        .output()
        .unwrap();
    (
        output.status.success(),
        String::from_utf8(output.stdout).unwrap(),
        String::from_utf8(output.stderr).unwrap(),
    )
}

#[test]
fn test_routes_lists_endpoints() {
    let dir = TempDir::new().unwrap();
    let file = write_registry(&dir);

    let (ok, stdout, _) = run(&["routes", &file]);
    assert!(ok);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("GET"));
    assert!(lines[0].contains("/api/test/:id/action/:detail"));
    assert!(lines[0].ends_with("test#actionWithDetail"));
}

#[test]
fn test_path_command() {
    let dir = TempDir::new().unwrap();
    let file = write_registry(&dir);

    let (ok, stdout, _) = run(&["path", &file, "test", "actionWithDetail", "1", "some_detail"]);
    assert!(ok);
    assert_eq!(stdout.trim(), "/api/test/1/action/some_detail");
}

#[test]
fn test_url_root_from_settings_file() {
    let dir = TempDir::new().unwrap();
    let file = write_registry(&dir);
    let settings = dir.path().join("settings.toml");
    std::fs::write(&settings, "url_root = \"http://example.com\"\n").unwrap();

    let (ok, stdout, _) = run(&[
        "url",
        &file,
        "test",
        "show",
        "1",
        "--settings",
        settings.to_str().unwrap(),
    ]);
    assert!(ok);
    assert_eq!(stdout.trim(), "http://example.com/api/test/1");
}

#[test]
fn test_failure_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let file = write_registry(&dir);

    let (ok, stdout, stderr) = run(&["url", &file, "test", "show", "1"]);
    assert!(!ok);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Url root not specified"));

    let (ok, _, stderr) = run(&["path", &file, "missing", "index"]);
    assert!(!ok);
    assert!(stderr.contains("resource_not_found"));
}
