//! End-to-end resolution against a mock manifest host: fetch, cache on
//! disk, look up a version, and render the result.

use std::time::Duration;

use tempfile::TempDir;

use mcdate::catalog::format::{FormatMode, format_release_date};
use mcdate::catalog::resolver::resolve;
use mcdate::catalog::{CacheError, CatalogCache, HttpCatalogSource};

const MANIFEST_BODY: &str = r#"{
    "latest": {"release": "1.20.1", "snapshot": "23w31a"},
    "versions": [
        {"id": "1.20.1", "type": "release", "url": "https://example.invalid/1.20.1.json", "releaseTime": "2023-06-12T13:25:17+00:00"},
        {"id": "1.17", "type": "release", "url": "https://example.invalid/1.17.json", "releaseTime": "2021-06-08T11:00:00+00:00"}
    ]
}"#;

const MAX_AGE: Duration = Duration::from_millis(86_400_000);

fn mock_manifest_server() -> (mockito::ServerGuard, mockito::Mock) {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/mc/game/version_manifest_v2.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(MANIFEST_BODY)
        .expect(1)
        .create();
    (server, mock)
}

fn cache_for(server: &mockito::ServerGuard, dir: &TempDir) -> CatalogCache<HttpCatalogSource> {
    let url = format!("{}/mc/game/version_manifest_v2.json", server.url());
    CatalogCache::new(
        dir.path().join("version_manifest.json"),
        MAX_AGE,
        HttpCatalogSource::new(&url),
    )
}

#[test]
fn resolves_and_formats_a_release_date_in_every_mode() {
    let (server, mock) = mock_manifest_server();
    let dir = TempDir::new().unwrap();
    let cache = cache_for(&server, &dir);

    cache.ensure_fresh().unwrap();
    let manifest = cache.read().unwrap();

    let release_date = resolve(&manifest, "1.20.1").unwrap().unwrap();

    assert_eq!(
        format_release_date(&release_date, FormatMode::Epoch),
        "1686576317 +0000"
    );
    assert_eq!(
        format_release_date(&release_date, FormatMode::Iso),
        "2023-06-12T13:25:17+00:00"
    );
    assert_eq!(
        format_release_date(&release_date, FormatMode::Verbose),
        "2023-06-12 13:25:17 +00:00"
    );

    mock.assert();
}

#[test]
fn missing_snapshot_triggers_exactly_one_fetch() {
    let (server, mock) = mock_manifest_server();
    let dir = TempDir::new().unwrap();
    let cache = cache_for(&server, &dir);

    assert!(!dir.path().join("version_manifest.json").exists());

    cache.ensure_fresh().unwrap();
    assert!(dir.path().join("version_manifest.json").exists());

    // Still within the freshness window: a second run stays off the network
    cache.ensure_fresh().unwrap();
    let manifest = cache.read().unwrap();
    assert!(resolve(&manifest, "1.17").unwrap().is_some());

    mock.assert();
}

#[test]
fn unlisted_version_resolves_to_none_not_an_error() {
    let (server, _mock) = mock_manifest_server();
    let dir = TempDir::new().unwrap();
    let cache = cache_for(&server, &dir);

    cache.ensure_fresh().unwrap();
    let manifest = cache.read().unwrap();

    assert!(resolve(&manifest, "nonexistent").unwrap().is_none());
}

#[test]
fn directory_at_cache_path_fails_without_touching_the_network() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/mc/game/version_manifest_v2.json")
        .expect(0)
        .create();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("version_manifest.json");
    std::fs::create_dir(&path).unwrap();

    let url = format!("{}/mc/game/version_manifest_v2.json", server.url());
    let cache = CatalogCache::new(path, MAX_AGE, HttpCatalogSource::new(&url));

    let err = cache.ensure_fresh().unwrap_err();
    assert!(matches!(err, CacheError::NotAFile(_)));

    mock.assert();
}

#[test]
fn http_error_surfaces_as_fetch_failure() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/mc/game/version_manifest_v2.json")
        .with_status(502)
        .create();

    let dir = TempDir::new().unwrap();
    let url = format!("{}/mc/game/version_manifest_v2.json", server.url());
    let cache = CatalogCache::new(
        dir.path().join("version_manifest.json"),
        MAX_AGE,
        HttpCatalogSource::new(&url),
    );

    let err = cache.ensure_fresh().unwrap_err();
    assert!(matches!(err, CacheError::Fetch(_)));
    assert!(!dir.path().join("version_manifest.json").exists());

    mock.assert();
}
