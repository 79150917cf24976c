use std::path::PathBuf;

/// URL of the Mojang version manifest.
pub const MANIFEST_URL: &str = "https://piston-meta.mojang.com/mc/game/version_manifest_v2.json";

/// File name of the local manifest snapshot.
pub const CACHE_FILE_NAME: &str = "version_manifest.json";

/// Maximum snapshot age in milliseconds before a refetch (24 hours)
pub const MAX_SNAPSHOT_AGE_MS: u64 = 24 * 60 * 60 * 1000;

/// Returns the path of the local manifest snapshot.
/// The snapshot lives in the process working directory; no environment
/// variables or config files are consulted.
pub fn cache_path() -> PathBuf {
    PathBuf::from(CACHE_FILE_NAME)
}
