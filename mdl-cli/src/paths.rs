//! Platform-specific directory paths.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "mdl";
const APPLICATION: &str = "mdl";

/// Get the cache directory for temporary/regenerable data.
///
/// - Linux: `$XDG_CACHE_HOME/mdl` or `~/.cache/mdl`
/// - macOS: `~/Library/Caches/dev.mdl.mdl`
/// - Windows: `C:\Users\<User>\AppData\Local\mdl\mdl\cache`
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the latest log file, falling back to the working directory when no
/// home directory can be determined.
pub fn log_file() -> PathBuf {
    cache_dir()
        .map(|dir| dir.join("latest.log"))
        .unwrap_or_else(|| PathBuf::from("mdl-render.log"))
}
