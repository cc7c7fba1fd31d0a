//! Supporting helpers: colored message prefixes and path display.

use owo_colors::OwoColorize;
use std::path::Path;

pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if colors_enabled() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

/// Display `path` relative to `root` when possible (`README.md`, not
/// `/home/me/project/README.md`).
pub fn rel_to_root(path: &Path, root: &Path) -> String {
    pathdiff::diff_paths(path, root)
        .filter(|p| !p.as_os_str().is_empty() && !p.starts_with(".."))
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}
