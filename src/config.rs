//! Configuration discovery and effective settings resolution.
//!
//! lintsync reads `lintsync.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config.
//! Defaults:
//! - `source_dir`: `src`, scanned for `*.rs` files
//! - `macro`: `declare_lint`
//! - `readme`: `README.md`
//! - `entry`: `src/lib.rs` (holds the registration list)
//! - `marker`: `src/lib.rs` (must exist, proves we run from a checkout)
//! - `group`: `clippy`
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILES: [&str; 3] = ["lintsync.toml", "lintsync.yaml", "lintsync.yml"];
const DEFAULT_MARKER: &str = "src/lib.rs";

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `lintsync.toml|yaml`.
pub struct LintsyncConfig {
    pub source_dir: Option<String>,
    pub extension: Option<String>,
    #[serde(rename = "macro")]
    pub macro_name: Option<String>,
    pub readme: Option<String>,
    pub entry: Option<String>,
    pub marker: Option<String>,
    pub group: Option<String>,
    pub output: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the pipeline after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub source_dir: String,
    pub extension: String,
    pub macro_name: String,
    pub readme: String,
    pub entry: String,
    pub marker: String,
    pub group: String,
    pub output: String,
    /// Whether a config file was found and parsed.
    pub config_loaded: bool,
}

impl Effective {
    pub fn readme_path(&self) -> PathBuf {
        self.repo_root.join(&self.readme)
    }

    pub fn entry_path(&self) -> PathBuf {
        self.repo_root.join(&self.entry)
    }

    /// Whether the project-root marker file exists.
    pub fn has_marker(&self) -> bool {
        self.repo_root.join(&self.marker).is_file()
    }
}

/// Walk upward from `start` to detect the repository root.
///
/// `start` is resolved against the current directory first, so a relative
/// `.` climbs too. Stops at the first directory holding a
/// `lintsync.toml|yaml|yml`, the `marker` file, or a `.git` directory;
/// falls back to `start` itself.
pub fn detect_repo_root(start: &Path, marker: &str) -> PathBuf {
    let start: PathBuf = std::env::current_dir()
        .map(|cwd| cwd.join(start))
        .unwrap_or_else(|_| start.to_path_buf())
        .components()
        .collect();
    let mut cur = start.as_path();
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists())
            || cur.join(marker).is_file()
            || cur.join(".git").exists()
        {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start,
        }
    }
}

/// Load `LintsyncConfig` from `lintsync.toml` or `lintsync.yaml|yml` if present.
///
/// A config file that cannot be read or parsed is reported and ignored.
pub fn load_config(root: &Path) -> Option<LintsyncConfig> {
    let path = CONFIG_FILES
        .iter()
        .map(|f| root.join(f))
        .find(|p| p.exists())?;
    let s = match fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("ignoring {}: {}", path.display(), e);
            return None;
        }
    };
    let parsed = if path.extension().is_some_and(|e| e == "toml") {
        toml::from_str::<LintsyncConfig>(&s).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str::<LintsyncConfig>(&s).map_err(|e| e.to_string())
    };
    match parsed {
        Ok(cfg) => {
            log::debug!("loaded config from {}", path.display());
            Some(cfg)
        }
        Err(e) => {
            log::warn!("ignoring invalid {}: {}", path.display(), e);
            None
        }
    }
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(cli_repo_root: Option<&str>, cli_output: Option<&str>) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start, DEFAULT_MARKER);
    let loaded = load_config(&repo_root);
    let config_loaded = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    Effective {
        repo_root,
        source_dir: cfg.source_dir.unwrap_or_else(|| "src".to_string()),
        extension: cfg
            .extension
            .map(|e| e.trim_start_matches('.').to_string())
            .unwrap_or_else(|| "rs".to_string()),
        macro_name: cfg.macro_name.unwrap_or_else(|| "declare_lint".to_string()),
        readme: cfg.readme.unwrap_or_else(|| "README.md".to_string()),
        entry: cfg.entry.unwrap_or_else(|| "src/lib.rs".to_string()),
        marker: cfg.marker.unwrap_or_else(|| DEFAULT_MARKER.to_string()),
        group: cfg.group.unwrap_or_else(|| "clippy".to_string()),
        output,
        config_loaded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_config() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let eff = resolve_effective(dir.path().to_str(), None);
        assert_eq!(eff.repo_root, dir.path());
        assert_eq!(eff.source_dir, "src");
        assert_eq!(eff.extension, "rs");
        assert_eq!(eff.macro_name, "declare_lint");
        assert_eq!(eff.readme, "README.md");
        assert_eq!(eff.entry, "src/lib.rs");
        assert_eq!(eff.group, "clippy");
        assert_eq!(eff.output, "human");
        assert!(!eff.has_marker());
        assert!(!eff.config_loaded);
    }

    #[test]
    fn test_detect_stops_at_nearest_marker_before_ancestor_git() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join(".git")).unwrap();
        let project = root.join("crates/tool");
        fs::create_dir_all(project.join("src/types")).unwrap();
        fs::write(project.join("src/lib.rs"), "").unwrap();

        assert_eq!(detect_repo_root(&project.join("src/types"), "src/lib.rs"), project);
        assert_eq!(detect_repo_root(&root.join("crates"), "src/lib.rs"), root);
    }

    #[test]
    fn test_detect_resolves_relative_start_against_cwd() {
        let cwd = std::env::current_dir().unwrap();
        let found = detect_repo_root(Path::new("."), "no-such-marker");
        assert!(found.is_absolute());
        assert!(cwd.starts_with(&found));
    }

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("lintsync.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
source_dir = "lints"
extension = ".rs"
macro = "declare_tool_lint"
group = "tool"
output = "json"
    "#
        )
        .unwrap();
        let nested = root.join("lints/deep");
        fs::create_dir_all(&nested).unwrap();

        // Detection walks up from a nested directory to the config file
        let eff = resolve_effective(nested.to_str(), None);
        assert_eq!(eff.repo_root, root);
        assert_eq!(eff.source_dir, "lints");
        assert_eq!(eff.extension, "rs");
        assert_eq!(eff.macro_name, "declare_tool_lint");
        assert_eq!(eff.group, "tool");
        assert_eq!(eff.output, "json");
        assert!(eff.config_loaded);
    }

    #[test]
    fn test_load_yaml_and_cli_precedence() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("lintsync.yaml"),
            "readme: docs/LINTS.md\nentry: src/main.rs\noutput: json\n",
        )
        .unwrap();

        let eff = resolve_effective(root.to_str(), Some("human"));
        assert_eq!(eff.readme_path(), root.join("docs/LINTS.md"));
        assert_eq!(eff.entry_path(), root.join("src/main.rs"));
        assert_eq!(eff.output, "human");
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("lintsync.toml"), "group = [not toml").unwrap();
        assert!(load_config(root).is_none());
        let eff = resolve_effective(root.to_str(), None);
        assert_eq!(eff.group, "clippy");
        assert!(!eff.config_loaded);
    }
}
