//! Where the demo keeps its config file and logs.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Name of the log file written by the running demo.
const LATEST_LOG: &str = "latest.log";

/// Archived logs kept after rotation.
const MAX_OLD_LOGS: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "tabula", "tabula")
}

/// Directory holding `latest.log` and its archives, e.g. `~/.cache/tabula`.
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Directory searched for `config.json`, e.g. `~/.config/tabula`.
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// `config.json` holding [`DemoConfig`](crate::config::DemoConfig).
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// Log file for this run.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive the previous run's log under a timestamp and prune old archives.
///
/// Runs before the logger opens `latest.log`.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    let latest = cache.join(LATEST_LOG);

    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let _ = fs::rename(&latest, cache.join(format!("{}.log", stamp)));
    }

    prune_archives(&cache, MAX_OLD_LOGS);
}

/// Delete all but the `keep` newest archived logs in `dir`.
fn prune_archives(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut archives: Vec<_> = entries
        .filter_map(Result::ok)
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .map(|entry| {
            let modified = entry.metadata().and_then(|m| m.modified()).ok();
            (modified, entry.path())
        })
        .collect();

    archives.sort();
    let excess = archives.len().saturating_sub(keep);
    for (_, path) in archives.into_iter().take(excess) {
        let _ = fs::remove_file(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_keeps_latest_and_newest_archive() {
        let dir = std::env::temp_dir().join(format!("tabula-logs-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        for name in ["a.log", "b.log", "c.log", "latest.log", "notes.txt"] {
            fs::write(dir.join(name), name).unwrap();
        }

        prune_archives(&dir, 1);

        let mut left: Vec<_> = fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        left.sort();
        assert!(left.contains(&"latest.log".to_string()));
        assert!(left.contains(&"notes.txt".to_string()));
        assert_eq!(left.iter().filter(|n| n.ends_with(".log")).count(), 2);

        fs::remove_dir_all(&dir).unwrap();
    }
}
