//! Locating the engine's runtime data directory.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Cached path to the directory containing the engine's runtime data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Resolve the most likely location of the runtime data directory.
fn detect_data_root() -> PathBuf {
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    candidate_roots(exe_dir.as_deref())
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from("vengeance_engine/data"))
}

/// Directories searched for data, most preferred first.
fn candidate_roots(exe_dir: Option<&Path>) -> Vec<PathBuf> {
    // Common layouts: workspace root and flattened `data/`.
    let mut candidates = vec![PathBuf::from("vengeance_engine/data"), PathBuf::from("data")];

    if let Some(dir) = exe_dir {
        candidates.push(dir.join("vengeance_engine/data"));
        candidates.push(dir.join("data"));

        if let Some(parent) = dir.parent() {
            candidates.push(parent.join("vengeance_engine/data"));
            candidates.push(parent.join("data"));
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_layout_is_preferred() {
        let roots = candidate_roots(Some(Path::new("/opt/vengeance/bin")));
        assert_eq!(roots[0], PathBuf::from("vengeance_engine/data"));
        assert!(roots.contains(&PathBuf::from("/opt/vengeance/bin/data")));
        assert!(roots.contains(&PathBuf::from("/opt/vengeance/data")));
    }

    #[test]
    fn data_path_joins_relative() {
        assert!(data_path("world.json").ends_with("world.json"));
    }
}
