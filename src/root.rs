use crate::errors::MeldError;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, trace};

/// Resolves `.` and `..` segments without touching the filesystem.
///
/// `..` directly under a root or drive prefix is dropped; leading `..` of a
/// relative path is kept.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }
    parts.iter().collect()
}

/// Computes the deepest directory that contains every path in `paths`.
///
/// Returns `Ok(None)` for an empty list. Relative inputs sharing no
/// directory resolve to `.`. Mixing absolute and relative paths, or paths
/// on different drives, has no common root and fails.
pub fn resolve_common_root(paths: &[String]) -> Result<Option<PathBuf>, MeldError> {
    if paths.is_empty() {
        return Ok(None);
    }

    let normalized: Vec<PathBuf> = paths
        .iter()
        .map(|p| normalize_lexically(Path::new(p)))
        .collect();

    let anchor = anchor_of(&normalized[0]);
    for (raw, path) in paths.iter().zip(&normalized) {
        if anchor_of(path) != anchor {
            return Err(MeldError::PathResolutionError(format!(
                "'{}' and '{}' do not share a root",
                paths[0], raw
            )));
        }
    }

    let mut common = parent_components(&normalized[0]);
    for path in &normalized[1..] {
        let parent = parent_components(path);
        let shared = common
            .iter()
            .zip(&parent)
            .take_while(|(a, b)| a == b)
            .count();
        common.truncate(shared);
    }

    let root: PathBuf = common.iter().collect();
    let root = if root.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        root
    };
    debug!("Common root: {}", root.display());
    Ok(Some(root))
}

/// Expresses `path` relative to `root`, always with `/` separators.
pub fn relative_to(path: &Path, root: &Path) -> Result<String, MeldError> {
    let path = normalize_lexically(path);
    let root = normalize_lexically(root);

    if anchor_of(&path) != anchor_of(&root) {
        return Err(MeldError::PathResolutionError(format!(
            "'{}' is not under '{}'",
            path.display(),
            root.display()
        )));
    }

    let relative = path.strip_prefix(&root).map_err(|_| {
        MeldError::PathResolutionError(format!(
            "'{}' is not under '{}'",
            path.display(),
            root.display()
        ))
    })?;

    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    trace!("Relative path of {}: {}", path.display(), joined);

    if joined.is_empty() {
        Ok(".".to_owned())
    } else {
        Ok(joined)
    }
}

fn anchor_of(path: &Path) -> (Option<&OsStr>, bool) {
    let mut prefix = None;
    let mut has_root = false;
    for component in path.components() {
        match component {
            Component::Prefix(p) => prefix = Some(p.as_os_str()),
            Component::RootDir => has_root = true,
            _ => break,
        }
    }
    (prefix, has_root)
}

// A path ending in `..` or a bare root names a directory, so it is its own parent.
fn parent_components(path: &Path) -> Vec<Component<'_>> {
    let mut parts: Vec<Component> = path.components().collect();
    if matches!(parts.last(), Some(Component::Normal(_))) {
        parts.pop();
    }
    parts
}
