//! Job path assembly
//!
//! Job paths are always `/` separated regardless of the host platform.

use std::env;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Join job path parts with `/`.
///
/// Empty and `.` segments are dropped, `..` removes the previous segment and
/// never climbs above the first one. `\` is treated as a separator so folders
/// derived on Windows stay portable.
pub fn join<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for segment in parts
        .into_iter()
        .flat_map(|part| part.split(['/', '\\']))
    {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }

    segments.join("/")
}

/// Job path below `prefix`. `..` in `parts` cannot remove the prefix.
pub fn join_under<'a>(prefix: Option<&str>, parts: impl IntoIterator<Item = &'a str>) -> String {
    let inner = join(parts);
    let prefix = prefix.map(|prefix| join([prefix])).unwrap_or_default();

    match (prefix.is_empty(), inner.is_empty()) {
        (true, _) => inner,
        (false, true) => prefix,
        (false, false) => format!("{}/{}", prefix, inner),
    }
}

/// Make `path` absolute against the current directory, then normalize it
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(normalize(path));
    }
    Ok(normalize(&env::current_dir()?.join(path)))
}

/// Resolve `.` and `..` components without touching the filesystem
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.file_name() {
                Some(_) => {
                    normalized.pop();
                }
                // `..` above the root stays at the root
                None if normalized.has_root() => {}
                None => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Relative job folder leading from `base` down to `target`, `/` separated
pub fn relative_folder(base: &Path, target: &Path) -> String {
    let base = normalize(base);
    let target = normalize(target);
    let base_components: Vec<Component> = base.components().collect();
    let target_components: Vec<Component> = target.components().collect();

    let common = base_components
        .iter()
        .zip(&target_components)
        .take_while(|(a, b)| a == b)
        .count();

    let ups = std::iter::repeat("..").take(base_components.len() - common);
    let downs = target_components[common..]
        .iter()
        .filter_map(|component| component.as_os_str().to_str());

    ups.chain(downs).collect::<Vec<_>>().join("/")
}
