//! Output file location.

use crate::OceanError;
use std::{
    fs,
    path::{Component, Path, PathBuf},
};

/// Returns where the KML for `cruise` should be written.
///
/// The file is named `<cruise>.kml` (lowercased) and placed in
/// `out_dir` when given. The result is lexically normalized. An
/// `out_dir` of `.` resolves to the absolute current directory.
pub fn output_path(cruise: &str, out_dir: Option<&Path>) -> Result<PathBuf, OceanError> {
    let file_name = format!("{}.kml", cruise.to_lowercase());
    match out_dir.map(normalize) {
        Some(dir) if dir == Path::new(".") => Ok(std::env::current_dir()?.join(file_name)),
        Some(dir) => Ok(normalize(&dir.join(file_name))),
        None => Ok(PathBuf::from(file_name)),
    }
}

/// Creates the missing parent directories of `path`.
pub fn create_parent_dirs(path: &Path) -> Result<(), OceanError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            log::debug!("creating {}", parent.display());
        }
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Collapses `.` and `name/..` components without touching the
/// filesystem.
///
/// Leading `..` components of relative paths are kept, `..` directly
/// under the root is dropped, and an empty result becomes `.`.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => (),
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => (),
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    if parts.is_empty() {
        PathBuf::from(".")
    } else {
        parts.iter().collect()
    }
}
