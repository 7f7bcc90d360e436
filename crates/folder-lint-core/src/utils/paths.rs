//! Lexical path utilities.
//!
//! Nothing here touches the filesystem: symlinks are not resolved, so the
//! relative path of an entry always reflects how it was reached.

use std::path::{Component, Path, PathBuf};

/// Removes `.` components and folds `..` into the preceding segment.
///
/// # Examples
///
/// ```
/// use folder_lint_core::utils::normalize;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(normalize(Path::new("/work/./app/../src")), PathBuf::from("/work/src"));
/// ```
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Computes `path` relative to `base` as a `/`-joined string.
///
/// Paths outside `base` climb with `..` segments. Identical paths yield an
/// empty string.
///
/// # Examples
///
/// ```
/// use folder_lint_core::utils::relative_to;
/// use std::path::Path;
///
/// assert_eq!(relative_to(Path::new("/work/app/page.tsx"), Path::new("/work")), "app/page.tsx");
/// assert_eq!(relative_to(Path::new("/other/x.ts"), Path::new("/work")), "../other/x.ts");
/// ```
#[must_use]
pub fn relative_to(path: &Path, base: &Path) -> String {
    let path = normalize(path);
    let base = normalize(base);
    let path: Vec<Component<'_>> = path
        .components()
        .filter(|c| *c != Component::CurDir)
        .collect();
    let base: Vec<Component<'_>> = base
        .components()
        .filter(|c| *c != Component::CurDir)
        .collect();

    let common = path
        .iter()
        .zip(&base)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = vec!["..".to_string(); base.len() - common];
    parts.extend(
        path[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_drops_cur_dir() {
        assert_eq!(normalize(Path::new("./app/./page.tsx")), PathBuf::from("app/page.tsx"));
    }

    #[test]
    fn test_normalize_folds_parent() {
        assert_eq!(normalize(Path::new("/a/b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("../x")), PathBuf::from("../x"));
        assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
    }

    #[test]
    fn test_relative_to_descendant() {
        assert_eq!(
            relative_to(Path::new("/repo/src/components/ui/Button.tsx"), Path::new("/repo")),
            "src/components/ui/Button.tsx"
        );
    }

    #[test]
    fn test_relative_to_ignores_dot_segments() {
        assert_eq!(
            relative_to(Path::new("/repo/./app/page.js"), Path::new("/repo/.")),
            "app/page.js"
        );
    }

    #[test]
    fn test_normalize_empty_is_cur_dir() {
        assert_eq!(normalize(Path::new(".")), PathBuf::from("."));
        assert_eq!(normalize(Path::new("a/..")), PathBuf::from("."));
    }

    #[test]
    fn test_relative_to_relative_base() {
        assert_eq!(relative_to(Path::new("./app/page.js"), Path::new(".")), "app/page.js");
    }

    #[test]
    fn test_relative_to_sibling() {
        assert_eq!(relative_to(Path::new("/a/b/c.ts"), Path::new("/a/d")), "../b/c.ts");
    }

    #[test]
    fn test_relative_to_self_is_empty() {
        assert_eq!(relative_to(Path::new("/repo"), Path::new("/repo")), "");
    }
}
