// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Component-wise longest-common-prefix computation over raw path strings.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use super::errors::{PrefixError, PrefixResult};

/// Find the longest path-component prefix shared by all paths in the set.
///
/// The comparison is per component, never per substring: `src/foolish/a` and
/// `src/foo/b` share `src`, not `src/foo`. Absolute paths always share at
/// least the root component, so disjoint absolute paths reduce to the
/// filesystem root; disjoint relative paths reduce to the empty path.
///
/// # Errors
/// Returns an error if the set is empty or mixes absolute and relative paths.
pub(crate) fn longest_common_path(paths: &HashSet<&OsStr>) -> PrefixResult<PathBuf> {
    let mut iter = paths.iter();
    let Some(first) = iter.next() else {
        return Err(PrefixError::EmptyPathSet);
    };
    ensure_uniform_roots(paths)?;

    let mut common = path_components(Path::new(first));
    for path in iter {
        let components = path_components(Path::new(path));
        let shared = common
            .iter()
            .zip(components.iter())
            .take_while(|(a, b)| a == b)
            .count();
        common.truncate(shared);
    }
    Ok(common.into_iter().collect())
}

/// Reject sets that mix absolute and relative paths; their common prefix
/// would depend on the working directory.
fn ensure_uniform_roots(paths: &HashSet<&OsStr>) -> PrefixResult<()> {
    let roots: HashSet<bool> = paths.iter().map(|p| Path::new(p).is_absolute()).collect();
    if roots.len() > 1 {
        // Sorted so the diagnostic is deterministic regardless of set order.
        let mut offending: Vec<PathBuf> = paths.iter().map(PathBuf::from).collect();
        offending.sort();
        return Err(PrefixError::MixedPathRoots { paths: offending });
    }
    Ok(())
}

/// Split a path into components for comparison. Bare `.` segments and
/// repeated separators are transparent (`src/./a`, `src//a` and `src/a` are
/// equal); `..` segments are kept and compared verbatim.
fn path_components(path: &Path) -> Vec<Component<'_>> {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of<'a>(paths: &[&'a str]) -> HashSet<&'a OsStr> {
        paths.iter().map(|p| OsStr::new(*p)).collect()
    }

    #[test]
    fn test_empty_set_rejected() {
        let paths = HashSet::new();
        assert!(matches!(
            longest_common_path(&paths),
            Err(PrefixError::EmptyPathSet)
        ));
    }

    #[test]
    fn test_single_path_returned_whole() {
        let paths = set_of(&["src/a.txt"]);
        assert_eq!(
            longest_common_path(&paths).unwrap(),
            PathBuf::from("src/a.txt")
        );
    }

    #[test]
    fn test_component_prefix_of_siblings() {
        let paths = set_of(&["src/a", "src/foo/b", "src/bar/c"]);
        assert_eq!(longest_common_path(&paths).unwrap(), PathBuf::from("src"));
    }

    #[test]
    fn test_components_not_substrings() {
        // "foo" is a character prefix of "foolish" but not a shared component.
        let paths = set_of(&["src/foolish/a", "src/foo/b"]);
        assert_eq!(longest_common_path(&paths).unwrap(), PathBuf::from("src"));
    }

    #[test]
    fn test_disjoint_absolute_paths_share_the_root() {
        let paths = set_of(&["/usr/lib/foo", "/opt/lib/bar"]);
        assert_eq!(longest_common_path(&paths).unwrap(), PathBuf::from("/"));
    }

    #[test]
    fn test_disjoint_relative_paths_share_nothing() {
        let paths = set_of(&["a/x", "b/y"]);
        assert_eq!(longest_common_path(&paths).unwrap(), PathBuf::new());
    }

    #[test]
    fn test_mixed_roots_rejected() {
        let paths = set_of(&["/abs/a", "rel/b"]);
        match longest_common_path(&paths) {
            Err(PrefixError::MixedPathRoots { paths }) => {
                assert_eq!(
                    paths,
                    vec![PathBuf::from("/abs/a"), PathBuf::from("rel/b")]
                );
            }
            other => panic!("Expected MixedPathRoots, got {:?}", other),
        }
    }

    #[test]
    fn test_dot_segments_are_transparent() {
        let paths = set_of(&["src/./a", "src/a"]);
        assert_eq!(longest_common_path(&paths).unwrap(), PathBuf::from("src/a"));
    }

    #[test]
    fn test_repeated_separators_are_transparent() {
        let paths = set_of(&["src//a", "src/a"]);
        assert_eq!(longest_common_path(&paths).unwrap(), PathBuf::from("src/a"));
    }

    #[test]
    fn test_trailing_separator_is_transparent() {
        let paths = set_of(&["src/a", "src/a/"]);
        assert_eq!(longest_common_path(&paths).unwrap(), PathBuf::from("src/a"));
    }

    #[test]
    fn test_parent_segments_compared_verbatim() {
        // `..` is an ordinary component here; nothing is collapsed.
        let paths = set_of(&["../shared/x", "../shared/y"]);
        assert_eq!(
            longest_common_path(&paths).unwrap(),
            PathBuf::from("../shared")
        );
    }

    #[test]
    fn test_deep_shared_prefix() {
        let paths = set_of(&["/usr/lib/foo", "/usr/lib/bar", "/usr/lib/baz"]);
        assert_eq!(
            longest_common_path(&paths).unwrap(),
            PathBuf::from("/usr/lib")
        );
    }
}
