// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Reduces a set of path arguments to their deepest shared parent directory.

mod components;
mod errors;

pub use errors::{PrefixError, PrefixResult};

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use components::longest_common_path;

/// Determine the deepest parent directory shared by all given paths.
///
/// Duplicate arguments are ignored. If the computed prefix does not name an
/// existing directory it is treated as a file path and its final component is
/// stripped, so a single file argument yields its containing directory.
///
/// # Errors
/// Returns an error if no paths are given or if absolute and relative paths
/// are mixed.
///
/// # Examples
///
/// ```ignore
/// use std::path::PathBuf;
/// use common_prefix::prefix::common_parent_dir;
///
/// let paths = vec![
///     PathBuf::from("/usr/lib/foo"),
///     PathBuf::from("/usr/lib/bar"),
/// ];
/// assert_eq!(common_parent_dir(&paths).unwrap(), PathBuf::from("/usr/lib"));
/// ```
pub fn common_parent_dir(paths: &[PathBuf]) -> PrefixResult<PathBuf> {
    // Deduplicate on the raw argument string. `Path` equality is
    // component-wise and would merge spellings like `.` and `./`, which the
    // special case below must keep apart from a genuine two-element set.
    let unique: HashSet<&OsStr> = paths.iter().map(|p| p.as_os_str()).collect();

    if let Some(current_dir) = solo_current_dir(&unique) {
        return Ok(current_dir);
    }

    let mut common = longest_common_path(&unique)?;
    if !common.is_dir() {
        // The prefix names a file, which happens when a single filename is
        // the only argument. Use its containing directory instead.
        common.pop();
    }
    Ok(common)
}

/// Render a directory path with exactly one trailing separator.
///
/// The empty path renders as the bare separator; a path already ending in the
/// separator (the filesystem root) gains no second one.
#[must_use]
pub fn with_trailing_separator(dir: &Path) -> String {
    let rendered = dir.display().to_string();
    if rendered.ends_with(MAIN_SEPARATOR) {
        rendered
    } else {
        format!("{rendered}{MAIN_SEPARATOR}")
    }
}

/// The current-directory token, when it is the only element of the set.
///
/// A lone `.` must stay inside the working directory: the generic prefix
/// computation would reduce it to the filesystem root.
fn solo_current_dir(paths: &HashSet<&OsStr>) -> Option<PathBuf> {
    if paths.len() != 1 {
        return None;
    }
    let solo = paths.iter().next()?;
    is_current_dir_token(solo).then(|| PathBuf::from("."))
}

/// True for the bare current-directory token: `.`, or `.` followed by the
/// separator. Everything else (`./.`, `..`, `a`) takes the generic path.
fn is_current_dir_token(raw: &OsStr) -> bool {
    raw == "." || raw == format!(".{MAIN_SEPARATOR}").as_str()
}
