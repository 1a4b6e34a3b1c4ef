// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! A helper for finding the directory shared by a set of path arguments.
//!
//! This crate provides functionality to:
//! - Deduplicate raw path arguments
//! - Compute their longest common path-component prefix
//! - Fall back to the containing directory when the prefix is not a directory
//! - Render the result with a single trailing separator

pub mod prefix;

// Re-export key types for convenience
pub use prefix::{common_parent_dir, with_trailing_separator, PrefixError, PrefixResult};
