// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Defines error types for the prefix computation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for prefix operations.
pub type PrefixResult<T> = std::result::Result<T, PrefixError>;

/// Errors that can occur while computing a common prefix.
#[derive(Debug, Error)]
pub enum PrefixError {
    #[error("Expected at least one path")]
    EmptyPathSet,
    // The prefix of an absolute and a relative path depends on the working
    // directory, which this computation never consults.
    #[error("Cannot mix absolute and relative paths: {paths:?}")]
    MixedPathRoots { paths: Vec<PathBuf> },
}
