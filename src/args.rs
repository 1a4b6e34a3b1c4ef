// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "common_prefix")]
#[command(version)]
#[command(about = "Prints the common parent directory of the given paths")]
pub(crate) struct Args {
    /// Paths to reduce to their deepest shared parent directory.
    // Zero-or-more at the parser level: the empty case must report usage on
    // stdout with exit code 1, not clap's stderr/exit-2 handling.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Echo the input paths and the computed prefix to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}
