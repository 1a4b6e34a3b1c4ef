// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.
mod args;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use args::Args;
use common_prefix::prefix::{common_parent_dir, with_trailing_separator};

fn main() -> Result<()> {
    let args = Args::parse();
    if args.paths.is_empty() {
        // Shell callers read the usage line from stdout and expect exit code 1.
        println!("{}", Args::command().render_usage());
        std::process::exit(1);
    }

    if args.verbose {
        eprintln!("Input paths: {:?}", args.paths);
    }

    let prefix = common_parent_dir(&args.paths).with_context(|| {
        format!(
            "Failed to compute the common parent of {} path(s)",
            args.paths.len()
        )
    })?;

    let rendered = with_trailing_separator(&prefix);
    if args.verbose {
        eprintln!("Common parent: {rendered}");
    }
    println!("{rendered}");
    Ok(())
}
