// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! testreport: convert captured `cargo test` output into a markdown report
//!
//! Run `cargo test > test_results` first, then `testreport` in the same
//! directory to produce `testreport.md`.

use anyhow::Result;
use clap::Parser;

use testreport::config::Config;
use testreport::run::{init_logging, run, summary_json};

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config);

    let summary = run(&config)?;
    if config.json {
        println!("{}", summary_json(&summary)?);
    }
    Ok(())
}
