// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Filter for the crate's own events at `level`. Unknown level names are an
/// error rather than a silently empty filter.
pub fn filter_for(level: &str) -> Result<EnvFilter> {
    let level: LevelFilter = level
        .trim()
        .parse()
        .with_context(|| format!("Invalid log level '{}' (use trace|debug|info|warn|error)", level))?;
    Ok(EnvFilter::new(format!("finboard={level}")))
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `level`.
pub fn init(level: &str) -> Result<()> {
    let fallback = filter_for(level)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or(fallback);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    Ok(())
}
