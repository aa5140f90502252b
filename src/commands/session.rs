// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::error::ErrorKind;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{dashboard, edit, exporter, filters};
use crate::cli::build_session_cli;
use crate::source::DataSource;
use crate::store::FinanceStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue(String),
    Quit,
}

/// Runs one session line against the store.
pub async fn execute<S: DataSource>(
    store: &mut FinanceStore,
    source: &S,
    line: &str,
    ccy: &str,
) -> Result<Step> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(Step::Continue(String::new()));
    }
    let matches = match build_session_cli().try_get_matches_from(words) {
        Ok(m) => m,
        Err(e)
            if matches!(
                e.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            return Ok(Step::Continue(e.render().to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    let out = match matches.subcommand() {
        Some(("revenue", sub)) => edit::revenue(store, sub)?,
        Some(("expenses", sub)) => edit::expenses(store, sub)?,
        Some(("department", sub)) => edit::department(store, sub)?,
        Some(("filter", sub)) => filters::handle(store, sub),
        Some(("reset", _)) => filters::reset(store),
        Some(("show", sub)) => {
            let query = dashboard::TableQuery::from_matches(sub)?;
            dashboard::render(store, &query, ccy)?
        }
        Some(("export", sub)) => exporter::handle(store, sub)?,
        Some(("reload", _)) => {
            store.initialize(source).await;
            match store.error() {
                Some(err) => err.to_string(),
                None => "Data reloaded".to_string(),
            }
        }
        Some(("quit", _)) => return Ok(Step::Quit),
        _ => String::new(),
    };
    Ok(Step::Continue(out))
}

/// Reads commands from stdin until `quit` or end of input. Command errors are
/// reported and the session carries on.
pub async fn run<S: DataSource>(store: &mut FinanceStore, source: &S, ccy: &str) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("finboard shell; type 'help' for commands, 'quit' to leave");
    while let Some(line) = lines.next_line().await? {
        match execute(store, source, &line, ccy).await {
            Ok(Step::Continue(out)) => {
                if !out.is_empty() {
                    println!("{}", out.trim_end());
                }
            }
            Ok(Step::Quit) => break,
            Err(err) => eprintln!("Error: {:#}", err),
        }
    }
    Ok(())
}
