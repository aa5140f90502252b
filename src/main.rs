// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::{Result, anyhow};

use finboard::commands::{dashboard, exporter, filters, session};
use finboard::config::{Config, default_config_path};
use finboard::{cli, logging, store::FinanceStore};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();
    if matches.subcommand().is_none() {
        cli::build_cli().print_help()?;
        println!();
        return Ok(());
    }

    let config_path = match matches.get_one::<String>("config") {
        Some(p) => PathBuf::from(p),
        None => default_config_path()?,
    };
    let mut config = Config::load(&config_path)?;
    config.apply_overrides(&matches);
    logging::init(&config.logging.level)?;

    let source = config.data_source()?;
    let ccy = config.display.currency.as_str();
    let mut store = FinanceStore::new();
    eprintln!("Loading financial data...");
    store.initialize(&source).await;

    match matches.subcommand() {
        Some(("show", sub)) => {
            ensure_loaded(&store)?;
            let patch = filters::patch_from_args(sub, store.filters());
            store.set_filter(patch);
            dashboard::handle(&store, sub, ccy)?;
        }
        Some(("export", sub)) => {
            ensure_loaded(&store)?;
            let patch = filters::patch_from_args(sub, store.filters());
            store.set_filter(patch);
            println!("{}", exporter::handle(&store, sub)?);
        }
        Some(("shell", _)) => {
            if let Some(err) = store.error() {
                eprintln!("{} (use 'reload' to retry)", err);
            }
            session::run(&mut store, &source, ccy).await?;
        }
        _ => {}
    }
    Ok(())
}

fn ensure_loaded(store: &FinanceStore) -> Result<()> {
    match store.error() {
        Some(err) => Err(anyhow!("{}", err)),
        None => Ok(()),
    }
}
