// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Dataset;
use crate::store::FinanceStore;
use crate::utils::required;

/// One CSV line; columns that do not apply to a section stay empty.
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    section: &'static str,
    name: &'a str,
    year: Option<i32>,
    revenue: Option<Decimal>,
    expenses: Option<Decimal>,
    amount: Option<Decimal>,
    profit_margin: Option<Decimal>,
    color: Option<&'a str>,
}

pub fn handle(store: &FinanceStore, m: &clap::ArgMatches) -> Result<String> {
    let fmt = required(m, "format")?.to_lowercase();
    let out = required(m, "out")?.trim();
    let view = store.current_view();

    match fmt.as_str() {
        "csv" => write_csv(view, out)?,
        "json" => std::fs::write(out, serde_json::to_string_pretty(view)?)?,
        _ => return Err(anyhow!("Unknown format: {} (use csv|json)", fmt)),
    }
    tracing::info!(path = out, format = %fmt, "view exported");
    Ok(format!("Exported view to {}", out))
}

fn write_csv(view: &Dataset, out: &str) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_path(out)?;
    wtr.write_record([
        "section",
        "name",
        "year",
        "revenue",
        "expenses",
        "amount",
        "profit_margin",
        "color",
    ])?;
    for r in &view.revenue {
        wtr.serialize(ExportRow {
            section: "revenue",
            name: &r.month,
            year: Some(r.year),
            revenue: Some(r.revenue),
            expenses: None,
            amount: None,
            profit_margin: None,
            color: None,
        })?;
    }
    for e in &view.expenses {
        wtr.serialize(ExportRow {
            section: "expense",
            name: &e.category,
            year: None,
            revenue: None,
            expenses: None,
            amount: Some(e.amount),
            profit_margin: None,
            color: Some(&e.color),
        })?;
    }
    for d in &view.departments {
        wtr.serialize(ExportRow {
            section: "department",
            name: &d.department,
            year: None,
            revenue: Some(d.revenue),
            expenses: Some(d.expenses),
            amount: None,
            profit_margin: Some(d.profit_margin),
            color: None,
        })?;
    }
    wtr.flush()?;
    Ok(())
}
