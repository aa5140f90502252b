// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::filter::{MONTHS, month_number};

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap());

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Canonical three-letter spelling of a month name, e.g. "mar" -> "Mar".
pub fn parse_month_name(s: &str) -> Result<String> {
    let n = month_number(s.trim())
        .ok_or_else(|| anyhow!("Invalid month '{}', expected one of Jan..Dec", s))?;
    Ok(MONTHS[n as usize - 1].to_string())
}

pub fn parse_color(s: &str) -> Result<String> {
    if HEX_COLOR.is_match(s) {
        Ok(s.to_uppercase())
    } else {
        Err(anyhow!("Invalid color '{}', expected #RRGGBB", s))
    }
}

/// `(revenue - expenses) / revenue * 100`; `None` for zero revenue or when
/// the result does not fit in a `Decimal`.
pub fn profit_margin(revenue: Decimal, expenses: Decimal) -> Option<Decimal> {
    revenue
        .checked_sub(expenses)?
        .checked_div(revenue)?
        .checked_mul(Decimal::ONE_HUNDRED)
}

/// Percentage of `part` in `total`; `None` for a zero total or on overflow.
pub fn share_of(part: Decimal, total: Decimal) -> Option<Decimal> {
    part.checked_div(total)?.checked_mul(Decimal::ONE_HUNDRED)
}

/// Overflow-checked sum.
pub fn checked_sum(values: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(v))
}

pub fn fmt_money(d: &Decimal, ccy: &str) -> String {
    format!("{}{:.2}", ccy, d.round_dp(2))
}

pub fn fmt_percent(d: &Decimal) -> String {
    format!("{:.1}%", d.round_dp(1))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

/// Required clap argument as a string.
pub fn required<'a>(m: &'a clap::ArgMatches, id: &str) -> Result<&'a str> {
    m.get_one::<String>(id)
        .map(|s| s.as_str())
        .with_context(|| format!("missing --{}", id))
}
