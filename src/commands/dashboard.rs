// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::cmp::Ordering;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use comfy_table::Table;
use serde::Serialize;

use crate::models::{Dataset, DepartmentRecord, FilterCriteria};
use crate::store::FinanceStore;
use crate::utils::{fmt_money, fmt_percent, pretty_table, share_of};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Department,
    Revenue,
    Expenses,
    Margin,
}

impl FromStr for SortField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "department" => Ok(SortField::Department),
            "revenue" => Ok(SortField::Revenue),
            "expenses" => Ok(SortField::Expenses),
            "margin" => Ok(SortField::Margin),
            _ => Err(anyhow!(
                "Unknown sort field '{}' (use department|revenue|expenses|margin)",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// How the department table is searched and ordered.
#[derive(Debug, Clone, Default)]
pub struct TableQuery {
    pub sort: SortField,
    pub direction: SortDirection,
    pub search: Option<String>,
}

impl TableQuery {
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let sort = match m.get_one::<String>("sort") {
            Some(s) => s.parse()?,
            None => SortField::default(),
        };
        let direction = if m.get_flag("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        let search = m
            .get_one::<String>("search")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Ok(TableQuery {
            sort,
            direction,
            search,
        })
    }

    /// Case-insensitive substring search, then a stable sort. Department
    /// names compare case-insensitively.
    pub fn apply(&self, records: &[DepartmentRecord]) -> Vec<DepartmentRecord> {
        let needle = self.search.as_ref().map(|s| s.to_lowercase());
        let mut rows: Vec<DepartmentRecord> = records
            .iter()
            .filter(|r| match &needle {
                Some(n) => r.department.to_lowercase().contains(n),
                None => true,
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            let ord = compare(a, b, self.sort);
            match self.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
        rows
    }
}

fn compare(a: &DepartmentRecord, b: &DepartmentRecord, field: SortField) -> Ordering {
    match field {
        SortField::Department => a.department.to_lowercase().cmp(&b.department.to_lowercase()),
        SortField::Revenue => a.revenue.cmp(&b.revenue),
        SortField::Expenses => a.expenses.cmp(&b.expenses),
        SortField::Margin => a.profit_margin.cmp(&b.profit_margin),
    }
}

pub fn revenue_table(view: &Dataset, ccy: &str) -> Table {
    let data = view
        .revenue
        .iter()
        .map(|r| {
            vec![
                r.month.clone(),
                r.year.to_string(),
                fmt_money(&r.revenue, ccy),
            ]
        })
        .collect();
    pretty_table(&["Month", "Year", "Revenue"], data)
}

/// Expense rows with each category's share of the total. Shares read "n/a"
/// when the total is zero.
pub fn expense_table(view: &Dataset, ccy: &str) -> Result<Table> {
    let total = view
        .total_expenses()
        .ok_or_else(|| anyhow!("Expense total is out of range"))?;
    let data = view
        .expenses
        .iter()
        .map(|e| {
            vec![
                e.category.clone(),
                fmt_money(&e.amount, ccy),
                share_of(e.amount, total)
                    .map(|p| fmt_percent(&p))
                    .unwrap_or_else(|| "n/a".to_string()),
                e.color.clone(),
            ]
        })
        .collect();
    Ok(pretty_table(&["Category", "Amount", "Share", "Color"], data))
}

pub fn department_table(records: &[DepartmentRecord], ccy: &str) -> Table {
    let data = records
        .iter()
        .map(|d| {
            vec![
                d.department.clone(),
                fmt_money(&d.revenue, ccy),
                fmt_money(&d.expenses, ccy),
                fmt_percent(&d.profit_margin),
            ]
        })
        .collect();
    pretty_table(&["Department", "Revenue", "Expenses", "Profit Margin"], data)
}

pub fn summary_table(view: &Dataset, ccy: &str) -> Result<Table> {
    let revenue = view
        .total_revenue()
        .ok_or_else(|| anyhow!("Revenue total is out of range"))?;
    let expenses = view
        .total_expenses()
        .ok_or_else(|| anyhow!("Expense total is out of range"))?;
    let net = revenue
        .checked_sub(expenses)
        .ok_or_else(|| anyhow!("Net result is out of range"))?;
    Ok(pretty_table(
        &["Total Revenue", "Total Expenses", "Net"],
        vec![vec![
            fmt_money(&revenue, ccy),
            fmt_money(&expenses, ccy),
            fmt_money(&net, ccy),
        ]],
    ))
}

/// Full text rendering of the store's current view.
pub fn render(store: &FinanceStore, query: &TableQuery, ccy: &str) -> Result<String> {
    if store.is_loading() {
        return Ok("Loading financial data...".to_string());
    }
    if let Some(err) = store.error() {
        return Ok(format!("Error loading data: {}", err));
    }
    let view = store.current_view();
    let filters = store.filters();
    let departments = query.apply(&view.departments);
    Ok(format!(
        "Filter: {} / department {}\n\nRevenue\n{}\n\nExpenses\n{}\n\nDepartments\n{}\n\nSummary\n{}",
        filters.date_range.label(),
        filters.department,
        revenue_table(view, ccy),
        expense_table(view, ccy)?,
        department_table(&departments, ccy),
        summary_table(view, ccy)?,
    ))
}

#[derive(Serialize)]
struct DashboardJson<'a> {
    filters: &'a FilterCriteria,
    view: &'a Dataset,
}

/// Pretty JSON of the active filters and the view, departments ordered by
/// `query`.
pub fn json_payload(store: &FinanceStore, query: &TableQuery) -> Result<String> {
    let mut view = store.current_view().clone();
    view.departments = query.apply(&view.departments);
    let payload = DashboardJson {
        filters: store.filters(),
        view: &view,
    };
    Ok(serde_json::to_string_pretty(&payload)?)
}

pub fn handle(store: &FinanceStore, m: &clap::ArgMatches, ccy: &str) -> Result<()> {
    let query = TableQuery::from_matches(m)?;
    if m.get_flag("json") {
        println!("{}", json_payload(store, &query)?);
    } else {
        println!("{}", render(store, &query, ccy)?);
    }
    Ok(())
}
