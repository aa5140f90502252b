// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};

use crate::models::{ALL_DEPARTMENTS, DepartmentRecord, ExpenseEntry, RevenueEntry};
use crate::store::FinanceStore;
use crate::utils::{parse_color, parse_decimal, parse_month_name, profit_margin, required};

/// Expense categories submitted by the expenses form: amount arg, color arg,
/// category and default chart color.
pub const EXPENSE_CATEGORIES: [(&str, &str, &str, &str); 6] = [
    ("salaries", "salaries-color", "Salaries", "#3B82F6"),
    ("rent", "rent-color", "Rent", "#EF4444"),
    ("utilities", "utilities-color", "Utilities", "#10B981"),
    ("marketing", "marketing-color", "Marketing", "#F59E0B"),
    ("equipment", "equipment-color", "Equipment", "#8B5CF6"),
    ("software", "software-color", "Software", "#EC4899"),
];

pub fn revenue(store: &mut FinanceStore, m: &clap::ArgMatches) -> Result<String> {
    let month = parse_month_name(required(m, "month")?)?;
    let year = *m.get_one::<i32>("year").context("missing --year")?;
    let revenue = parse_decimal(required(m, "amount")?)?;
    store.upsert_revenue(RevenueEntry {
        month: month.clone(),
        year,
        revenue,
    });
    Ok(format!("Revenue updated for {} {}", month, year))
}

pub fn expenses(store: &mut FinanceStore, m: &clap::ArgMatches) -> Result<String> {
    let mut entries = Vec::with_capacity(EXPENSE_CATEGORIES.len());
    for (arg, color_arg, category, default_color) in EXPENSE_CATEGORIES {
        let raw = required(m, arg)?;
        let amount = parse_decimal(raw).with_context(|| format!("Invalid {} amount", category))?;
        let color = match m.get_one::<String>(color_arg) {
            Some(c) => parse_color(c).with_context(|| format!("Invalid {} color", category))?,
            None => default_color.to_string(),
        };
        entries.push(ExpenseEntry {
            category: category.to_string(),
            amount,
            color,
        });
    }
    store.replace_expenses(entries);
    Ok("Expenses updated".to_string())
}

pub fn department(store: &mut FinanceStore, m: &clap::ArgMatches) -> Result<String> {
    let name = required(m, "name")?.trim().to_string();
    if name.is_empty() || name == ALL_DEPARTMENTS {
        return Err(anyhow!("Invalid department name '{}'", name));
    }
    let revenue = parse_decimal(required(m, "revenue")?)?;
    let expenses = parse_decimal(required(m, "expenses")?)?;
    let margin = profit_margin(revenue, expenses)
        .ok_or_else(|| {
            anyhow!(
                "Cannot compute a margin for '{}': revenue must be non-zero and the figures within range",
                name
            )
        })?;
    store.upsert_department(DepartmentRecord {
        department: name.clone(),
        revenue,
        expenses,
        profit_margin: margin,
    });
    Ok(format!("Profit margin for {} set to {:.1}%", name, margin.round_dp(1)))
}
