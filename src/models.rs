// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Month;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::checked_sum;

/// Department sentinel that disables department filtering.
pub const ALL_DEPARTMENTS: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueEntry {
    pub month: String, // Jan..Dec
    pub year: i32,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub category: String,
    pub amount: Decimal,
    pub color: String, // #RRGGBB
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRecord {
    pub department: String,
    pub revenue: Decimal,
    pub expenses: Decimal,
    pub profit_margin: Decimal, // percent, supplied by the caller
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub revenue: Vec<RevenueEntry>,
    pub expenses: Vec<ExpenseEntry>,
    #[serde(rename = "profitMargins")]
    pub departments: Vec<DepartmentRecord>,
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        self.revenue.is_empty() && self.expenses.is_empty() && self.departments.is_empty()
    }

    /// `None` when the sum overflows.
    pub fn total_revenue(&self) -> Option<Decimal> {
        checked_sum(self.revenue.iter().map(|r| r.revenue))
    }

    pub fn total_expenses(&self) -> Option<Decimal> {
        checked_sum(self.expenses.iter().map(|e| e.amount))
    }
}

/// Inclusive month window. Months are 1-12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_month: u32,
    pub start_year: i32,
    pub end_month: u32,
    pub end_year: i32,
}

impl DateRange {
    pub const fn full_year(year: i32) -> Self {
        DateRange {
            start_month: 1,
            start_year: year,
            end_month: 12,
            end_year: year,
        }
    }

    /// Human readable label, e.g. "March 2024 - May 2024".
    pub fn label(&self) -> String {
        format!(
            "{} {} - {} {}",
            month_label(self.start_month),
            self.start_year,
            month_label(self.end_month),
            self.end_year
        )
    }
}

fn month_label(n: u32) -> String {
    u8::try_from(n)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .map(|m| m.name().to_string())
        .unwrap_or_else(|| format!("month {}", n))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub date_range: DateRange,
    pub department: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            date_range: DateRange::full_year(2024),
            department: ALL_DEPARTMENTS.to_string(),
        }
    }
}

impl FilterCriteria {
    pub fn all_departments(&self) -> bool {
        self.department == ALL_DEPARTMENTS
    }
}

/// Partial criteria for `FinanceStore::set_filter`. A provided `date_range`
/// replaces the current range as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub date_range: Option<DateRange>,
    pub department: Option<String>,
}

impl FilterPatch {
    pub fn date_range(range: DateRange) -> Self {
        FilterPatch {
            date_range: Some(range),
            department: None,
        }
    }

    pub fn department(name: impl Into<String>) -> Self {
        FilterPatch {
            date_range: None,
            department: Some(name.into()),
        }
    }
}
