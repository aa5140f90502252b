// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Dataset, DateRange, FilterCriteria};

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Calendar ordinal (1-12) of a three-letter month name, ignoring case.
pub fn month_number(name: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(name))
        .map(|i| i as u32 + 1)
}

impl DateRange {
    /// Year is compared first, then month. An entry without a month ordinal
    /// only passes when its year lies strictly inside the range.
    pub fn contains(&self, year: i32, month: Option<u32>) -> bool {
        let after_start = year > self.start_year
            || (year == self.start_year && month.is_some_and(|m| m >= self.start_month));
        let before_end = year < self.end_year
            || (year == self.end_year && month.is_some_and(|m| m <= self.end_month));
        after_start && before_end
    }
}

/// Derives the visible view. Expenses are never filtered.
pub fn apply_filters(data: &Dataset, filters: &FilterCriteria) -> Dataset {
    let range = &filters.date_range;
    let revenue = data
        .revenue
        .iter()
        .filter(|r| range.contains(r.year, month_number(&r.month)))
        .cloned()
        .collect();

    let departments = if filters.all_departments() {
        data.departments.clone()
    } else {
        data.departments
            .iter()
            .filter(|d| d.department == filters.department)
            .cloned()
            .collect()
    };

    Dataset {
        revenue,
        expenses: data.expenses.clone(),
        departments,
    }
}
