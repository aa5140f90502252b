// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{DateRange, FilterCriteria, FilterPatch};
use crate::store::FinanceStore;

/// Builds a patch from the filter flags. Range fields that were not given are
/// taken from `current`, so the patch always carries a complete range.
pub fn patch_from_args(m: &clap::ArgMatches, current: &FilterCriteria) -> FilterPatch {
    let start_month = m.get_one::<u32>("start-month").copied();
    let start_year = m.get_one::<i32>("start-year").copied();
    let end_month = m.get_one::<u32>("end-month").copied();
    let end_year = m.get_one::<i32>("end-year").copied();

    let touched = start_month.is_some()
        || start_year.is_some()
        || end_month.is_some()
        || end_year.is_some();
    let cur = current.date_range;
    let date_range = touched.then(|| DateRange {
        start_month: start_month.unwrap_or(cur.start_month),
        start_year: start_year.unwrap_or(cur.start_year),
        end_month: end_month.unwrap_or(cur.end_month),
        end_year: end_year.unwrap_or(cur.end_year),
    });

    FilterPatch {
        date_range,
        department: m
            .get_one::<String>("department")
            .map(|s| s.trim().to_string()),
    }
}

pub fn handle(store: &mut FinanceStore, m: &clap::ArgMatches) -> String {
    let patch = patch_from_args(m, store.filters());
    store.set_filter(patch);
    let f = store.filters();
    format!(
        "Filter set to {} / department {}",
        f.date_range.label(),
        f.department
    )
}

pub fn reset(store: &mut FinanceStore) -> String {
    store.reset_filter();
    "Filters reset".to_string()
}
