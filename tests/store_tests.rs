// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::time::Duration;

use finboard::error::SourceError;
use finboard::filter::apply_filters;
use finboard::models::{
    Dataset, DateRange, DepartmentRecord, ExpenseEntry, FilterCriteria, FilterPatch, RevenueEntry,
};
use finboard::source::{DataSource, SAMPLE_DATA, SampleSource};
use finboard::store::{FinanceStore, LOAD_FAILED_MESSAGE, LoadState};
use rust_decimal::Decimal;

struct FailingSource;

impl DataSource for FailingSource {
    async fn load_initial(&self) -> Result<Dataset, SourceError> {
        Err(SourceError::Unavailable("offline".to_string()))
    }
}

fn sample_store() -> FinanceStore {
    FinanceStore::with_data(SAMPLE_DATA.clone())
}

fn assert_consistent(store: &FinanceStore) {
    assert_eq!(
        store.current_view(),
        &apply_filters(store.data(), store.filters())
    );
}

#[tokio::test]
async fn initialize_loads_sample_data() {
    let mut store = FinanceStore::new();
    assert_eq!(store.state(), &LoadState::Idle);
    store.initialize(&SampleSource::new(Duration::ZERO)).await;
    assert_eq!(store.state(), &LoadState::Ready);
    assert!(!store.is_loading());
    assert!(store.error().is_none());
    assert_eq!(store.data(), &*SAMPLE_DATA);
    assert_eq!(store.current_view().revenue.len(), 12);
    assert_consistent(&store);
}

#[tokio::test]
async fn failed_initialize_reports_error_and_keeps_empty_dataset() {
    let mut store = FinanceStore::new();
    store.initialize(&FailingSource).await;
    assert!(!store.is_loading());
    assert_eq!(store.error(), Some(LOAD_FAILED_MESSAGE));
    assert!(store.data().is_empty());
    assert!(store.current_view().is_empty());
}

#[tokio::test]
async fn failed_reload_keeps_previous_dataset() {
    let mut store = sample_store();
    store.initialize(&FailingSource).await;
    assert!(store.error().is_some());
    assert_eq!(store.data(), &*SAMPLE_DATA);
    assert_consistent(&store);

    store.initialize(&SampleSource::new(Duration::ZERO)).await;
    assert!(store.error().is_none());
}

#[test]
fn begin_load_is_observable() {
    let mut store = FinanceStore::new();
    store.begin_load();
    assert!(store.is_loading());
    store.finish_load(Ok(SAMPLE_DATA.clone()));
    assert!(!store.is_loading());
    assert_eq!(store.state(), &LoadState::Ready);
}

#[test]
fn upsert_revenue_twice_is_idempotent() {
    let mut store = sample_store();
    let entry = RevenueEntry {
        month: "Jan".to_string(),
        year: 2025,
        revenue: Decimal::from(99_000),
    };
    store.upsert_revenue(entry.clone());
    let after_first = store.data().revenue.clone();
    store.upsert_revenue(entry);
    assert_eq!(store.data().revenue, after_first);
    assert_eq!(after_first.len(), 13);
}

#[test]
fn upsert_revenue_replaces_matching_month_in_place() {
    let mut store = sample_store();
    store.upsert_revenue(RevenueEntry {
        month: "Mar".to_string(),
        year: 2024,
        revenue: Decimal::from(-5),
    });
    assert_eq!(store.data().revenue.len(), 12);
    assert_eq!(store.data().revenue[2].revenue, Decimal::from(-5));
    assert_eq!(store.current_view().revenue[2].revenue, Decimal::from(-5));
    assert_consistent(&store);
}

#[test]
fn upsert_department_replaces_in_place() {
    let mut store = sample_store();
    store.upsert_department(DepartmentRecord {
        department: "Sales".to_string(),
        revenue: Decimal::ONE,
        expenses: Decimal::ONE,
        profit_margin: Decimal::ZERO,
    });
    let depts = &store.data().departments;
    assert_eq!(depts.len(), 4);
    assert_eq!(depts[0].department, "Sales");
    assert_eq!(depts[0].revenue, Decimal::ONE);
    assert_eq!(depts[0].profit_margin, Decimal::ZERO);
}

#[test]
fn upsert_department_appends_new_name_and_trusts_margin() {
    let mut store = sample_store();
    store.upsert_department(DepartmentRecord {
        department: "R&D".to_string(),
        revenue: Decimal::from(10),
        expenses: Decimal::from(20),
        profit_margin: Decimal::from(42),
    });
    let last = store.data().departments.last().cloned();
    assert_eq!(last.map(|d| d.profit_margin), Some(Decimal::from(42)));
    assert_eq!(store.current_view().departments.len(), 5);
}

#[test]
fn replace_expenses_swaps_whole_collection() {
    let mut store = sample_store();
    let entries = vec![ExpenseEntry {
        category: "Travel".to_string(),
        amount: Decimal::from(300),
        color: "#000000".to_string(),
    }];
    store.replace_expenses(entries.clone());
    assert_eq!(store.data().expenses, entries);
    assert_eq!(store.current_view().expenses, entries);
}

#[test]
fn set_filter_narrows_revenue_view() {
    let mut store = sample_store();
    store.set_filter(FilterPatch::date_range(DateRange {
        start_month: 3,
        start_year: 2024,
        end_month: 5,
        end_year: 2024,
    }));
    let months: Vec<&str> = store
        .current_view()
        .revenue
        .iter()
        .map(|r| r.month.as_str())
        .collect();
    assert_eq!(months, ["Mar", "Apr", "May"]);
    assert_eq!(store.current_view().expenses, SAMPLE_DATA.expenses);
    assert_consistent(&store);
}

#[test]
fn set_filter_keeps_fields_not_in_patch() {
    let mut store = sample_store();
    store.filter_by_department("HR");
    store.filter_by_date(6, 2024, 7, 2024);
    assert_eq!(store.filters().department, "HR");
    assert_eq!(store.current_view().departments.len(), 1);
    assert_eq!(store.current_view().revenue.len(), 2);
}

#[test]
fn set_filter_replaces_whole_date_range() {
    let mut store = sample_store();
    store.filter_by_date(3, 2023, 9, 2025);
    let replacement = DateRange {
        start_month: 4,
        start_year: 2024,
        end_month: 4,
        end_year: 2024,
    };
    store.set_filter(FilterPatch::date_range(replacement));
    assert_eq!(store.filters().date_range, replacement);
}

#[test]
fn reset_filter_restores_unfiltered_view() {
    let mut store = sample_store();
    store.set_filter(FilterPatch {
        date_range: Some(DateRange {
            start_month: 1,
            start_year: 2020,
            end_month: 1,
            end_year: 2020,
        }),
        department: Some("Marketing".to_string()),
    });
    assert!(store.current_view().revenue.is_empty());

    store.reset_filter();
    assert_eq!(store.filters(), &FilterCriteria::default());
    assert_eq!(store.current_view(), &*SAMPLE_DATA);
}

#[test]
fn reset_filter_uses_current_dataset() {
    let mut store = sample_store();
    store.filter_by_department("HR");
    store.upsert_revenue(RevenueEntry {
        month: "Jan".to_string(),
        year: 2023,
        revenue: Decimal::from(1),
    });
    store.reset_filter();
    assert_eq!(store.data().revenue.len(), 13);
    assert_eq!(store.current_view().revenue.len(), 12);
    assert_eq!(store.current_view().departments.len(), 4);
}
