// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::SourceError;
use crate::filter::apply_filters;
use crate::models::{
    Dataset, DateRange, DepartmentRecord, ExpenseEntry, FilterCriteria, FilterPatch, RevenueEntry,
};
use crate::source::DataSource;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load financial data";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Owns the dataset and the active filter. Every public operation leaves
/// `view` equal to `apply_filters(data, filters)`.
#[derive(Debug, Clone, Default)]
pub struct FinanceStore {
    data: Dataset,
    view: Dataset,
    filters: FilterCriteria,
    state: LoadState,
}

impl FinanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `data`, already in the ready state.
    pub fn with_data(data: Dataset) -> Self {
        let mut store = Self::new();
        store.finish_load(Ok(data));
        store
    }

    pub async fn initialize<S: DataSource>(&mut self, source: &S) {
        self.begin_load();
        let result = source.load_initial().await;
        self.finish_load(result);
    }

    pub fn begin_load(&mut self) {
        tracing::info!("loading financial data");
        self.state = LoadState::Loading;
    }

    pub fn finish_load(&mut self, result: Result<Dataset, SourceError>) {
        match result {
            Ok(data) => {
                tracing::info!(
                    revenue = data.revenue.len(),
                    expenses = data.expenses.len(),
                    departments = data.departments.len(),
                    "financial data loaded"
                );
                self.data = data;
                self.state = LoadState::Ready;
                self.recompute();
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load financial data");
                self.state = LoadState::Failed(LOAD_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Replaces the entry with the same (month, year) in place, or appends.
    pub fn upsert_revenue(&mut self, entry: RevenueEntry) {
        match self
            .data
            .revenue
            .iter_mut()
            .find(|r| r.month == entry.month && r.year == entry.year)
        {
            Some(existing) => *existing = entry,
            None => self.data.revenue.push(entry),
        }
        tracing::debug!(entries = self.data.revenue.len(), "revenue updated");
        self.recompute();
    }

    pub fn replace_expenses(&mut self, entries: Vec<ExpenseEntry>) {
        self.data.expenses = entries;
        tracing::debug!(entries = self.data.expenses.len(), "expenses replaced");
        self.recompute();
    }

    /// Replaces the record with the same department name in place, or appends.
    pub fn upsert_department(&mut self, entry: DepartmentRecord) {
        match self
            .data
            .departments
            .iter_mut()
            .find(|d| d.department == entry.department)
        {
            Some(existing) => *existing = entry,
            None => self.data.departments.push(entry),
        }
        tracing::debug!(entries = self.data.departments.len(), "department updated");
        self.recompute();
    }

    pub fn set_filter(&mut self, patch: FilterPatch) {
        if let Some(range) = patch.date_range {
            self.filters.date_range = range;
        }
        if let Some(department) = patch.department {
            self.filters.department = department;
        }
        tracing::debug!(filters = ?self.filters, "filters changed");
        self.recompute();
    }

    pub fn filter_by_date(
        &mut self,
        start_month: u32,
        start_year: i32,
        end_month: u32,
        end_year: i32,
    ) {
        self.set_filter(FilterPatch::date_range(DateRange {
            start_month,
            start_year,
            end_month,
            end_year,
        }));
    }

    pub fn filter_by_department(&mut self, department: &str) {
        self.set_filter(FilterPatch::department(department));
    }

    pub fn reset_filter(&mut self) {
        self.filters = FilterCriteria::default();
        tracing::debug!("filters reset");
        self.recompute();
    }

    pub fn current_view(&self) -> &Dataset {
        &self.view
    }

    pub fn data(&self) -> &Dataset {
        &self.data
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    fn recompute(&mut self) {
        self.view = apply_filters(&self.data, &self.filters);
    }
}
