// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use crate::error::SourceError;
use crate::models::{Dataset, DepartmentRecord, ExpenseEntry, RevenueEntry};

/// Supplies the dataset a store starts from.
pub trait DataSource {
    fn load_initial(&self) -> impl Future<Output = Result<Dataset, SourceError>> + Send;
}

/// Built-in demo figures for 2024.
pub static SAMPLE_DATA: Lazy<Dataset> = Lazy::new(|| {
    let revenue = [
        ("Jan", 125_000),
        ("Feb", 132_000),
        ("Mar", 148_000),
        ("Apr", 156_000),
        ("May", 165_000),
        ("Jun", 178_000),
        ("Jul", 145_000),
        ("Aug", 152_000),
        ("Sep", 168_000),
        ("Oct", 175_000),
        ("Nov", 182_000),
        ("Dec", 195_000),
    ]
    .into_iter()
    .map(|(month, amount)| RevenueEntry {
        month: month.to_string(),
        year: 2024,
        revenue: Decimal::from(amount),
    })
    .collect();

    let expenses = [
        ("Salaries", 85_000, "#3B82F6"),
        ("Rent", 15_000, "#EF4444"),
        ("Utilities", 8_000, "#10B981"),
        ("Marketing", 12_000, "#F59E0B"),
        ("Equipment", 7_000, "#8B5CF6"),
        ("Software", 5_000, "#EC4899"),
    ]
    .into_iter()
    .map(|(category, amount, color)| ExpenseEntry {
        category: category.to_string(),
        amount: Decimal::from(amount),
        color: color.to_string(),
    })
    .collect();

    let departments = [
        ("Sales", 32, 450_000, 306_000),
        ("HR", 18, 120_000, 98_400),
        ("Marketing", 25, 280_000, 210_000),
        ("Operations", 28, 380_000, 273_600),
    ]
    .into_iter()
    .map(|(department, margin, revenue, expenses)| DepartmentRecord {
        department: department.to_string(),
        revenue: Decimal::from(revenue),
        expenses: Decimal::from(expenses),
        profit_margin: Decimal::from(margin),
    })
    .collect();

    Dataset {
        revenue,
        expenses,
        departments,
    }
});

/// Serves `SAMPLE_DATA` after a simulated network delay.
#[derive(Debug, Clone)]
pub struct SampleSource {
    latency: Duration,
}

impl SampleSource {
    pub fn new(latency: Duration) -> Self {
        SampleSource { latency }
    }
}

impl Default for SampleSource {
    fn default() -> Self {
        SampleSource::new(Duration::from_millis(1000))
    }
}

impl DataSource for SampleSource {
    async fn load_initial(&self) -> Result<Dataset, SourceError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(SAMPLE_DATA.clone())
    }
}

/// Reads a dataset from a JSON document shaped like the dashboard export
/// payload (`revenue`, `expenses`, `profitMargins`).
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }
}

impl DataSource for FileSource {
    async fn load_initial(&self) -> Result<Dataset, SourceError> {
        tracing::debug!(path = %self.path.display(), "reading dataset file");
        let raw = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Source selected at runtime from configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    Sample(SampleSource),
    File(FileSource),
}

impl DataSource for ConfiguredSource {
    async fn load_initial(&self) -> Result<Dataset, SourceError> {
        match self {
            ConfiguredSource::Sample(s) => s.load_initial().await,
            ConfiguredSource::File(f) => f.load_initial().await,
        }
    }
}
