// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finboard::commands::dashboard::{
    SortDirection, SortField, TableQuery, expense_table, json_payload, render, summary_table,
};
use finboard::error::SourceError;
use finboard::models::{Dataset, ExpenseEntry, FilterPatch, RevenueEntry};
use finboard::source::SAMPLE_DATA;
use finboard::store::FinanceStore;
use finboard::utils::{fmt_money, fmt_percent, profit_margin, share_of};
use rust_decimal::Decimal;

fn names(query: &TableQuery) -> Vec<String> {
    query
        .apply(&SAMPLE_DATA.departments)
        .into_iter()
        .map(|d| d.department)
        .collect()
}

#[test]
fn default_sort_is_department_ascending() {
    assert_eq!(
        names(&TableQuery::default()),
        ["HR", "Marketing", "Operations", "Sales"]
    );
}

#[test]
fn sorts_by_numeric_columns_both_ways() {
    let by_revenue = TableQuery {
        sort: SortField::Revenue,
        direction: SortDirection::Desc,
        search: None,
    };
    assert_eq!(names(&by_revenue), ["Sales", "Operations", "Marketing", "HR"]);

    let by_margin = TableQuery {
        sort: SortField::Margin,
        ..TableQuery::default()
    };
    assert_eq!(names(&by_margin), ["HR", "Marketing", "Operations", "Sales"]);
}

#[test]
fn search_is_case_insensitive_substring() {
    let query = TableQuery {
        search: Some("AR".to_string()),
        ..TableQuery::default()
    };
    assert_eq!(names(&query), ["Marketing"]);
}

#[test]
fn sort_field_parses_cli_names() {
    assert_eq!("margin".parse::<SortField>().unwrap(), SortField::Margin);
    assert_eq!("Revenue".parse::<SortField>().unwrap(), SortField::Revenue);
    assert!("profit".parse::<SortField>().is_err());
}

#[test]
fn margin_and_share_helpers() {
    assert_eq!(
        profit_margin(Decimal::from(120_000), Decimal::from(98_400)),
        Some(Decimal::from(18))
    );
    assert_eq!(profit_margin(Decimal::ZERO, Decimal::from(5)), None);
    assert_eq!(share_of(Decimal::from(5), Decimal::ZERO), None);
    assert_eq!(
        fmt_percent(&share_of(Decimal::from(1), Decimal::from(3)).unwrap()),
        "33.3%"
    );
    assert_eq!(fmt_money(&Decimal::new(12345, 1), "$"), "$1234.50");
}

#[test]
fn margin_and_share_return_none_instead_of_overflowing() {
    let huge_loss = Decimal::from_i128_with_scale(-(10_i128.pow(25)), 0);
    assert_eq!(profit_margin(Decimal::new(1, 2), huge_loss), None);
    assert_eq!(profit_margin(Decimal::MAX, -Decimal::MAX), None);
    assert_eq!(share_of(Decimal::MAX, Decimal::new(1, 2)), None);
}

#[test]
fn expense_table_shows_shares() {
    let table = expense_table(&SAMPLE_DATA, "$").unwrap().to_string();
    // 85000 of 132000
    assert!(table.contains("64.4%"));
    assert!(table.contains("#EC4899"));
}

#[test]
fn summary_nets_revenue_against_expenses() {
    let table = summary_table(&SAMPLE_DATA, "").unwrap().to_string();
    assert!(table.contains("1921000.00"));
    assert!(table.contains("132000.00"));
    assert!(table.contains("1789000.00"));
}

#[test]
fn render_reports_load_states() {
    let mut store = FinanceStore::new();
    store.begin_load();
    assert_eq!(
        render(&store, &TableQuery::default(), "$").unwrap(),
        "Loading financial data..."
    );

    store.finish_load(Err(SourceError::Unavailable("offline".to_string())));
    assert_eq!(
        render(&store, &TableQuery::default(), "$").unwrap(),
        "Error loading data: Failed to load financial data"
    );
}

#[test]
fn zero_expense_total_shows_no_share() {
    let mut data = SAMPLE_DATA.clone();
    for e in &mut data.expenses {
        e.amount = Decimal::ZERO;
    }
    let table = expense_table(&data, "$").unwrap().to_string();
    assert!(table.contains("n/a"));
}

#[test]
fn totals_out_of_range_are_errors() {
    let data = Dataset {
        revenue: ["Jan", "Feb"]
            .into_iter()
            .map(|month| RevenueEntry {
                month: month.to_string(),
                year: 2024,
                revenue: Decimal::MAX,
            })
            .collect(),
        expenses: vec![ExpenseEntry {
            category: "Rent".to_string(),
            amount: Decimal::MAX,
            color: "#EF4444".to_string(),
        }],
        departments: Vec::new(),
    };
    assert!(summary_table(&data, "$").is_err());
    assert!(expense_table(&data, "$").is_ok());

    let store = FinanceStore::with_data(data);
    assert!(render(&store, &TableQuery::default(), "$").is_err());
}

#[test]
fn summary_net_out_of_range_is_an_error() {
    let data = Dataset {
        revenue: vec![RevenueEntry {
            month: "Jan".to_string(),
            year: 2024,
            revenue: Decimal::MAX,
        }],
        expenses: vec![ExpenseEntry {
            category: "Rent".to_string(),
            amount: -Decimal::MAX,
            color: "#EF4444".to_string(),
        }],
        departments: Vec::new(),
    };
    assert!(summary_table(&data, "$").is_err());
}

#[test]
fn json_payload_carries_filters_and_sorted_view() {
    let mut store = FinanceStore::with_data(SAMPLE_DATA.clone());
    store.set_filter(FilterPatch::department("Sales"));
    let query = TableQuery {
        sort: SortField::Revenue,
        direction: SortDirection::Desc,
        search: None,
    };
    let raw = json_payload(&store, &query).unwrap();
    let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(v["filters"]["department"], "Sales");
    assert_eq!(v["filters"]["dateRange"]["startMonth"], 1);
    assert_eq!(v["view"]["revenue"].as_array().unwrap().len(), 12);
    let departments = v["view"]["profitMargins"].as_array().unwrap();
    assert_eq!(departments.len(), 1);
    assert_eq!(departments[0]["department"], "Sales");
    assert!(departments[0].get("profitMargin").is_some());
}
