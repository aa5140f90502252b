// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

pub fn build_cli() -> Command {
    Command::new("finboard")
        .version(crate_version!())
        .about("Revenue, expense and department margin dashboard")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("Config file (TOML); defaults to the platform config dir"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .value_parser(["trace", "debug", "info", "warn", "error"]),
        )
        .arg(
            Arg::new("data")
                .long("data")
                .global(true)
                .help("Load the dataset from this JSON file instead of the sample data"),
        )
        .arg(
            Arg::new("latency-ms")
                .long("latency-ms")
                .global(true)
                .value_parser(value_parser!(u64))
                .help("Simulated latency of the sample data source"),
        )
        .subcommand(
            Command::new("show")
                .about("Print the filtered dashboard")
                .args(filter_args())
                .args(view_args())
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("export")
                .about("Write the filtered view to a file")
                .args(filter_args())
                .args(export_args()),
        )
        .subcommand(Command::new("shell").about("Interactive session against one in-memory store"))
}

/// Commands accepted inside `finboard shell`, one per input line.
pub fn build_session_cli() -> Command {
    Command::new("finboard")
        .no_binary_name(true)
        .disable_version_flag(true)
        .subcommand_required(true)
        .subcommand(
            Command::new("revenue")
                .about("Add or replace the revenue of one month")
                .arg(
                    Arg::new("month")
                        .long("month")
                        .required(true)
                        .help("Jan..Dec"),
                )
                .arg(
                    Arg::new("year")
                        .long("year")
                        .value_parser(value_parser!(i32))
                        .default_value("2024"),
                )
                .arg(amount_arg("amount").required(true)),
        )
        .subcommand(
            Command::new("expenses")
                .about("Replace all expense categories")
                .args(
                    ["salaries", "rent", "utilities", "marketing", "equipment", "software"]
                        .map(|c| amount_arg(c).required(true)),
                )
                .args(
                    [
                        "salaries-color",
                        "rent-color",
                        "utilities-color",
                        "marketing-color",
                        "equipment-color",
                        "software-color",
                    ]
                    .map(|c| Arg::new(c).long(c).help("#RRGGBB; defaults to the category color")),
                ),
        )
        .subcommand(
            Command::new("department")
                .about("Add or replace a department; the margin is derived")
                .arg(Arg::new("name").long("name").required(true))
                .arg(amount_arg("revenue").required(true))
                .arg(amount_arg("expenses").required(true)),
        )
        .subcommand(
            Command::new("filter")
                .about("Change the active filter; omitted range fields keep their values")
                .args(filter_args()),
        )
        .subcommand(Command::new("reset").about("Restore the default filter"))
        .subcommand(
            Command::new("show")
                .about("Print the filtered dashboard")
                .args(view_args()),
        )
        .subcommand(
            Command::new("export")
                .about("Write the filtered view to a file")
                .args(export_args()),
        )
        .subcommand(Command::new("reload").about("Reload the dataset from the data source"))
        .subcommand(Command::new("quit").alias("exit").about("Leave the session"))
}

/// Decimal amount; negative values are data, not flags.
fn amount_arg(id: &'static str) -> Arg {
    Arg::new(id).long(id).allow_negative_numbers(true)
}

fn filter_args() -> Vec<Arg> {
    vec![
        Arg::new("start-month")
            .long("start-month")
            .value_parser(value_parser!(u32).range(1..=12)),
        Arg::new("start-year")
            .long("start-year")
            .value_parser(value_parser!(i32)),
        Arg::new("end-month")
            .long("end-month")
            .value_parser(value_parser!(u32).range(1..=12)),
        Arg::new("end-year")
            .long("end-year")
            .value_parser(value_parser!(i32)),
        Arg::new("department")
            .long("department")
            .help("Department name, or All"),
    ]
}

fn view_args() -> Vec<Arg> {
    vec![
        Arg::new("sort")
            .long("sort")
            .value_parser(["department", "revenue", "expenses", "margin"])
            .default_value("department"),
        Arg::new("desc")
            .long("desc")
            .action(ArgAction::SetTrue)
            .help("Sort the department table descending"),
        Arg::new("search")
            .long("search")
            .help("Only departments whose name contains this text"),
    ]
}

fn export_args() -> Vec<Arg> {
    vec![
        Arg::new("format")
            .long("format")
            .required(true)
            .help("csv|json"),
        Arg::new("out").long("out").required(true),
    ]
}

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the view as JSON")
}
