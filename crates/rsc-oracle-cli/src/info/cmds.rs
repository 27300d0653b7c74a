/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

use prettytable::{Cell, Row, Table};
use rsc_oracle::model::{DatabaseDetails, LogBackupConfig, RecoveryRange, host_or_rac};
use rsc_oracle::oracle::Oracle;
use rsc_oracle::time::cluster_time_display;
use rsc_oracle::RscSession;
use serde::Serialize;

use super::Opts;
use crate::cfg::output::{OutputFormat, print_structured};
use crate::database::locate;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoReport {
    pub details: DatabaseDetails,
    pub timezone: String,
    pub log_backup_config: Option<LogBackupConfig>,
    pub recovery_ranges: Vec<RecoveryRange>,
}

pub async fn info(session: &RscSession, format: OutputFormat, opts: &Opts) -> color_eyre::Result<()> {
    let located = locate(session, &opts.database).await?;
    let oracle = Oracle::new(session);
    let object_id = located.object.object_id.as_str();

    let details = oracle.database_details(&located.object).await?;
    // Data Guard groups carry no log backup configuration of their own.
    let log_backup_config = if located.object.is_data_guard_member {
        None
    } else {
        Some(oracle.log_backup_config(object_id).await?)
    };
    let recovery_ranges = oracle.recovery_ranges(object_id).await?;

    let report = InfoReport {
        details,
        timezone: located.timezone,
        log_backup_config,
        recovery_ranges,
    };

    if !print_structured(format, &report)? {
        details_to_table(&report).printstd();
        snapshots_to_table(&report).printstd();
        ranges_to_table(&report).printstd();
    }

    Ok(())
}

fn local(iso: &str, timezone: &str) -> String {
    cluster_time_display(iso, timezone).unwrap_or_else(|_| iso.to_string())
}

fn opt_num(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

// details_to_table converts the object details into a
// two column key/value ASCII table.
fn details_to_table(report: &InfoReport) -> Table {
    let details = &report.details;
    let mut table = Table::new();
    let mut add = |key: &str, value: String| {
        table.add_row(Row::new(vec![Cell::new(key), Cell::new(&value)]));
    };

    add("Name", details.name().to_string());
    add("Id", details.id().to_string());
    add("Cluster", details.cluster().name.clone());
    add("Time Zone", report.timezone.clone());
    add("SLA", details.sla_name().unwrap_or("").to_string());

    match details {
        DatabaseDetails::Database(db) => {
            add(
                "Host/RAC",
                host_or_rac(&db.physical_path).unwrap_or("").to_string(),
            );
            add("Instances", opt_num(db.num_instances));
            add("Channels", opt_num(db.num_channels));
            add(
                "Assignment",
                db.sla_assignment.clone().unwrap_or_default(),
            );
        }
        DatabaseDetails::DataGuardGroup(group) => {
            add("DG Unique Name", group.db_unique_name.clone().unwrap_or_default());
            add("Instances", opt_num(group.num_instances));
            add("Channels", opt_num(group.num_channels));
            add(
                "Assignment",
                group.sla_assignment.clone().unwrap_or_default(),
            );
            for member in &group.descendant_connection.nodes {
                add(
                    "DG Member",
                    format!(
                        "{} on {} ({})",
                        member
                            .db_unique_name
                            .as_deref()
                            .unwrap_or(member.id.as_str()),
                        host_or_rac(&member.physical_path).unwrap_or("?"),
                        member.db_role.as_deref().unwrap_or("unknown role"),
                    ),
                );
            }
        }
    }

    if let Some(config) = &report.log_backup_config {
        add(
            "Log Backup Frequency (min)",
            opt_num(config.log_backup_frequency_min),
        );
        add("Log Retention (hours)", opt_num(config.log_retention_hours));
        add(
            "Host Log Retention (hours)",
            opt_num(config.host_log_retention_hours),
        );
    }

    table
}

// snapshots_to_table lists snapshots in cluster local time, newest first.
fn snapshots_to_table(report: &InfoReport) -> Table {
    let mut snapshots: Vec<_> = report.details.snapshots().iter().collect();
    snapshots.sort_by(|a, b| b.date.cmp(&a.date));

    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Snapshot"), Cell::new("Date")]));
    for snapshot in snapshots {
        table.add_row(Row::new(vec![
            Cell::new(&snapshot.id),
            Cell::new(&local(&snapshot.date, &report.timezone)),
        ]));
    }
    table
}

fn ranges_to_table(report: &InfoReport) -> Table {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Recovery Range Begin"),
        Cell::new("Recovery Range End"),
        Cell::new("Status"),
    ]));
    for range in &report.recovery_ranges {
        table.add_row(Row::new(vec![
            Cell::new(&local(&range.begin_time, &report.timezone)),
            Cell::new(&local(&range.end_time, &report.timezone)),
            Cell::new(range.status.as_deref().unwrap_or("")),
        ]));
    }
    table
}
