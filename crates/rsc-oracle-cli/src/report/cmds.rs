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
use rsc_oracle::oracle::Oracle;
use rsc_oracle::report::{BackupReportRow, backup_report};
use rsc_oracle::RscSession;

use super::Opts;
use crate::cfg::output::{OutputFormat, print_structured};

pub async fn report(
    session: &RscSession,
    format: OutputFormat,
    opts: &Opts,
) -> color_eyre::Result<()> {
    let databases = Oracle::new(session).list_databases().await?;
    let report = backup_report(session, &databases, opts.workers).await;

    if !print_structured(format, &report.rows)? {
        rows_to_table(&report.rows).printstd();
    }

    for (id, error) in &report.failures {
        eprintln!("Could not report on {id}: {error}");
    }
    if !report.failures.is_empty() {
        return Err(eyre::eyre!(
            "{} of {} databases could not be reported on",
            report.failures.len(),
            report.failures.len() + report.rows.len()
        ));
    }

    Ok(())
}

// rows_to_table converts the backup report rows into
// a pretty ASCII table.
fn rows_to_table(rows: &[BackupReportRow]) -> Table {
    let mut table = Table::new();

    table.add_row(Row::new(vec![
        Cell::new("Host"),
        Cell::new("Database"),
        Cell::new("DG Group"),
        Cell::new("SLA"),
        Cell::new("Log Backup Frequency"),
        Cell::new("Last Snapshot"),
        Cell::new("Snapshots"),
        Cell::new("Cluster"),
    ]));

    for row in rows {
        table.add_row(Row::new(vec![
            Cell::new(&row.host),
            Cell::new(&row.database),
            Cell::new(row.data_guard_group.as_deref().unwrap_or("")),
            Cell::new(row.sla.as_deref().unwrap_or("")),
            Cell::new(
                &row.log_backup_frequency
                    .map(|f| f.to_string())
                    .unwrap_or_default(),
            ),
            Cell::new(row.last_snapshot.as_deref().unwrap_or("")),
            Cell::new(&row.snapshots.to_string()),
            Cell::new(&row.cluster),
        ]));
    }

    table
}
