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
use rsc_oracle::model::{OracleDatabaseSummary, host_or_rac};
use rsc_oracle::oracle::Oracle;
use rsc_oracle::RscSession;

use super::Opts;
use crate::cfg::output::{OutputFormat, print_structured};

pub async fn list(
    session: &RscSession,
    format: OutputFormat,
    opts: &Opts,
) -> color_eyre::Result<()> {
    let databases = Oracle::new(session).list_databases().await?;
    let databases = filter_by_name(databases, opts.name.as_deref());

    if !print_structured(format, &databases)? {
        databases_to_table(&databases).printstd();
    }

    Ok(())
}

fn filter_by_name(
    databases: Vec<OracleDatabaseSummary>,
    name: Option<&str>,
) -> Vec<OracleDatabaseSummary> {
    match name {
        Some(name) => {
            let name = name.to_lowercase();
            databases
                .into_iter()
                .filter(|db| db.name.to_lowercase().contains(&name))
                .collect()
        }
        None => databases,
    }
}

// databases_to_table converts the database listing
// into a pretty ASCII table.
fn databases_to_table(databases: &[OracleDatabaseSummary]) -> Table {
    let mut table = Table::new();

    table.add_row(Row::new(vec![
        Cell::new("Database"),
        Cell::new("Host/Cluster"),
        Cell::new("Instances"),
        Cell::new("DG_Group"),
        Cell::new("CDM Cluster"),
        Cell::new("SLA"),
        Cell::new("Assignment"),
    ]));

    for db in databases {
        let group = db
            .data_guard_group
            .as_ref()
            .and_then(|g| g.name.as_deref())
            .unwrap_or("");
        table.add_row(Row::new(vec![
            Cell::new(&db.name),
            Cell::new(host_or_rac(&db.physical_path).unwrap_or("")),
            Cell::new(
                &db.num_instances
                    .map(|n| n.to_string())
                    .unwrap_or_default(),
            ),
            Cell::new(group),
            Cell::new(
                db.cluster
                    .as_ref()
                    .and_then(|c| c.name.as_deref())
                    .unwrap_or(""),
            ),
            Cell::new(
                db.effective_sla_domain
                    .as_ref()
                    .and_then(|s| s.name.as_deref())
                    .unwrap_or(""),
            ),
            Cell::new(db.sla_assignment.as_deref().unwrap_or("")),
        ]));
    }

    table
}
