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

//! Backup report over every database, fetched with bounded concurrency.

use std::future::Future;

use futures::stream::{self, StreamExt};
use serde::Serialize;
use tracing::{debug, warn};

use crate::graphql::GraphQl;
use crate::model::{DataGuardType, DatabaseDetails, OracleDatabaseSummary, host_or_rac};
use crate::oracle::Oracle;
use crate::time::cluster_time;
use crate::{RscError, RscResult};

pub const DEFAULT_WORKERS: usize = 16;

/// One object to report on: a standalone database or a Data Guard group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportTarget {
    pub id: String,
    pub is_data_guard_group: bool,
}

/// Distinct report targets: members collapse onto their group.
pub fn report_targets(databases: &[OracleDatabaseSummary]) -> Vec<ReportTarget> {
    let mut targets: Vec<ReportTarget> = Vec::new();
    for db in databases {
        let target = ReportTarget {
            id: db.addressable_id().to_string(),
            is_data_guard_group: db.data_guard_type == DataGuardType::Member
                && db.data_guard_group.is_some(),
        };
        if !targets.iter().any(|t| t.id == target.id) {
            targets.push(target);
        }
    }
    targets
}

/// Runs `task` for each item with at most `workers` in flight. Each item
/// yields its own result; completion order is not preserved.
pub async fn fan_out<I, T, F, Fut>(items: Vec<I>, workers: usize, task: F) -> Vec<(I, RscResult<T>)>
where
    I: Clone,
    F: Fn(I) -> Fut,
    Fut: Future<Output = RscResult<T>>,
{
    stream::iter(items)
        .map(|item| {
            let fut = task(item.clone());
            async move { (item, fut.await) }
        })
        .buffer_unordered(workers.max(1))
        .collect()
        .await
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BackupReportRow {
    pub host: String,
    pub database: String,
    pub data_guard_group: Option<String>,
    pub sla: Option<String>,
    pub log_backup_frequency: Option<i64>,
    pub last_snapshot: Option<String>,
    pub snapshots: usize,
    pub cluster: String,
}

impl BackupReportRow {
    fn from_details(details: &DatabaseDetails) -> BackupReportRow {
        let cluster = details.cluster();
        let last_snapshot = details.latest_snapshot().map(|s| {
            cluster
                .timezone
                .as_deref()
                .and_then(|tz| cluster_time(&s.date, tz).ok())
                .unwrap_or_else(|| s.date.clone())
        });
        let (host, data_guard_group, log_backup_frequency) = match details {
            DatabaseDetails::Database(d) => (
                host_or_rac(&d.physical_path).unwrap_or_default().to_string(),
                None,
                d.log_backup_frequency,
            ),
            DatabaseDetails::DataGuardGroup(g) => {
                let hosts: Vec<&str> = g
                    .descendant_connection
                    .nodes
                    .iter()
                    .filter_map(|m| host_or_rac(&m.physical_path))
                    .collect();
                (hosts.join(", "), Some(g.name.clone()), None)
            }
        };
        BackupReportRow {
            host,
            database: details.name().to_string(),
            data_guard_group,
            sla: details.sla_name().map(str::to_string),
            log_backup_frequency,
            last_snapshot,
            snapshots: details.snapshots().len(),
            cluster: cluster.name.clone(),
        }
    }
}

#[derive(Debug, Default)]
pub struct BackupReport {
    /// Sorted by host then database.
    pub rows: Vec<BackupReportRow>,
    pub failures: Vec<(String, RscError)>,
}

/// Fetches details for every target, `workers` at a time, and aggregates
/// rows and per-item failures.
pub async fn backup_report<G: GraphQl + ?Sized>(
    client: &G,
    databases: &[OracleDatabaseSummary],
    workers: usize,
) -> BackupReport {
    let targets = report_targets(databases);
    debug!("Report targets: {}", targets.len());

    let oracle = &Oracle::new(client);
    let results = fan_out(targets, workers, move |target| async move {
        oracle.details(&target.id, target.is_data_guard_group).await
    })
    .await;

    let mut report = BackupReport::default();
    for (target, result) in results {
        match result {
            Ok(details) => report.rows.push(BackupReportRow::from_details(&details)),
            Err(e) => {
                warn!("Could not fetch details for {}: {e}", target.id);
                report.failures.push((target.id, e));
            }
        }
    }
    report.rows.sort_by(|a, b| {
        (a.host.as_str(), a.database.as_str()).cmp(&(b.host.as_str(), b.database.as_str()))
    });
    report.failures.sort_by(|a, b| a.0.cmp(&b.0));
    report
}
