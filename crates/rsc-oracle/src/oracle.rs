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

//! Typed queries and mutations on Oracle objects.

use chrono_tz::Tz;
use serde_json::json;
use tracing::debug;

use crate::graphql::{GraphQl, query};
use crate::model::{
    AsyncRequest, ClusterTimezoneData, DataGuardGroupData, DatabaseDetails, DeleteOracleMountData,
    LiveMountNode, LiveMountsData, LogBackupConfig, LogBackupConfigData, MountOracleDatabaseData,
    OracleDatabaseData, OracleDatabaseSummariesData, OracleDatabaseSummary, RacDetails,
    RacDetailsData, RecoverableRangesData, RecoveryRange, host_or_rac,
};
use crate::mount::MountRequest;
use crate::queries::{self, filter};
use crate::resolver::ResolvedObject;
use crate::time::parse_instant;
use crate::RscResult;

/// Narrows the live mount listing. Both fields are optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LiveMountFilter {
    /// Source database name, compared case-insensitively.
    pub source_database: Option<String>,
    /// Substring of the host or RAC the mount lives on.
    pub mounted_on: Option<String>,
}

impl LiveMountFilter {
    pub fn matches(&self, mount: &LiveMountNode) -> bool {
        let source_ok = match &self.source_database {
            Some(wanted) => mount
                .source_database
                .as_ref()
                .and_then(|s| s.name.as_deref())
                .is_some_and(|name| name.eq_ignore_ascii_case(wanted)),
            None => true,
        };
        let target_ok = match &self.mounted_on {
            Some(wanted) => {
                let wanted = wanted.to_lowercase();
                mount
                    .mounted_on()
                    .is_some_and(|host| host.to_lowercase().contains(&wanted))
            }
            None => true,
        };
        source_ok && target_ok
    }
}

pub struct Oracle<'a, G: GraphQl + ?Sized> {
    client: &'a G,
}

impl<'a, G: GraphQl + ?Sized> Oracle<'a, G> {
    pub fn new(client: &'a G) -> Self {
        Oracle { client }
    }

    /// Every protected, non-replicated database, sorted by name then host.
    pub async fn list_databases(&self) -> RscResult<Vec<OracleDatabaseSummary>> {
        let data: OracleDatabaseSummariesData = query(
            self.client,
            queries::ORACLE_DATABASES,
            json!({ "filter": [filter("IS_RELIC", "false"), filter("IS_REPLICATED", "false")] }),
        )
        .await?;
        let mut databases = data.oracle_databases.nodes;
        databases.sort_by(|a, b| {
            (a.name.as_str(), host_or_rac(&a.physical_path))
                .cmp(&(b.name.as_str(), host_or_rac(&b.physical_path)))
        });
        debug!("Found {} Oracle databases", databases.len());
        Ok(databases)
    }

    /// Group details for a Data Guard group, database details otherwise.
    pub async fn database_details(&self, resolved: &ResolvedObject) -> RscResult<DatabaseDetails> {
        self.details(&resolved.object_id, resolved.is_data_guard_member)
            .await
    }

    pub async fn details(&self, id: &str, is_data_guard_group: bool) -> RscResult<DatabaseDetails> {
        let variables = json!({ "fid": id });
        if is_data_guard_group {
            debug!("Database is part of a Data Guard group, using group details");
            let data: DataGuardGroupData =
                query(self.client, queries::DATA_GUARD_GROUP_DETAILS, variables).await?;
            Ok(DatabaseDetails::DataGuardGroup(data.oracle_data_guard_group))
        } else {
            let data: OracleDatabaseData =
                query(self.client, queries::ORACLE_DATABASE_DETAILS, variables).await?;
            Ok(DatabaseDetails::Database(data.oracle_database))
        }
    }

    pub async fn log_backup_config(&self, id: &str) -> RscResult<LogBackupConfig> {
        let data: LogBackupConfigData = query(
            self.client,
            queries::LOG_BACKUP_CONFIG,
            json!({ "input": { "id": id } }),
        )
        .await?;
        Ok(data.oracle_database_log_backup_config)
    }

    pub async fn recovery_ranges(&self, id: &str) -> RscResult<Vec<RecoveryRange>> {
        let data: RecoverableRangesData = query(
            self.client,
            queries::RECOVERABLE_RANGES,
            json!({ "input": { "id": id } }),
        )
        .await?;
        Ok(data.oracle_recoverable_ranges.data)
    }

    pub async fn rac_details(&self, id: &str) -> RscResult<RacDetails> {
        let data: RacDetailsData =
            query(self.client, queries::ORACLE_RAC, json!({ "fid": id })).await?;
        Ok(data.oracle_rac)
    }

    pub async fn cluster_timezone(&self, cluster_id: &str) -> RscResult<String> {
        let data: ClusterTimezoneData = query(
            self.client,
            queries::CLUSTER_TIMEZONE,
            json!({ "clusterUuid": cluster_id }),
        )
        .await?;
        Ok(data.cluster.timezone)
    }

    pub async fn live_mount(&self, request: &MountRequest) -> RscResult<AsyncRequest> {
        debug!(
            "Mount parameters source={}, target={}, time_ms={}, files_only={}",
            request.source_id,
            request.target_id,
            request.recovery_point_millis,
            request.is_files_only()
        );
        let data: MountOracleDatabaseData = query(
            self.client,
            queries::MOUNT_ORACLE_DATABASE,
            request.to_variables(),
        )
        .await?;
        Ok(data.mount_oracle_database)
    }

    /// Live mounts that pass `filter`, sorted by cluster then source
    /// database.
    pub async fn live_mounts(&self, filter: &LiveMountFilter) -> RscResult<Vec<LiveMountNode>> {
        let data: LiveMountsData =
            query(self.client, queries::ORACLE_LIVE_MOUNTS, json!({})).await?;
        let mut mounts: Vec<LiveMountNode> = data
            .oracle_live_mounts
            .nodes
            .into_iter()
            .filter(|m| filter.matches(m))
            .collect();
        mounts.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
        Ok(mounts)
    }

    pub async fn unmount(&self, mount_id: &str, force: bool) -> RscResult<AsyncRequest> {
        debug!("Unmounting {mount_id}, force: {force}");
        let data: DeleteOracleMountData = query(
            self.client,
            queries::DELETE_ORACLE_MOUNT,
            json!({ "input": { "id": mount_id, "force": force } }),
        )
        .await?;
        Ok(data.delete_oracle_mount)
    }
}

fn sort_key(mount: &LiveMountNode) -> (Option<&str>, Option<&str>) {
    (
        mount.cluster.as_ref().and_then(|c| c.name.as_deref()),
        mount.source_database.as_ref().and_then(|s| s.name.as_deref()),
    )
}

/// The range ending last. Ranges whose end time does not parse sort first.
pub fn latest_recovery_point(ranges: &[RecoveryRange]) -> Option<&RecoveryRange> {
    ranges
        .iter()
        .max_by_key(|r| parse_instant(&r.end_time, Tz::UTC).ok())
}
