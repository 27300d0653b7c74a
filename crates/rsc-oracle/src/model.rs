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

//! Typed records for the GraphQL responses this crate consumes. There is
//! one record per distinct query shape; fields the API may omit or null
//! are `Option` or default to empty.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Connection<T> {
    #[serde(default = "Vec::new", deserialize_with = "nullable")]
    pub nodes: Vec<T>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Connection { nodes: Vec::new() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterRef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub timezone: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathSegment {
    #[serde(default)]
    pub fid: Option<String>,
    pub name: String,
    #[serde(default)]
    pub object_type: Option<String>,
}

pub const OBJECT_TYPE_HOST: &str = "OracleHost";
pub const OBJECT_TYPE_RAC: &str = "OracleRac";
pub const OBJECT_TYPE_DATA_GUARD_GROUP: &str = "ORACLE_DATA_GUARD_GROUP";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataGuardType {
    #[serde(rename = "DATA_GUARD_MEMBER")]
    Member,
    #[serde(rename = "NON_DATA_GUARD")]
    NonDataGuard,
    #[serde(rename = "DATA_GUARD_GROUP")]
    Group,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataGuardGroupRef {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub db_unique_name: Option<String>,
}

/// A candidate returned by the database name search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleDatabaseNode {
    pub id: String,
    pub name: String,
    pub cluster: ClusterRef,
    #[serde(default, deserialize_with = "nullable")]
    pub data_guard_type: DataGuardType,
    #[serde(default)]
    pub data_guard_group: Option<DataGuardGroupRef>,
    #[serde(default)]
    pub db_role: Option<String>,
    #[serde(default)]
    pub db_unique_name: Option<String>,
    #[serde(default)]
    pub is_live_mount: bool,
    #[serde(default)]
    pub is_relic: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub physical_path: Vec<PathSegment>,
}

impl OracleDatabaseNode {
    pub fn is_data_guard_member(&self) -> bool {
        self.data_guard_type == DataGuardType::Member
    }

    pub fn host_or_rac(&self) -> Option<&str> {
        host_or_rac(&self.physical_path)
    }
}

/// Name of the host or RAC segment of a physical path, if any.
pub fn host_or_rac(path: &[PathSegment]) -> Option<&str> {
    path.iter()
        .find(|p| {
            matches!(
                p.object_type.as_deref(),
                Some(OBJECT_TYPE_HOST) | Some(OBJECT_TYPE_RAC)
            )
        })
        .map(|p| p.name.as_str())
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleDatabasesData {
    pub oracle_databases: Connection<OracleDatabaseNode>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataGuardMemberNode {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub db_unique_name: Option<String>,
    #[serde(default)]
    pub db_role: Option<String>,
    #[serde(default)]
    pub is_live_mount: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub physical_path: Vec<PathSegment>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataGuardGroupNode {
    pub id: String,
    pub name: String,
    pub cluster: ClusterRef,
    #[serde(default)]
    pub db_unique_name: Option<String>,
    #[serde(default)]
    pub descendant_connection: Connection<DataGuardMemberNode>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopLevelDescendantsData<T> {
    pub oracle_top_level_descendants: Connection<T>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleHostNode {
    pub id: String,
    pub name: String,
    pub cluster: ClusterRef,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RacNode {
    #[serde(default)]
    pub host_fid: Option<String>,
    pub node_name: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleRacNode {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub nodes: Vec<RacNode>,
    pub cluster: ClusterRef,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterNode {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterConnectionData {
    pub cluster_connection: Connection<ClusterNode>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ClusterTimezoneData {
    pub cluster: ClusterTimezone,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ClusterTimezone {
    pub timezone: String,
}

// --> details <--

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaDomainRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotNode {
    pub id: String,
    pub date: String,
    #[serde(default)]
    pub cluster: Option<NamedRef>,
    #[serde(default)]
    pub cdm_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleDatabaseDetails {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub data_guard_type: DataGuardType,
    #[serde(default)]
    pub is_live_mount: bool,
    #[serde(default)]
    pub is_relic: bool,
    #[serde(default)]
    pub num_channels: Option<i64>,
    #[serde(default)]
    pub num_instances: Option<i64>,
    #[serde(default, deserialize_with = "nullable")]
    pub physical_path: Vec<PathSegment>,
    #[serde(default)]
    pub sla_assignment: Option<String>,
    #[serde(default)]
    pub effective_sla_domain: Option<SlaDomainRef>,
    #[serde(default)]
    pub log_backup_frequency: Option<i64>,
    #[serde(default)]
    pub log_retention_hours: Option<i64>,
    pub cluster: ClusterRef,
    #[serde(default)]
    pub snapshot_connection: Connection<SnapshotNode>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataGuardGroupDetails {
    pub id: String,
    pub name: String,
    pub cluster: ClusterRef,
    #[serde(default, deserialize_with = "nullable")]
    pub data_guard_type: DataGuardType,
    #[serde(default)]
    pub db_unique_name: Option<String>,
    #[serde(default)]
    pub is_relic: bool,
    #[serde(default)]
    pub num_channels: Option<i64>,
    #[serde(default)]
    pub num_instances: Option<i64>,
    #[serde(default)]
    pub sla_assignment: Option<String>,
    #[serde(default)]
    pub effective_sla_domain: Option<SlaDomainRef>,
    #[serde(default)]
    pub snapshot_connection: Connection<SnapshotNode>,
    #[serde(default)]
    pub descendant_connection: Connection<DataGuardMemberNode>,
}

/// Details of a resolved object: a standalone database or a Data Guard
/// group, depending on what the name resolved to.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DatabaseDetails {
    Database(OracleDatabaseDetails),
    DataGuardGroup(DataGuardGroupDetails),
}

impl DatabaseDetails {
    pub fn id(&self) -> &str {
        match self {
            DatabaseDetails::Database(d) => &d.id,
            DatabaseDetails::DataGuardGroup(g) => &g.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            DatabaseDetails::Database(d) => &d.name,
            DatabaseDetails::DataGuardGroup(g) => &g.name,
        }
    }

    pub fn cluster(&self) -> &ClusterRef {
        match self {
            DatabaseDetails::Database(d) => &d.cluster,
            DatabaseDetails::DataGuardGroup(g) => &g.cluster,
        }
    }

    pub fn snapshots(&self) -> &[SnapshotNode] {
        match self {
            DatabaseDetails::Database(d) => &d.snapshot_connection.nodes,
            DatabaseDetails::DataGuardGroup(g) => &g.snapshot_connection.nodes,
        }
    }

    pub fn sla_name(&self) -> Option<&str> {
        let sla = match self {
            DatabaseDetails::Database(d) => d.effective_sla_domain.as_ref(),
            DatabaseDetails::DataGuardGroup(g) => g.effective_sla_domain.as_ref(),
        };
        sla.and_then(|s| s.name.as_deref())
    }

    pub fn latest_snapshot(&self) -> Option<&SnapshotNode> {
        self.snapshots().iter().max_by(|a, b| a.date.cmp(&b.date))
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleDatabaseData {
    pub oracle_database: OracleDatabaseDetails,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataGuardGroupData {
    pub oracle_data_guard_group: DataGuardGroupDetails,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogBackupConfig {
    #[serde(default)]
    pub host_log_retention_hours: Option<i64>,
    #[serde(default)]
    pub log_backup_frequency_min: Option<i64>,
    #[serde(default)]
    pub log_retention_hours: Option<i64>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogBackupConfigData {
    pub oracle_database_log_backup_config: LogBackupConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryRange {
    pub begin_time: String,
    pub end_time: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RecoverableRanges {
    #[serde(default, deserialize_with = "nullable")]
    pub data: Vec<RecoveryRange>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoverableRangesData {
    pub oracle_recoverable_ranges: RecoverableRanges,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RacDetails {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub nodes: Vec<RacNode>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RacDetailsData {
    pub oracle_rac: RacDetails,
}

// --> listing <--

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleDatabaseSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub db_unique_name: Option<String>,
    #[serde(default)]
    pub is_live_mount: bool,
    #[serde(default)]
    pub num_instances: Option<i64>,
    #[serde(default, deserialize_with = "nullable")]
    pub physical_path: Vec<PathSegment>,
    #[serde(default)]
    pub cluster: Option<NamedRef>,
    #[serde(default)]
    pub db_role: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub data_guard_type: DataGuardType,
    #[serde(default)]
    pub data_guard_group: Option<DataGuardGroupRef>,
    #[serde(default)]
    pub sla_assignment: Option<String>,
    #[serde(default)]
    pub effective_sla_domain: Option<SlaDomainRef>,
}

impl OracleDatabaseSummary {
    /// Id operations should target: the Data Guard group for members,
    /// the database itself otherwise.
    pub fn addressable_id(&self) -> &str {
        match (&self.data_guard_type, &self.data_guard_group) {
            (DataGuardType::Member, Some(group)) => &group.id,
            _ => &self.id,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleDatabaseSummariesData {
    pub oracle_databases: Connection<OracleDatabaseSummary>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveMountNode {
    pub id: String,
    #[serde(default)]
    pub cluster: Option<NamedRef>,
    #[serde(default)]
    pub source_database: Option<NamedRef>,
    #[serde(default)]
    pub target_oracle_host: Option<NamedRef>,
    #[serde(default)]
    pub target_oracle_rac: Option<NamedRef>,
    #[serde(default)]
    pub is_files_only_mount: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub creation_date: Option<String>,
}

impl LiveMountNode {
    pub fn mounted_on(&self) -> Option<&str> {
        self.target_oracle_host
            .as_ref()
            .or(self.target_oracle_rac.as_ref())
            .and_then(|t| t.name.as_deref())
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveMountsData {
    pub oracle_live_mounts: Connection<LiveMountNode>,
}

// --> async requests <--

/// Status of an asynchronous RSC request. Values this crate does not know
/// are kept verbatim in `Other` and treated as still in flight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AsyncRequestStatus {
    Queued,
    Acquiring,
    Running,
    Finishing,
    ToCancel,
    Succeeded,
    Failed,
    Canceled,
    Other(String),
}

impl AsyncRequestStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AsyncRequestStatus::Succeeded
                | AsyncRequestStatus::Failed
                | AsyncRequestStatus::Canceled
        )
    }

    pub fn as_str(&self) -> &str {
        match self {
            AsyncRequestStatus::Queued => "QUEUED",
            AsyncRequestStatus::Acquiring => "ACQUIRING",
            AsyncRequestStatus::Running => "RUNNING",
            AsyncRequestStatus::Finishing => "FINISHING",
            AsyncRequestStatus::ToCancel => "TO_CANCEL",
            AsyncRequestStatus::Succeeded => "SUCCEEDED",
            AsyncRequestStatus::Failed => "FAILED",
            AsyncRequestStatus::Canceled => "CANCELED",
            AsyncRequestStatus::Other(s) => s,
        }
    }
}

impl From<String> for AsyncRequestStatus {
    fn from(value: String) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "QUEUED" => AsyncRequestStatus::Queued,
            "ACQUIRING" => AsyncRequestStatus::Acquiring,
            "RUNNING" => AsyncRequestStatus::Running,
            "FINISHING" => AsyncRequestStatus::Finishing,
            "TO_CANCEL" => AsyncRequestStatus::ToCancel,
            "SUCCEEDED" => AsyncRequestStatus::Succeeded,
            "FAILED" => AsyncRequestStatus::Failed,
            "CANCELED" | "CANCELLED" => AsyncRequestStatus::Canceled,
            _ => AsyncRequestStatus::Other(value),
        }
    }
}

impl From<AsyncRequestStatus> for String {
    fn from(value: AsyncRequestStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for AsyncRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsyncRequestError {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsyncRequest {
    pub id: String,
    pub status: AsyncRequestStatus,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub error: Option<AsyncRequestError>,
}

impl AsyncRequest {
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().and_then(|e| e.message.as_deref())
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsyncRequestDetailsData {
    pub oracle_database_async_request_details: AsyncRequest,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MountOracleDatabaseData {
    pub mount_oracle_database: AsyncRequest,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOracleMountData {
    pub delete_oracle_mount: AsyncRequest,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn connection_nodes_tolerate_null_and_missing() {
        let listed: Connection<NamedRef> =
            serde_json::from_value(json!({"nodes": [{"id": "c-1", "name": "cdm01"}]})).unwrap();
        assert_eq!(listed.nodes.len(), 1);
        assert_eq!(listed.nodes[0].name.as_deref(), Some("cdm01"));

        let null: Connection<NamedRef> = serde_json::from_value(json!({"nodes": null})).unwrap();
        assert!(null.nodes.is_empty());

        let missing: Connection<NamedRef> = serde_json::from_value(json!({})).unwrap();
        assert!(missing.nodes.is_empty());
    }

    #[test]
    fn database_node_tolerates_nulls() {
        let node: OracleDatabaseNode = serde_json::from_value(json!({
            "id": "db-1",
            "name": "ORCL",
            "cluster": {"id": "c-1", "name": "cdm01", "timezone": "America/Chicago"},
            "dataGuardType": null,
            "dataGuardGroup": null,
            "physicalPath": null,
            "isLiveMount": false
        }))
        .unwrap();
        assert_eq!(node.data_guard_type, DataGuardType::Unknown);
        assert!(node.physical_path.is_empty());
        assert!(!node.is_data_guard_member());
    }

    #[test]
    fn unknown_data_guard_type_is_not_member() {
        let node: OracleDatabaseNode = serde_json::from_value(json!({
            "id": "db-1",
            "name": "ORCL",
            "cluster": {"id": "c-1", "name": "cdm01"},
            "dataGuardType": "SOMETHING_NEW"
        }))
        .unwrap();
        assert_eq!(node.data_guard_type, DataGuardType::Unknown);
    }

    #[test]
    fn async_status_parses_known_and_unknown_values() {
        let known: AsyncRequestStatus = serde_json::from_value(json!("SUCCEEDED")).unwrap();
        assert_eq!(known, AsyncRequestStatus::Succeeded);
        assert!(known.is_terminal());

        let other: AsyncRequestStatus = serde_json::from_value(json!("UNDOING")).unwrap();
        assert_eq!(other, AsyncRequestStatus::Other("UNDOING".to_string()));
        assert!(!other.is_terminal());
        assert_eq!(other.to_string(), "UNDOING");

        assert_eq!(
            serde_json::to_value(AsyncRequestStatus::ToCancel).unwrap(),
            json!("TO_CANCEL")
        );
    }

    #[test]
    fn host_or_rac_prefers_host_segment() {
        let path = vec![
            PathSegment {
                fid: None,
                name: "cdm01".to_string(),
                object_type: Some("Cluster".to_string()),
            },
            PathSegment {
                fid: None,
                name: "oracle-host-01.example.com".to_string(),
                object_type: Some(OBJECT_TYPE_HOST.to_string()),
            },
        ];
        assert_eq!(host_or_rac(&path), Some("oracle-host-01.example.com"));
    }

    #[test]
    fn summary_addressable_id_uses_group_for_members() {
        let summary: OracleDatabaseSummary = serde_json::from_value(json!({
            "id": "member-1",
            "name": "ORCL",
            "dataGuardType": "DATA_GUARD_MEMBER",
            "dataGuardGroup": {"id": "dg-1", "dbUniqueName": "ORCL"}
        }))
        .unwrap();
        assert_eq!(summary.addressable_id(), "dg-1");
    }
}
