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

//! GraphQL documents sent to RSC. The shapes selected here must match the
//! records in [`crate::model`].

use serde_json::{Value, json};

pub const ORACLE_DATABASE_CANDIDATES: &str = r#"
query OracleDatabaseCandidates($filter: [Filter!]) {
  oracleDatabases(filter: $filter) {
    nodes {
      name
      id
      cluster { name id timezone }
      dataGuardType
      dataGuardGroup { id dbUniqueName }
      dbRole
      dbUniqueName
      isLiveMount
      isRelic
      physicalPath { fid name objectType }
    }
  }
}
"#;

pub const ORACLE_DG_GROUPS: &str = r#"
query OracleDGGroups($filter: [Filter!], $typeFilter: [HierarchyObjectTypeEnum!]) {
  oracleTopLevelDescendants(filter: $filter, typeFilter: $typeFilter) {
    nodes {
      ... on OracleDataGuardGroup {
        name
        id
        cluster { name id timezone }
        dbUniqueName
        descendantConnection {
          nodes {
            id
            name
            ... on OracleDatabase {
              dbUniqueName
              dbRole
              isLiveMount
              physicalPath { fid name objectType }
            }
          }
        }
      }
    }
  }
}
"#;

pub const ORACLE_HOSTS: &str = r#"
query OracleHosts($typeFilter: [HierarchyObjectTypeEnum!], $filter: [Filter!]) {
  oracleTopLevelDescendants(typeFilter: $typeFilter, filter: $filter) {
    nodes {
      ... on OracleHost {
        id
        name
        cluster { id name }
      }
    }
  }
}
"#;

pub const ORACLE_RACS: &str = r#"
query OracleRacs($typeFilter: [HierarchyObjectTypeEnum!], $filter: [Filter!]) {
  oracleTopLevelDescendants(typeFilter: $typeFilter, filter: $filter) {
    nodes {
      ... on OracleRac {
        name
        id
        nodes { hostFid nodeName status }
        cluster { id name }
      }
    }
  }
}
"#;

pub const CLUSTER_CONNECTION: &str = r#"
query ClusterConnection($filter: ClusterFilterInput) {
  clusterConnection(filter: $filter) {
    nodes { id name }
  }
}
"#;

pub const CLUSTER_TIMEZONE: &str = r#"
query Cluster($clusterUuid: UUID!) {
  cluster(clusterUuid: $clusterUuid) {
    timezone
  }
}
"#;

pub const ORACLE_DATABASE_DETAILS: &str = r#"
query OracleDatabase($fid: UUID!) {
  oracleDatabase(fid: $fid) {
    id
    name
    dataGuardType
    isLiveMount
    isRelic
    numChannels
    physicalPath { name fid objectType }
    numInstances
    slaAssignment
    effectiveSlaDomain {
      ... on ClusterSlaDomain { id name }
      ... on GlobalSlaReply { id name }
    }
    logBackupFrequency
    logRetentionHours
    cluster { id name timezone }
    snapshotConnection {
      nodes {
        id
        date
        cluster { name }
        cdmId
      }
    }
  }
}
"#;

pub const DATA_GUARD_GROUP_DETAILS: &str = r#"
query DataGuardGroupQuery($fid: UUID!) {
  oracleDataGuardGroup(fid: $fid) {
    name
    id
    cluster { id name timezone }
    dataGuardType
    dbUniqueName
    isRelic
    numChannels
    numInstances
    slaAssignment
    effectiveSlaDomain {
      ... on ClusterSlaDomain { id name }
      ... on GlobalSlaReply { id name }
    }
    snapshotConnection {
      nodes { date id }
    }
    descendantConnection {
      nodes {
        id
        name
        ... on OracleDatabase {
          dbUniqueName
          dbRole
          physicalPath { fid name objectType }
        }
      }
    }
  }
}
"#;

pub const LOG_BACKUP_CONFIG: &str = r#"
query OracleDatabaseLogBackupConfig($input: OracleDbInput!) {
  oracleDatabaseLogBackupConfig(input: $input) {
    hostLogRetentionHours
    logBackupFrequencyMin
    logRetentionHours
  }
}
"#;

pub const RECOVERABLE_RANGES: &str = r#"
query OracleRecoverableRanges($input: GetOracleDbRecoverableRangesInput!) {
  oracleRecoverableRanges(input: $input) {
    data { beginTime endTime status }
    total
  }
}
"#;

pub const ORACLE_RAC: &str = r#"
query OracleRac($fid: UUID!) {
  oracleRac(fid: $fid) {
    id
    name
    nodes { hostFid nodeName status }
  }
}
"#;

pub const ORACLE_DATABASES: &str = r#"
query OracleDatabases($filter: [Filter!]) {
  oracleDatabases(filter: $filter) {
    nodes {
      id
      name
      dbUniqueName
      isLiveMount
      numInstances
      physicalPath { name objectType }
      cluster { id name }
      dbRole
      dataGuardType
      dataGuardGroup { id name dbUniqueName }
      slaAssignment
      effectiveSlaDomain {
        ... on GlobalSlaReply { name }
        ... on ClusterSlaDomain { name }
      }
    }
  }
}
"#;

pub const ORACLE_LIVE_MOUNTS: &str = r#"
query OracleLiveMounts($filters: [OracleLiveMountFilterInput!]) {
  oracleLiveMounts(filters: $filters) {
    nodes {
      id
      cluster { id name }
      sourceDatabase { id name }
      targetOracleHost { id name }
      targetOracleRac { id name }
      isFilesOnlyMount
      status
      creationDate
    }
  }
}
"#;

pub const MOUNT_ORACLE_DATABASE: &str = r#"
mutation MountOracleDatabase($input: MountOracleDatabaseInput!) {
  mountOracleDatabase(input: $input) {
    id
    status
    startTime
    endTime
    progress
    error { message }
  }
}
"#;

pub const DELETE_ORACLE_MOUNT: &str = r#"
mutation DeleteOracleMount($input: DeleteOracleMountInput!) {
  deleteOracleMount(input: $input) {
    id
    status
    startTime
    endTime
    progress
    error { message }
  }
}
"#;

pub const ASYNC_REQUEST_DETAILS: &str = r#"
query OracleDatabaseAsyncRequestDetails($input: GetOracleAsyncRequestStatusInput!) {
  oracleDatabaseAsyncRequestDetails(input: $input) {
    id
    status
    startTime
    endTime
    progress
    error { message }
  }
}
"#;

/// One `{field, texts}` entry of a `[Filter!]` argument.
pub fn filter(field: &str, text: &str) -> Value {
    json!({ "field": field, "texts": [text] })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_shape() {
        assert_eq!(
            filter("NAME", "ORCL"),
            json!({"field": "NAME", "texts": ["ORCL"]})
        );
    }
}
