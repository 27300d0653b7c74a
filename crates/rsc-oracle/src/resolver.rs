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

//! Turns names typed by an operator into RSC object ids.
//!
//! Every resolution ends in exactly one id or an error. The resolver never
//! picks one of several candidates on its own; the only collapse it performs
//! is of raw matches that are proven to belong to the same Data Guard group.

use serde_json::json;
use tracing::debug;

use crate::graphql::{GraphQl, query};
use crate::model::{
    ClusterConnectionData, DataGuardGroupNode, OBJECT_TYPE_DATA_GUARD_GROUP, OBJECT_TYPE_HOST,
    OBJECT_TYPE_RAC, OracleDatabaseNode, OracleDatabasesData, OracleHostNode, OracleRacNode,
    TopLevelDescendantsData,
};
use crate::queries::{self, filter};
use crate::{RscError, RscResult};

/// A database as named by an operator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DatabaseReference {
    pub database_name: String,
    /// Substring of a host or RAC name in the database's physical path.
    pub host: Option<String>,
    /// Name of the Rubrik cluster holding the backups.
    pub cluster: Option<String>,
}

impl DatabaseReference {
    pub fn new(database_name: impl Into<String>) -> Self {
        DatabaseReference {
            database_name: database_name.into(),
            ..Default::default()
        }
    }

    pub fn with_host(mut self, host: Option<String>) -> Self {
        self.host = host.filter(|h| !h.is_empty());
        self
    }

    pub fn with_cluster(mut self, cluster: Option<String>) -> Self {
        self.cluster = cluster.filter(|c| !c.is_empty());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedObject {
    /// Database id, or the Data Guard group id for group members.
    pub object_id: String,
    pub cluster_id: String,
    pub cluster_name: String,
    pub timezone: Option<String>,
    pub is_data_guard_member: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetKind {
    Host,
    Rac,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub id: String,
    pub name: String,
    pub rac_name: Option<String>,
    pub kind: TargetKind,
}

impl ResolvedTarget {
    pub fn is_rac(&self) -> bool {
        self.kind == TargetKind::Rac
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedCluster {
    pub id: String,
    pub name: String,
}

/// Resolver binds to a GraphQL client for the lifetime of a CLI command.
pub struct Resolver<'a, G: GraphQl + ?Sized> {
    client: &'a G,
}

impl<'a, G: GraphQl + ?Sized> Resolver<'a, G> {
    pub fn new(client: &'a G) -> Self {
        Resolver { client }
    }

    pub async fn resolve_cluster(&self, name: &str) -> RscResult<ResolvedCluster> {
        let data: ClusterConnectionData = query(
            self.client,
            queries::CLUSTER_CONNECTION,
            json!({ "filter": { "name": name } }),
        )
        .await?;
        let mut clusters = data.cluster_connection.nodes;
        match clusters.len() {
            0 => Err(RscError::NotFound(format!(
                "No clusters found with the cluster name: {name}"
            ))),
            1 => {
                let cluster = clusters.remove(0);
                debug!("Cluster returned name: {}, id: {}", cluster.name, cluster.id);
                Ok(ResolvedCluster {
                    id: cluster.id,
                    name: cluster.name,
                })
            }
            n => Err(RscError::Ambiguous(format!(
                "{n} clusters found with name: {name}. Please check the cluster name."
            ))),
        }
    }

    pub async fn resolve_database(&self, reference: &DatabaseReference) -> RscResult<ResolvedObject> {
        let name = reference.database_name.as_str();
        let cluster = match reference.cluster.as_deref() {
            Some(cluster_name) => Some(self.resolve_cluster(cluster_name).await?),
            None => None,
        };

        let mut filters = vec![filter("IS_RELIC", "false")];
        match &cluster {
            Some(c) => filters.push(filter("CLUSTER_ID", &c.id)),
            None => filters.push(filter("IS_REPLICATED", "false")),
        }
        filters.push(filter("NAME", name));

        let data: OracleDatabasesData = query(
            self.client,
            queries::ORACLE_DATABASE_CANDIDATES,
            json!({ "filter": filters }),
        )
        .await?;
        let candidates: Vec<OracleDatabaseNode> = data
            .oracle_databases
            .nodes
            .into_iter()
            .filter(|node| !node.is_live_mount)
            .collect();
        debug!(
            "Oracle DBs not live mounted with name {name}: {}",
            candidates.len()
        );

        if candidates.is_empty() {
            debug!("No Oracle DBs with name {name}, trying Data Guard groups");
            let groups = self.data_guard_groups(cluster.as_ref()).await?;
            return select_data_guard_group(name, &groups);
        }
        select_candidate(name, reference.host.as_deref(), &candidates)
    }

    async fn data_guard_groups(
        &self,
        cluster: Option<&ResolvedCluster>,
    ) -> RscResult<Vec<DataGuardGroupNode>> {
        let mut filters = vec![
            filter("IS_RELIC", "false"),
            filter("IS_REPLICATED", "false"),
        ];
        if let Some(c) = cluster {
            filters.push(filter("CLUSTER_ID", &c.id));
        }
        let data: TopLevelDescendantsData<DataGuardGroupNode> = query(
            self.client,
            queries::ORACLE_DG_GROUPS,
            json!({ "filter": filters, "typeFilter": OBJECT_TYPE_DATA_GUARD_GROUP }),
        )
        .await?;
        Ok(data.oracle_top_level_descendants.nodes)
    }

    /// Resolves a mount target on `cluster_id`. For [`TargetKind::Rac`] the
    /// name may be the RAC name or the name of one of its nodes.
    pub async fn resolve_target(
        &self,
        name: &str,
        cluster_id: &str,
        kind: TargetKind,
    ) -> RscResult<ResolvedTarget> {
        match kind {
            TargetKind::Host => self.resolve_host(name, cluster_id).await,
            TargetKind::Rac => self.resolve_rac(name, cluster_id).await,
        }
    }

    async fn resolve_host(&self, name: &str, cluster_id: &str) -> RscResult<ResolvedTarget> {
        let data: TopLevelDescendantsData<OracleHostNode> = query(
            self.client,
            queries::ORACLE_HOSTS,
            json!({
                "typeFilter": OBJECT_TYPE_HOST,
                "filter": [
                    filter("NAME", name),
                    filter("IS_RELIC", "false"),
                    filter("CLUSTER_ID", cluster_id),
                ],
            }),
        )
        .await?;
        let host = select_host(name, cluster_id, data.oracle_top_level_descendants.nodes)?;
        Ok(ResolvedTarget {
            id: host.id,
            name: host.name,
            rac_name: None,
            kind: TargetKind::Host,
        })
    }

    async fn resolve_rac(&self, name: &str, cluster_id: &str) -> RscResult<ResolvedTarget> {
        let mut racs = self.racs(Some(name), cluster_id).await?;
        debug!("RACs returned with name {name} on cluster {cluster_id}: {}", racs.len());
        let rac = match racs.len() {
            1 => racs.remove(0),
            0 => {
                debug!("Looking for RAC cluster containing host name: {name}");
                let all = self.racs(None, cluster_id).await?;
                select_rac_by_node(name, cluster_id, all)?
            }
            n => {
                return Err(RscError::Ambiguous(format!(
                    "{n} RAC clusters with name: {name} found on cluster: {cluster_id}. Please check the Oracle RACs on that cluster."
                )));
            }
        };
        Ok(ResolvedTarget {
            id: rac.id,
            name: name.to_string(),
            rac_name: Some(rac.name),
            kind: TargetKind::Rac,
        })
    }

    async fn racs(&self, name: Option<&str>, cluster_id: &str) -> RscResult<Vec<OracleRacNode>> {
        let mut filters = Vec::new();
        if let Some(name) = name {
            filters.push(filter("NAME", name));
        }
        filters.push(filter("IS_RELIC", "false"));
        filters.push(filter("CLUSTER_ID", cluster_id));
        let data: TopLevelDescendantsData<OracleRacNode> = query(
            self.client,
            queries::ORACLE_RACS,
            json!({ "typeFilter": OBJECT_TYPE_RAC, "filter": filters }),
        )
        .await?;
        Ok(data.oracle_top_level_descendants.nodes)
    }
}

fn resolved_from(node: &OracleDatabaseNode) -> ResolvedObject {
    let (object_id, is_data_guard_member) = match &node.data_guard_group {
        Some(group) if node.is_data_guard_member() => (group.id.clone(), true),
        _ => (node.id.clone(), false),
    };
    ResolvedObject {
        object_id,
        cluster_id: node.cluster.id.clone(),
        cluster_name: node.cluster.name.clone(),
        timezone: node.cluster.timezone.clone(),
        is_data_guard_member,
    }
}

/// Pushes `object` unless an entry with the same id is already present.
fn push_distinct(objects: &mut Vec<ResolvedObject>, object: ResolvedObject) {
    if !objects.iter().any(|o| o.object_id == object.object_id) {
        objects.push(object);
    }
}

/// Decides among non-empty, non-live-mount name matches.
fn select_candidate(
    name: &str,
    host: Option<&str>,
    candidates: &[OracleDatabaseNode],
) -> RscResult<ResolvedObject> {
    if let [only] = candidates {
        return Ok(resolved_from(only));
    }

    debug!("Multiple databases found with name: {name}");
    match host {
        Some(host) => {
            let mut matches = Vec::new();
            for node in candidates
                .iter()
                .filter(|n| n.physical_path.iter().any(|p| p.name.contains(host)))
            {
                push_distinct(&mut matches, resolved_from(node));
            }
            match matches.len() {
                0 => Err(RscError::NotFound(format!(
                    "No database with name {name} found on a host or RAC matching: {host}"
                ))),
                1 => Ok(matches.remove(0)),
                n => Err(RscError::Ambiguous(format!(
                    "Database {name} found on {n} hosts/RAC clusters matching: {host}. Specify a more exact host or RAC name."
                ))),
            }
        }
        None => {
            let mut groups = Vec::new();
            let mut standalone = Vec::new();
            for node in candidates {
                let object = resolved_from(node);
                if object.is_data_guard_member {
                    push_distinct(&mut groups, object);
                } else {
                    standalone.push(node.host_or_rac().unwrap_or(node.id.as_str()).to_string());
                }
            }
            if standalone.is_empty() && groups.len() == 1 {
                return Ok(groups.remove(0));
            }
            if standalone.is_empty() {
                return Err(RscError::Ambiguous(format!(
                    "Multiple DG Groups found for database with name or db unique name: {name}."
                )));
            }
            Err(RscError::Ambiguous(format!(
                "Database {name} found on multiple hosts/RAC clusters: {}. You must specify a host or RAC cluster name to obtain a unique id.",
                standalone.join(", ")
            )))
        }
    }
}

/// Finds the group owning a member whose db unique name is `name`.
fn select_data_guard_group(
    name: &str,
    groups: &[DataGuardGroupNode],
) -> RscResult<ResolvedObject> {
    let mut matches = Vec::new();
    for group in groups.iter().filter(|g| {
        g.descendant_connection
            .nodes
            .iter()
            .any(|m| m.db_unique_name.as_deref() == Some(name))
    }) {
        debug!("Found DB with dbUniqueName {name} in group {}", group.id);
        push_distinct(
            &mut matches,
            ResolvedObject {
                object_id: group.id.clone(),
                cluster_id: group.cluster.id.clone(),
                cluster_name: group.cluster.name.clone(),
                timezone: group.cluster.timezone.clone(),
                is_data_guard_member: true,
            },
        );
    }
    match matches.len() {
        0 => Err(RscError::NotFound(format!(
            "No database found for database with name or db unique name: {name}."
        ))),
        1 => Ok(matches.remove(0)),
        _ => Err(RscError::Ambiguous(format!(
            "Multiple DG Groups found for database with name or db unique name: {name}."
        ))),
    }
}

fn select_host(
    name: &str,
    cluster_id: &str,
    mut hosts: Vec<OracleHostNode>,
) -> RscResult<OracleHostNode> {
    match hosts.len() {
        0 => {
            return Err(RscError::NotFound(format!(
                "No hosts found with the target host name: {name}"
            )));
        }
        1 => return Ok(hosts.remove(0)),
        _ => debug!("Found multiple hosts named {name}"),
    }

    hosts.retain(|h| h.cluster.id == cluster_id);
    if hosts.is_empty() {
        return Err(RscError::NotFound(format!(
            "No hosts found with the target host name: {name} on cluster: {cluster_id}"
        )));
    }
    if hosts.len() > 1 {
        hosts.retain(|h| h.name.eq_ignore_ascii_case(name));
    }
    match hosts.len() {
        1 => Ok(hosts.remove(0)),
        _ => Err(RscError::Ambiguous(format!(
            "Multiple hosts with name: {name} found on cluster: {cluster_id}. Please check the Oracle hosts on that cluster."
        ))),
    }
}

fn select_rac_by_node(
    name: &str,
    cluster_id: &str,
    racs: Vec<OracleRacNode>,
) -> RscResult<OracleRacNode> {
    if racs.is_empty() {
        return Err(RscError::NotFound(format!(
            "No RAC clusters found on cluster id: {cluster_id}"
        )));
    }
    let needle = name.to_lowercase();
    let mut matches: Vec<OracleRacNode> = Vec::new();
    for rac in racs {
        let runs_on_host = rac
            .nodes
            .iter()
            .any(|n| n.node_name.to_lowercase().contains(&needle));
        if runs_on_host && !matches.iter().any(|m| m.id == rac.id) {
            matches.push(rac);
        }
    }
    match matches.len() {
        0 => Err(RscError::NotFound(format!(
            "No RAC clusters found running on host name: {name} on cluster: {cluster_id}"
        ))),
        1 => Ok(matches.remove(0)),
        n => Err(RscError::Ambiguous(format!(
            "{n} RAC clusters with host name: {name} found on cluster: {cluster_id}. Please check the Oracle hosts on that cluster."
        ))),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::graphql::mock::MockGraphQl;

    fn cluster() -> Value {
        json!({"id": "c-1", "name": "cdm01", "timezone": "America/Chicago"})
    }

    fn standalone(id: &str, host: &str) -> Value {
        json!({
            "id": id,
            "name": "ORCL",
            "cluster": cluster(),
            "dataGuardType": "NON_DATA_GUARD",
            "dataGuardGroup": null,
            "isLiveMount": false,
            "isRelic": false,
            "physicalPath": [{"fid": "h", "name": host, "objectType": "OracleHost"}]
        })
    }

    fn member(id: &str, group: &str, host: &str) -> Value {
        json!({
            "id": id,
            "name": "ORCL",
            "cluster": cluster(),
            "dataGuardType": "DATA_GUARD_MEMBER",
            "dataGuardGroup": {"id": group, "dbUniqueName": "ORCL"},
            "isLiveMount": false,
            "isRelic": false,
            "physicalPath": [{"fid": "h", "name": host, "objectType": "OracleHost"}]
        })
    }

    fn candidates(nodes: Vec<Value>) -> Value {
        json!({"oracleDatabases": {"nodes": nodes}})
    }

    fn group(id: &str, unique_names: &[&str]) -> Value {
        let members: Vec<Value> = unique_names
            .iter()
            .enumerate()
            .map(|(i, u)| json!({"id": format!("{id}-m{i}"), "name": "ORCL", "dbUniqueName": u}))
            .collect();
        json!({
            "id": id,
            "name": format!("group {id}"),
            "cluster": cluster(),
            "descendantConnection": {"nodes": members}
        })
    }

    fn descendants(nodes: Vec<Value>) -> Value {
        json!({"oracleTopLevelDescendants": {"nodes": nodes}})
    }

    async fn resolve(mock: &MockGraphQl, reference: DatabaseReference) -> RscResult<ResolvedObject> {
        Resolver::new(mock).resolve_database(&reference).await
    }

    #[tokio::test]
    async fn single_standalone_match_keeps_its_id() {
        let mock = MockGraphQl::new().on(
            "OracleDatabaseCandidates",
            candidates(vec![standalone("db-1", "host01")]),
        );
        let resolved = resolve(&mock, DatabaseReference::new("ORCL")).await.unwrap();
        assert_eq!(resolved.object_id, "db-1");
        assert!(!resolved.is_data_guard_member);
        assert_eq!(resolved.cluster_id, "c-1");
        assert_eq!(resolved.timezone.as_deref(), Some("America/Chicago"));
    }

    #[tokio::test]
    async fn single_member_match_resolves_to_group() {
        let mock = MockGraphQl::new().on(
            "OracleDatabaseCandidates",
            candidates(vec![member("db-1", "dg-9", "host01")]),
        );
        let resolved = resolve(&mock, DatabaseReference::new("ORCL")).await.unwrap();
        assert_eq!(resolved.object_id, "dg-9");
        assert!(resolved.is_data_guard_member);
    }

    #[tokio::test]
    async fn live_mounts_are_ignored() {
        let mut mounted = standalone("db-live", "host02");
        mounted["isLiveMount"] = json!(true);
        let mock = MockGraphQl::new().on(
            "OracleDatabaseCandidates",
            candidates(vec![standalone("db-1", "host01"), mounted]),
        );
        let resolved = resolve(&mock, DatabaseReference::new("ORCL")).await.unwrap();
        assert_eq!(resolved.object_id, "db-1");
    }

    #[tokio::test]
    async fn two_members_of_one_group_collapse() {
        let mock = MockGraphQl::new().on(
            "OracleDatabaseCandidates",
            candidates(vec![
                member("db-1", "dg-123", "host01"),
                member("db-2", "dg-123", "host02"),
            ]),
        );
        let resolved = resolve(&mock, DatabaseReference::new("ORCL")).await.unwrap();
        assert_eq!(resolved.object_id, "dg-123");
        assert!(resolved.is_data_guard_member);
        assert_eq!(mock.call_count("OracleDGGroups"), 0);
    }

    #[tokio::test]
    async fn members_of_different_groups_are_ambiguous() {
        let mock = MockGraphQl::new().on(
            "OracleDatabaseCandidates",
            candidates(vec![
                member("db-1", "dg-1", "host01"),
                member("db-2", "dg-2", "host02"),
            ]),
        );
        let err = resolve(&mock, DatabaseReference::new("ORCL")).await.unwrap_err();
        assert!(matches!(err, RscError::Ambiguous(_)), "{err}");
    }

    #[tokio::test]
    async fn standalone_mixed_with_member_needs_a_host() {
        let mock = MockGraphQl::new().on(
            "OracleDatabaseCandidates",
            candidates(vec![
                member("db-1", "dg-1", "host01"),
                standalone("db-2", "host02"),
            ]),
        );
        let err = resolve(&mock, DatabaseReference::new("ORCL")).await.unwrap_err();
        match err {
            RscError::Ambiguous(msg) => assert!(msg.contains("host02")),
            other => panic!("unexpected {other}"),
        }
    }

    #[tokio::test]
    async fn host_substring_picks_the_match() {
        let mock = MockGraphQl::new().on(
            "OracleDatabaseCandidates",
            candidates(vec![
                standalone("db-1", "oracle-host01.example.com"),
                standalone("db-2", "oracle-host02.example.com"),
            ]),
        );
        let reference = DatabaseReference::new("ORCL").with_host(Some("host02".to_string()));
        let resolved = resolve(&mock, reference).await.unwrap();
        assert_eq!(resolved.object_id, "db-2");
    }

    #[tokio::test]
    async fn host_substring_without_match_is_not_found() {
        let mock = MockGraphQl::new().on(
            "OracleDatabaseCandidates",
            candidates(vec![
                standalone("db-1", "oracle-host01"),
                standalone("db-2", "oracle-host02"),
            ]),
        );
        let reference = DatabaseReference::new("ORCL").with_host(Some("host03".to_string()));
        let err = resolve(&mock, reference).await.unwrap_err();
        assert!(matches!(err, RscError::NotFound(_)), "{err}");
    }

    #[tokio::test]
    async fn host_substring_matching_two_databases_is_ambiguous() {
        let mock = MockGraphQl::new().on(
            "OracleDatabaseCandidates",
            candidates(vec![
                standalone("db-1", "oracle-host01"),
                standalone("db-2", "oracle-host02"),
            ]),
        );
        let reference = DatabaseReference::new("ORCL").with_host(Some("oracle-host".to_string()));
        let err = resolve(&mock, reference).await.unwrap_err();
        assert!(matches!(err, RscError::Ambiguous(_)), "{err}");
    }

    #[tokio::test]
    async fn host_substring_matching_one_group_twice_collapses() {
        let mock = MockGraphQl::new().on(
            "OracleDatabaseCandidates",
            candidates(vec![
                member("db-1", "dg-7", "oracle-host01"),
                member("db-2", "dg-7", "oracle-host02"),
                standalone("db-3", "other"),
            ]),
        );
        let reference = DatabaseReference::new("ORCL").with_host(Some("oracle-host".to_string()));
        let resolved = resolve(&mock, reference).await.unwrap();
        assert_eq!(resolved.object_id, "dg-7");
    }

    #[tokio::test]
    async fn no_direct_match_falls_back_to_unique_name() {
        let mock = MockGraphQl::new()
            .on("OracleDatabaseCandidates", candidates(vec![]))
            .on(
                "OracleDGGroups",
                descendants(vec![
                    group("dg-123", &["ORCL_A", "ORCL_B"]),
                    group("dg-456", &["OTHER"]),
                ]),
            );
        let resolved = resolve(&mock, DatabaseReference::new("ORCL_B")).await.unwrap();
        assert_eq!(resolved.object_id, "dg-123");
        assert!(resolved.is_data_guard_member);

        let vars = mock.variables_of("OracleDGGroups");
        assert_eq!(vars[0]["typeFilter"], json!("ORACLE_DATA_GUARD_GROUP"));
    }

    #[tokio::test]
    async fn unique_name_in_two_groups_is_ambiguous() {
        let mock = MockGraphQl::new()
            .on("OracleDatabaseCandidates", candidates(vec![]))
            .on(
                "OracleDGGroups",
                descendants(vec![group("dg-1", &["ORCL"]), group("dg-2", &["ORCL"])]),
            );
        let err = resolve(&mock, DatabaseReference::new("ORCL")).await.unwrap_err();
        assert!(matches!(err, RscError::Ambiguous(_)), "{err}");
    }

    #[tokio::test]
    async fn unique_name_on_two_members_of_one_group_resolves() {
        let mock = MockGraphQl::new()
            .on("OracleDatabaseCandidates", candidates(vec![]))
            .on("OracleDGGroups", descendants(vec![group("dg-1", &["ORCL", "ORCL"])]));
        let resolved = resolve(&mock, DatabaseReference::new("ORCL")).await.unwrap();
        assert_eq!(resolved.object_id, "dg-1");
    }

    #[tokio::test]
    async fn nothing_anywhere_is_not_found() {
        let mock = MockGraphQl::new()
            .on("OracleDatabaseCandidates", candidates(vec![]))
            .on("OracleDGGroups", descendants(vec![group("dg-1", &["OTHER"])]));
        let err = resolve(&mock, DatabaseReference::new("ORCL")).await.unwrap_err();
        assert!(matches!(err, RscError::NotFound(_)), "{err}");
        assert!(err.is_resolution_error());
    }

    #[tokio::test]
    async fn cluster_name_switches_filter_to_cluster_id() {
        let mock = MockGraphQl::new()
            .on(
                "ClusterConnection",
                json!({"clusterConnection": {"nodes": [{"id": "c-1", "name": "cdm01"}]}}),
            )
            .on(
                "OracleDatabaseCandidates",
                candidates(vec![standalone("db-1", "host01")]),
            );
        let reference = DatabaseReference::new("ORCL").with_cluster(Some("cdm01".to_string()));
        resolve(&mock, reference).await.unwrap();

        let vars = &mock.variables_of("OracleDatabaseCandidates")[0];
        let fields: Vec<&str> = vars["filter"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, ["IS_RELIC", "CLUSTER_ID", "NAME"]);
        assert_eq!(vars["filter"][1]["texts"], json!(["c-1"]));
    }

    #[tokio::test]
    async fn unknown_cluster_stops_before_database_search() {
        let mock = MockGraphQl::new()
            .on("ClusterConnection", json!({"clusterConnection": {"nodes": []}}))
            .on("OracleDatabaseCandidates", candidates(vec![]));
        let reference = DatabaseReference::new("ORCL").with_cluster(Some("nope".to_string()));
        let err = resolve(&mock, reference).await.unwrap_err();
        assert!(matches!(err, RscError::NotFound(_)));
        assert_eq!(mock.call_count("OracleDatabaseCandidates"), 0);
    }

    #[tokio::test]
    async fn duplicate_cluster_names_are_ambiguous() {
        let mock = MockGraphQl::new().on(
            "ClusterConnection",
            json!({"clusterConnection": {"nodes": [
                {"id": "c-1", "name": "cdm"},
                {"id": "c-2", "name": "cdm"}
            ]}}),
        );
        let err = Resolver::new(&mock).resolve_cluster("cdm").await.unwrap_err();
        assert!(matches!(err, RscError::Ambiguous(_)));
    }

    fn host(id: &str, name: &str, cluster_id: &str) -> Value {
        json!({"id": id, "name": name, "cluster": {"id": cluster_id, "name": "cdm"}})
    }

    #[tokio::test]
    async fn single_host_resolves() {
        let mock = MockGraphQl::new().on("OracleHosts", descendants(vec![host("h-1", "host01", "c-1")]));
        let target = Resolver::new(&mock)
            .resolve_target("host01", "c-1", TargetKind::Host)
            .await
            .unwrap();
        assert_eq!(target.id, "h-1");
        assert!(!target.is_rac());
        assert_eq!(
            mock.variables_of("OracleHosts")[0]["typeFilter"],
            json!("OracleHost")
        );
    }

    #[tokio::test]
    async fn several_hosts_narrow_by_cluster_then_exact_name() {
        let mock = MockGraphQl::new().on(
            "OracleHosts",
            descendants(vec![
                host("h-1", "host01", "c-2"),
                host("h-2", "HOST01", "c-1"),
                host("h-3", "host01.example.com", "c-1"),
            ]),
        );
        let target = Resolver::new(&mock)
            .resolve_target("host01", "c-1", TargetKind::Host)
            .await
            .unwrap();
        assert_eq!(target.id, "h-2");
    }

    #[tokio::test]
    async fn no_host_is_not_found() {
        let mock = MockGraphQl::new().on("OracleHosts", descendants(vec![]));
        let err = Resolver::new(&mock)
            .resolve_target("host01", "c-1", TargetKind::Host)
            .await
            .unwrap_err();
        assert!(matches!(err, RscError::NotFound(_)));
    }

    #[tokio::test]
    async fn indistinguishable_hosts_are_ambiguous() {
        let mock = MockGraphQl::new().on(
            "OracleHosts",
            descendants(vec![host("h-1", "host01", "c-1"), host("h-2", "host01", "c-1")]),
        );
        let err = Resolver::new(&mock)
            .resolve_target("host01", "c-1", TargetKind::Host)
            .await
            .unwrap_err();
        assert!(matches!(err, RscError::Ambiguous(_)));
    }

    fn rac(id: &str, name: &str, nodes: &[&str]) -> Value {
        let nodes: Vec<Value> = nodes
            .iter()
            .map(|n| json!({"hostFid": null, "nodeName": n, "status": "OK"}))
            .collect();
        json!({"id": id, "name": name, "nodes": nodes, "cluster": {"id": "c-1", "name": "cdm"}})
    }

    #[tokio::test]
    async fn rac_by_name() {
        let mock = MockGraphQl::new().on("OracleRacs", descendants(vec![rac("r-1", "rac01", &["n1"])]));
        let target = Resolver::new(&mock)
            .resolve_target("rac01", "c-1", TargetKind::Rac)
            .await
            .unwrap();
        assert_eq!(target.id, "r-1");
        assert_eq!(target.rac_name.as_deref(), Some("rac01"));
        assert!(target.is_rac());
        assert_eq!(mock.call_count("OracleRacs"), 1);
    }

    #[tokio::test]
    async fn rac_by_node_name_uses_matched_rac() {
        let mock = MockGraphQl::new()
            .on("OracleRacs", descendants(vec![]))
            .on(
                "OracleRacs",
                descendants(vec![
                    rac("r-1", "rac01", &["db01a.example.com", "db01b.example.com"]),
                    rac("r-2", "rac02", &["DB02A.example.com", "db02b.example.com"]),
                ]),
            );
        let target = Resolver::new(&mock)
            .resolve_target("db02a", "c-1", TargetKind::Rac)
            .await
            .unwrap();
        assert_eq!(target.id, "r-2");
        assert_eq!(target.rac_name.as_deref(), Some("rac02"));
        assert_eq!(target.name, "db02a");

        let fallback = &mock.variables_of("OracleRacs")[1];
        assert_eq!(fallback["filter"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn rac_node_substring_on_two_racs_is_ambiguous() {
        let mock = MockGraphQl::new()
            .on("OracleRacs", descendants(vec![]))
            .on(
                "OracleRacs",
                descendants(vec![rac("r-1", "rac01", &["db01a"]), rac("r-2", "rac02", &["db01b"])]),
            );
        let err = Resolver::new(&mock)
            .resolve_target("db01", "c-1", TargetKind::Rac)
            .await
            .unwrap_err();
        assert!(matches!(err, RscError::Ambiguous(_)));
    }

    #[tokio::test]
    async fn rac_with_two_matching_nodes_counts_once() {
        let mock = MockGraphQl::new()
            .on("OracleRacs", descendants(vec![]))
            .on("OracleRacs", descendants(vec![rac("r-1", "rac01", &["db01a", "db01b"])]));
        let target = Resolver::new(&mock)
            .resolve_target("db01", "c-1", TargetKind::Rac)
            .await
            .unwrap();
        assert_eq!(target.id, "r-1");
    }

    #[tokio::test]
    async fn no_racs_on_cluster_is_not_found() {
        let mock = MockGraphQl::new().on("OracleRacs", descendants(vec![]));
        let err = Resolver::new(&mock)
            .resolve_target("db01", "c-1", TargetKind::Rac)
            .await
            .unwrap_err();
        assert!(matches!(err, RscError::NotFound(_)));
    }
}
