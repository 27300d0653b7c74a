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

use std::path::Path;

use serde_json::{Value, json};
use tracing::debug;

use crate::{RscError, RscResult};

pub const ORACLE_HOME: &str = "ORACLE_HOME";
const SPFILE_LOCATION: &str = "SPFILE_LOCATION";
const ONLINE_LOG_DEST_PREFIX: &str = "DB_CREATE_ONLINE_LOG_DEST_";

/// Advanced cloning options: parameters handed to the database clone.
/// Entries keep file order; a repeated key, in any case, keeps its last
/// value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AcoConfig {
    entries: Vec<(String, String)>,
}

impl AcoConfig {
    /// Parses `KEY=VALUE` lines. Blank lines and `#` comments are skipped,
    /// quotes are dropped and each line is split on its first `=`.
    pub fn parse(text: &str) -> RscResult<AcoConfig> {
        let mut config = AcoConfig::default();
        for (number, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line = line.replace(['\'', '"'], "");
            debug!("aco_file line: {line}");
            let Some((key, value)) = line.split_once('=') else {
                return Err(RscError::InvalidInput(format!(
                    "ACO file line {} is not KEY=VALUE: {line}",
                    number + 1
                )));
            };
            config.insert(key.trim(), value.trim());
        }
        Ok(config)
    }

    pub fn from_path(path: &Path) -> RscResult<AcoConfig> {
        let text = std::fs::read_to_string(path).map_err(|e| RscError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        AcoConfig::parse(&text)
    }

    /// Keys compare case-insensitively; a replaced entry keeps the
    /// spelling and position it had.
    pub fn insert(&mut self, key: &str, value: &str) {
        match self
            .entries
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
        {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    /// Case-insensitive lookup.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keys a custom PFILE leaves room for.
    fn allowed_with_pfile(key: &str) -> bool {
        let key = key.to_ascii_uppercase();
        if key == ORACLE_HOME || key == SPFILE_LOCATION {
            return true;
        }
        key.strip_prefix(ONLINE_LOG_DEST_PREFIX)
            .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
    }

    pub fn validate_with_pfile(&self) -> RscResult<()> {
        match self.iter().find(|(k, _)| !AcoConfig::allowed_with_pfile(k)) {
            Some((key, _)) => Err(RscError::InvalidInput(format!(
                "When using a custom PFILE the only parameters allowed in the ACO file are ORACLE_HOME, SPFILE_LOCATION and DB_CREATE_ONLINE_LOG_DEST_*. Found: {key}"
            ))),
            None => Ok(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MountKind {
    /// Exposes the backup pieces on `mount_path` of the target.
    FilesOnly { mount_path: String },
    /// Brings up a database from the backup on the target.
    Clone {
        pfile: Option<String>,
        aco: AcoConfig,
    },
}

/// A validated live mount request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MountRequest {
    pub source_id: String,
    pub target_id: String,
    pub recovery_point_millis: i64,
    pub kind: MountKind,
}

impl MountRequest {
    pub fn files_only(
        source_id: &str,
        target_id: &str,
        recovery_point_millis: i64,
        mount_path: &str,
    ) -> RscResult<MountRequest> {
        if mount_path.trim().is_empty() {
            return Err(RscError::InvalidInput(
                "A mount path is required for a files only mount".to_string(),
            ));
        }
        Ok(MountRequest {
            source_id: source_id.to_string(),
            target_id: target_id.to_string(),
            recovery_point_millis,
            kind: MountKind::FilesOnly {
                mount_path: mount_path.to_string(),
            },
        })
    }

    /// Builds a full clone request. `oracle_home` overrides any ORACLE_HOME
    /// in `aco`. A Data Guard group source needs ORACLE_HOME from one of
    /// the two.
    pub fn clone_database(
        source_id: &str,
        target_id: &str,
        recovery_point_millis: i64,
        pfile: Option<&str>,
        aco: Option<AcoConfig>,
        oracle_home: Option<&str>,
        is_data_guard_group: bool,
    ) -> RscResult<MountRequest> {
        let mut aco = aco.unwrap_or_default();
        if pfile.is_some() && !aco.is_empty() {
            debug!("Using ACO file with PFILE");
            aco.validate_with_pfile()?;
        }
        if is_data_guard_group && oracle_home.is_none() && aco.get(ORACLE_HOME).is_none() {
            return Err(RscError::InvalidInput(
                "When cloning a DG Group database, the ORACLE_HOME must be provided".to_string(),
            ));
        }
        if let Some(home) = oracle_home {
            aco.insert(ORACLE_HOME, home);
        }
        Ok(MountRequest {
            source_id: source_id.to_string(),
            target_id: target_id.to_string(),
            recovery_point_millis,
            kind: MountKind::Clone {
                pfile: pfile.map(str::to_string),
                aco,
            },
        })
    }

    pub fn is_files_only(&self) -> bool {
        matches!(self.kind, MountKind::FilesOnly { .. })
    }

    /// Variables for the mount mutation.
    pub fn to_variables(&self) -> Value {
        let mut config = json!({
            "targetOracleHostOrRacId": self.target_id,
            "shouldMountFilesOnly": self.is_files_only(),
            "recoveryPoint": { "timestampMs": self.recovery_point_millis },
            "shouldAllowRenameToSource": true,
            "shouldSkipDropDbInUndo": false,
        });
        match &self.kind {
            MountKind::FilesOnly { mount_path } => {
                config["targetMountPath"] = json!(mount_path);
            }
            MountKind::Clone { pfile, aco } => {
                if let Some(pfile) = pfile {
                    config["customPfilePath"] = json!(pfile);
                }
                if !aco.is_empty() {
                    let entries: Vec<Value> = aco
                        .iter()
                        .map(|(key, value)| json!({ "key": key, "value": value }))
                        .collect();
                    config["advancedRecoveryConfigMap"] = Value::Array(entries);
                }
            }
        }
        json!({ "input": { "request": { "id": self.source_id, "config": config } } })
    }
}
