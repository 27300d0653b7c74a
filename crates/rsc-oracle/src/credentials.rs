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

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::{RscError, RscResult};

pub const ENV_CLIENT_ID: &str = "rsc_client_id";
pub const ENV_CLIENT_SECRET: &str = "rsc_client_secret";
pub const ENV_ACCESS_TOKEN_URI: &str = "rsc_access_token_uri";

/// Location tried when no key file is given on the command line.
pub const DEFAULT_KEYFILE: &str = "config/keyfile.json";

/// KeyFile is the JSON document downloaded when a service account is
/// created in RSC. Every field is optional here; blanks are treated as
/// absent and filled from the environment.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct KeyFile {
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_secret: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub access_token_uri: Option<String>,
}

impl KeyFile {
    pub fn from_path(path: &Path) -> RscResult<KeyFile> {
        let text = std::fs::read_to_string(path).map_err(|e| RscError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&text).map_err(|e| {
            RscError::Auth(format!("Key file {} is not valid JSON: {e}", path.display()))
        })
    }
}

/// Credentials for the client-credential exchange. Construction guarantees
/// that client id, client secret and access token URI are non-empty.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub name: Option<String>,
    pub access_token_uri: String,
}

// Keep the secret out of debug logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("name", &self.name)
            .field("access_token_uri", &self.access_token_uri)
            .finish()
    }
}

impl Credentials {
    /// Loads credentials from `keyfile` (or [`DEFAULT_KEYFILE`] when none is
    /// given), falling back to the process environment for any field that
    /// is missing or blank.
    pub fn load(keyfile: Option<&Path>) -> RscResult<Credentials> {
        let path: PathBuf = keyfile
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_KEYFILE));

        let file = if path.exists() {
            debug!("Loading key file {}", path.display());
            Some(KeyFile::from_path(&path)?)
        } else if keyfile.is_some() {
            return Err(RscError::Io {
                path,
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "key file not found"),
            });
        } else {
            debug!(
                "No key file found at {}, trying environment variables",
                path.display()
            );
            None
        };

        Credentials::resolve(file, |key| std::env::var(key).ok())
    }

    /// Merges a key file with an environment lookup. Split out from
    /// [`Credentials::load`] so the precedence rules can be exercised
    /// without touching the process environment.
    pub fn resolve<F>(file: Option<KeyFile>, env: F) -> RscResult<Credentials>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = file.unwrap_or_default();

        let pick = |from_file: Option<String>, env_key: &str| {
            non_blank(from_file).or_else(|| {
                let value = non_blank(env(env_key));
                if value.is_none() {
                    debug!("No {env_key} found in environment variables.");
                }
                value
            })
        };

        let client_id = pick(file.client_id, ENV_CLIENT_ID);
        let client_secret = pick(file.client_secret, ENV_CLIENT_SECRET);
        let access_token_uri = pick(file.access_token_uri, ENV_ACCESS_TOKEN_URI);

        match (client_id, client_secret, access_token_uri) {
            (Some(client_id), Some(client_secret), Some(access_token_uri)) => Ok(Credentials {
                client_id,
                client_secret,
                name: non_blank(file.name),
                access_token_uri,
            }),
            _ => Err(RscError::Auth(
                "No keyfile credentials found in keyfile or environment variables".to_string(),
            )),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
