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

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{ApiError, RscResult};

// trait to run GraphQL documents against RSC
#[async_trait]
pub trait GraphQl: Send + Sync {
    /// Runs `query` with `variables` and returns the `data` member of the
    /// response.
    async fn execute(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> RscResult<serde_json::Value>;

    /// Where responses come from, for error messages.
    fn endpoint(&self) -> &str;
}

/// Runs a query and decodes its `data` member into `T`. The decode happens
/// here so response shapes are validated where they are received.
pub async fn query<T, G>(client: &G, query: &str, variables: serde_json::Value) -> RscResult<T>
where
    T: DeserializeOwned,
    G: GraphQl + ?Sized,
{
    let data = client.execute(query, variables).await?;
    serde_json::from_value(data.clone()).map_err(|e| {
        ApiError::JsonDeserialize {
            url: client.endpoint().to_string(),
            body: truncate(&data.to_string(), 1500).to_string(),
            source: e,
        }
        .into()
    })
}

#[derive(Debug, Serialize)]
pub(crate) struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: String,
}

pub(crate) fn truncate(s: &str, len: usize) -> &str {
    match s.char_indices().nth(len) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("abc", 10), "abc");
    }
}
