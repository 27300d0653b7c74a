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

use std::time::Duration;

use serde_json::json;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::graphql::{GraphQl, query};
use crate::model::{AsyncRequest, AsyncRequestDetailsData, AsyncRequestStatus};
use crate::queries;
use crate::{RscError, RscResult};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);
const FAR_DEADLINE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Poller waits on an asynchronous RSC request until it reaches a terminal
/// state or a deadline passes. A timeout leaves the remote job running.
pub struct Poller<'a, G: GraphQl + ?Sized> {
    client: &'a G,
    interval: Duration,
}

impl<'a, G: GraphQl + ?Sized> Poller<'a, G> {
    pub fn new(client: &'a G) -> Self {
        Poller {
            client,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub async fn status(&self, request_id: &str, cluster_id: &str) -> RscResult<AsyncRequest> {
        let data: AsyncRequestDetailsData = query(
            self.client,
            queries::ASYNC_REQUEST_DETAILS,
            json!({ "input": { "id": request_id, "clusterUuid": cluster_id } }),
        )
        .await?;
        Ok(data.oracle_database_async_request_details)
    }

    /// Polls immediately, then every poll interval, until the request is
    /// terminal. The deadline is measured from the first poll; once it has
    /// passed a non-terminal request yields [`RscError::Timeout`].
    pub async fn wait(
        &self,
        request_id: &str,
        cluster_id: &str,
        timeout_minutes: u64,
    ) -> RscResult<AsyncRequest> {
        let deadline = deadline_after(timeout_minutes);
        loop {
            let request = self.status(request_id, cluster_id).await?;
            if request.status.is_terminal() {
                debug!("Async request {request_id} finished with {}", request.status);
                return Ok(request);
            }
            if Instant::now() >= deadline {
                return Err(RscError::Timeout {
                    request_id: request_id.to_string(),
                    status: request.status,
                    minutes: timeout_minutes,
                });
            }
            info!("Request status: {}", request.status);
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Like [`Poller::wait`] but a terminal state other than `SUCCEEDED` is
    /// an error.
    pub async fn wait_for_success(
        &self,
        request_id: &str,
        cluster_id: &str,
        timeout_minutes: u64,
    ) -> RscResult<AsyncRequest> {
        let request = self.wait(request_id, cluster_id, timeout_minutes).await?;
        if request.status != AsyncRequestStatus::Succeeded {
            return Err(RscError::OperationFailed {
                request_id: request.id.clone(),
                message: request
                    .error_message()
                    .unwrap_or("no error message returned")
                    .to_string(),
                status: request.status,
            });
        }
        Ok(request)
    }
}

/// A timeout too large to represent waits for a century instead.
fn deadline_after(timeout_minutes: u64) -> Instant {
    let now = Instant::now();
    now.checked_add(Duration::from_secs(timeout_minutes.saturating_mul(60)))
        .or_else(|| now.checked_add(FAR_DEADLINE))
        .unwrap_or(now)
}
