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

use clap::Args;
use prettytable::{Cell, Row, Table};
use rsc_oracle::AsyncRequest;
use tracing::info;

use crate::cfg::output::{OutputFormat, print_structured};
use crate::cfg::runtime::RuntimeContext;

pub const DEFAULT_TIMEOUT_MINUTES: u64 = 12;

// WaitArgs controls how a subcommand follows an asynchronous request
// it has just started.
#[derive(Args, Clone, Debug)]
pub struct WaitArgs {
    #[clap(
        long,
        default_value_t = DEFAULT_TIMEOUT_MINUTES,
        help = "Minutes to wait for the request before giving up. The request keeps running."
    )]
    pub timeout: u64,

    #[clap(long, help = "Return as soon as the request is accepted")]
    pub no_wait: bool,
}

// settle waits for `request` to succeed on `cluster_id` unless the
// caller asked not to wait, and returns its latest state.
pub async fn settle(
    ctx: &RuntimeContext<'_>,
    request: AsyncRequest,
    cluster_id: &str,
    wait: &WaitArgs,
) -> color_eyre::Result<AsyncRequest> {
    if wait.no_wait {
        return Ok(request);
    }
    info!(
        "Waiting up to {} minutes for request {}",
        wait.timeout, request.id
    );
    Ok(ctx
        .poller()
        .wait_for_success(&request.id, cluster_id, wait.timeout)
        .await?)
}

// follow settles a single request and prints it.
pub async fn follow(
    ctx: &RuntimeContext<'_>,
    request: AsyncRequest,
    cluster_id: &str,
    wait: &WaitArgs,
) -> color_eyre::Result<()> {
    let request = settle(ctx, request, cluster_id, wait).await?;
    print_requests(ctx.config.format, std::slice::from_ref(&request))
}

pub fn print_requests(format: OutputFormat, requests: &[AsyncRequest]) -> color_eyre::Result<()> {
    if !print_structured(format, &requests)? {
        requests_to_table(requests).printstd();
    }
    Ok(())
}

// requests_to_table converts async requests into a pretty ASCII table.
fn requests_to_table(requests: &[AsyncRequest]) -> Table {
    let mut table = Table::new();

    table.add_row(Row::new(vec![
        Cell::new("Request Id"),
        Cell::new("Status"),
        Cell::new("Start Time"),
        Cell::new("End Time"),
        Cell::new("Progress"),
    ]));

    for request in requests {
        table.add_row(Row::new(vec![
            Cell::new(&request.id),
            Cell::new(request.status.as_str()),
            Cell::new(request.start_time.as_deref().unwrap_or("")),
            Cell::new(request.end_time.as_deref().unwrap_or("")),
            Cell::new(
                &request
                    .progress
                    .map(|p| format!("{p:.0}%"))
                    .unwrap_or_default(),
            ),
        ]));
    }

    table
}
