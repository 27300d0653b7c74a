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

use clap::Parser;
use rsc_oracle::{Credentials, RscSession, SessionOptions};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cfg::cli_options::{CliCommand, CliOptions};
use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::{RuntimeConfig, RuntimeContext};

mod async_request;
mod backup_mount;
mod cfg;
mod database;
mod db_mount;
mod info;
mod list;
mod mounts;
mod report;
mod unmount;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = CliOptions::parse();

    let console_env_filter = EnvFilter::builder()
        .parse(config.log_filter())
        .map(|filter| {
            tracing::debug!("Setting log level to {}", filter);
            filter
        })?;
    let console_layer = tracing_subscriber::fmt::layer()
        .with_ansi(true)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_filter(console_env_filter);
    tracing_subscriber::registry()
        .with(console_layer)
        .try_init()?;

    let credentials = Credentials::load(config.keyfile.as_deref())?;
    let session = RscSession::open(
        &credentials,
        &SessionOptions {
            insecure: config.insecure,
            ..Default::default()
        },
    )
    .await?;

    let ctx = RuntimeContext {
        session: &session,
        config: RuntimeConfig {
            format: config.format,
            poll_interval: rsc_oracle::poller::DEFAULT_POLL_INTERVAL,
        },
    };

    let result = match config.command {
        CliCommand::List(opts) => opts.dispatch(ctx).await,
        CliCommand::Info(opts) => opts.dispatch(ctx).await,
        CliCommand::BackupMount(opts) => opts.dispatch(ctx).await,
        CliCommand::DbMount(opts) => opts.dispatch(ctx).await,
        CliCommand::Mounts(opts) => opts.dispatch(ctx).await,
        CliCommand::Unmount(opts) => opts.dispatch(ctx).await,
        CliCommand::Report(opts) => opts.dispatch(ctx).await,
    };

    // The session is released on every path once the command is done.
    session.close().await;
    result
}
