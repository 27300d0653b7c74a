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

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cfg::output::OutputFormat;
use crate::{backup_mount, db_mount, info, list, mounts, report, unmount};

#[derive(Parser, Debug)]
#[clap(name = "rsc-oracle", author, version)]
#[clap(about = "Inspect, live mount and report on Oracle databases protected by Rubrik Security Cloud")]
pub struct CliOptions {
    #[clap(
        short = 'k',
        long,
        env = "RSC_KEYFILE",
        global = true,
        help = "Path to the service account key file. Defaults to config/keyfile.json, then the rsc_* environment variables."
    )]
    pub keyfile: Option<PathBuf>,

    #[clap(long, global = true, help = "Skip TLS certificate verification")]
    pub insecure: bool,

    #[clap(long, global = true, help = "Log at debug level")]
    pub debug: bool,

    #[clap(long, value_enum, default_value_t, global = true)]
    pub format: OutputFormat,

    #[clap(
        long,
        global = true,
        help = "Log filter directive, for example rsc_oracle=trace. Overrides --debug."
    )]
    pub log_level: Option<String>,

    #[clap(subcommand)]
    pub command: CliCommand,
}

impl CliOptions {
    pub fn log_filter(&self) -> String {
        match (&self.log_level, self.debug) {
            (Some(level), _) => level.clone(),
            (None, true) => "debug".to_string(),
            (None, false) => "warn".to_string(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    #[clap(about = "List every protected Oracle database")]
    List(list::Opts),

    #[clap(about = "Show details, snapshots and recovery ranges of a database")]
    Info(info::Opts),

    #[clap(about = "Live mount the backup files of a database on a host")]
    BackupMount(backup_mount::Opts),

    #[clap(about = "Live mount a database clone on a host or RAC")]
    DbMount(db_mount::Opts),

    #[clap(about = "List live mounts")]
    Mounts(mounts::Opts),

    #[clap(about = "Remove live mounts")]
    Unmount(unmount::Opts),

    #[clap(about = "Backup report over every database")]
    Report(report::Opts),
}
