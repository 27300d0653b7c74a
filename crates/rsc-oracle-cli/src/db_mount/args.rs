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

use clap::Parser;

use crate::async_request::WaitArgs;
use crate::database::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct Opts {
    #[clap(flatten)]
    pub database: DatabaseArgs,

    #[clap(short = 't', long = "target", help = "Target host or RAC for the clone")]
    pub target: String,

    #[clap(long, help = "The target is a RAC or one of its nodes")]
    pub rac: bool,

    #[clap(
        short = 'r',
        long = "restore-time",
        help = "Point in time to clone, ISO 8601 in the cluster time zone (2019-01-01T20:30:15) or UTC with a Z suffix. Defaults to the latest recovery point."
    )]
    pub restore_time: Option<String>,

    #[clap(long, help = "Custom PFILE path on the target")]
    pub pfile: Option<String>,

    #[clap(
        long = "aco-file",
        help = "File of KEY=VALUE advanced cloning options, one per line"
    )]
    pub aco_file: Option<PathBuf>,

    #[clap(long = "oracle-home", help = "ORACLE_HOME on the target. Overrides the ACO file.")]
    pub oracle_home: Option<String>,

    #[clap(flatten)]
    pub wait: WaitArgs,
}
