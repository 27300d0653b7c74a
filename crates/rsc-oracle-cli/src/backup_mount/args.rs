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

use crate::async_request::WaitArgs;
use crate::database::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct Opts {
    #[clap(flatten)]
    pub database: DatabaseArgs,

    #[clap(short = 'p', long = "path", help = "Path on the target where the backup files are mounted")]
    pub mount_path: String,

    #[clap(short = 't', long = "target", help = "Target host or RAC. Defaults to --host.")]
    pub target: Option<String>,

    #[clap(long, help = "The target is a RAC or one of its nodes")]
    pub rac: bool,

    #[clap(
        short = 'r',
        long = "restore-time",
        help = "Point in time to mount, ISO 8601 in the cluster time zone (2019-01-01T20:30:15) or UTC with a Z suffix. Defaults to the latest recovery point."
    )]
    pub restore_time: Option<String>,

    #[clap(flatten)]
    pub wait: WaitArgs,
}

impl Opts {
    // target_name falls back to the database host when no target is given.
    pub fn target_name(&self) -> Option<&str> {
        self.target.as_deref().or(self.database.host.as_deref())
    }
}
