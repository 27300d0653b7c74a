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

use clap::{ArgGroup, Parser};
use rsc_oracle::oracle::LiveMountFilter;

use crate::async_request::WaitArgs;

#[derive(Parser, Debug)]
#[clap(group(ArgGroup::new("selector").required(true).args(&["id", "database_name"])))]
pub struct Opts {
    #[clap(long, help = "Id of the live mount to remove")]
    pub id: Option<String>,

    #[clap(
        short = 'd',
        long = "database",
        requires("mounted_host"),
        help = "Remove the mounts of this source database"
    )]
    pub database_name: Option<String>,

    #[clap(
        short = 'm',
        long = "mounted-host",
        requires("database_name"),
        help = "Host or RAC the mounts to remove live on"
    )]
    pub mounted_host: Option<String>,

    #[clap(long, help = "Force the unmount")]
    pub force: bool,

    #[clap(flatten)]
    pub wait: WaitArgs,
}

// MountSelector is the resolved form of the --id / -d -m choice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MountSelector {
    Id(String),
    Matching(LiveMountFilter),
}

impl Opts {
    pub fn selector(&self) -> MountSelector {
        match &self.id {
            Some(id) => MountSelector::Id(id.clone()),
            None => MountSelector::Matching(LiveMountFilter {
                source_database: self.database_name.clone(),
                mounted_on: self.mounted_host.clone(),
            }),
        }
    }
}
