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
use rsc_oracle::oracle::LiveMountFilter;

#[derive(Parser, Debug)]
pub struct Opts {
    #[clap(short = 'd', long = "database", help = "Only mounts of this source database")]
    pub database_name: Option<String>,

    #[clap(short = 'm', long = "mounted-host", help = "Only mounts on hosts or RACs matching this text")]
    pub mounted_host: Option<String>,
}

impl Opts {
    pub fn filter(&self) -> LiveMountFilter {
        LiveMountFilter {
            source_database: self.database_name.clone(),
            mounted_on: self.mounted_host.clone(),
        }
    }
}
