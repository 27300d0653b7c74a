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

use prettytable::{Cell, Row, Table};
use rsc_oracle::model::{LiveMountNode, NamedRef};
use rsc_oracle::oracle::Oracle;
use rsc_oracle::RscSession;

use super::Opts;
use crate::cfg::output::{OutputFormat, print_structured};

pub async fn mounts(
    session: &RscSession,
    format: OutputFormat,
    opts: &Opts,
) -> color_eyre::Result<()> {
    let mounts = Oracle::new(session).live_mounts(&opts.filter()).await?;

    if !print_structured(format, &mounts)? {
        mounts_to_table(&mounts).printstd();
    }

    Ok(())
}

fn name_of(named: Option<&NamedRef>) -> &str {
    named.and_then(|n| n.name.as_deref()).unwrap_or("")
}

// mounts_to_table converts the live mounts into
// a pretty ASCII table.
pub fn mounts_to_table(mounts: &[LiveMountNode]) -> Table {
    let mut table = Table::new();

    table.add_row(Row::new(vec![
        Cell::new("Cluster"),
        Cell::new("Source DB"),
        Cell::new("Mounted Host"),
        Cell::new("Files Only"),
        Cell::new("Status"),
        Cell::new("Created"),
        Cell::new("Id"),
    ]));

    for mount in mounts {
        table.add_row(Row::new(vec![
            Cell::new(name_of(mount.cluster.as_ref())),
            Cell::new(name_of(mount.source_database.as_ref())),
            Cell::new(mount.mounted_on().unwrap_or("")),
            Cell::new(&mount.is_files_only_mount.to_string()),
            Cell::new(mount.status.as_deref().unwrap_or("")),
            Cell::new(mount.creation_date.as_deref().unwrap_or("")),
            Cell::new(&mount.id),
        ]));
    }

    table
}
