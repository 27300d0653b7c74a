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

use rsc_oracle::model::LiveMountNode;
use rsc_oracle::oracle::{LiveMountFilter, Oracle};
use rsc_oracle::{RscError, RscResult};
use tracing::info;

use super::Opts;
use super::args::MountSelector;
use crate::async_request::{print_requests, settle};
use crate::cfg::runtime::RuntimeContext;

pub async fn unmount(ctx: &RuntimeContext<'_>, opts: &Opts) -> color_eyre::Result<()> {
    let oracle = Oracle::new(ctx.session);
    let all = oracle.live_mounts(&LiveMountFilter::default()).await?;
    let selected = select_mounts(all, &opts.selector())?;
    let total = selected.len();

    let mut finished = Vec::with_capacity(total);
    let mut failures = Vec::new();
    for (mount, cluster_id) in selected {
        info!(
            "Unmounting {} from {}",
            mount.id,
            mount.mounted_on().unwrap_or("unknown host")
        );
        let result = match oracle.unmount(&mount.id, opts.force).await {
            Ok(accepted) => settle(ctx, accepted, &cluster_id, &opts.wait).await,
            Err(e) => Err(e.into()),
        };
        match result {
            Ok(request) => finished.push(request),
            Err(e) => failures.push((mount.id, e)),
        }
    }

    // Requests already submitted are reported even when a later one fails.
    print_requests(ctx.config.format, &finished)?;
    failed_unmounts(&failures, total)
}

// failed_unmounts reports each failed mount on stderr and turns any
// failure into the command's error.
fn failed_unmounts(failures: &[(String, eyre::Report)], total: usize) -> color_eyre::Result<()> {
    for (id, error) in failures {
        eprintln!("Could not unmount {id}: {error}");
    }
    if failures.is_empty() {
        return Ok(());
    }
    Err(eyre::eyre!(
        "{} of {} unmounts failed",
        failures.len(),
        total
    ))
}

// select_mounts picks the mounts to remove and pairs each with the id
// of the cluster that owns it, which the request poll needs.
fn select_mounts(
    mounts: Vec<LiveMountNode>,
    selector: &MountSelector,
) -> RscResult<Vec<(LiveMountNode, String)>> {
    let selected: Vec<LiveMountNode> = match selector {
        MountSelector::Id(id) => mounts.into_iter().filter(|m| &m.id == id).collect(),
        MountSelector::Matching(filter) => {
            mounts.into_iter().filter(|m| filter.matches(m)).collect()
        }
    };
    if selected.is_empty() {
        return Err(RscError::NotFound(match selector {
            MountSelector::Id(id) => format!("No live mount with id {id}"),
            MountSelector::Matching(filter) => format!(
                "No live mounts of {} found on {}",
                filter.source_database.as_deref().unwrap_or("any database"),
                filter.mounted_on.as_deref().unwrap_or("any host")
            ),
        }));
    }
    selected
        .into_iter()
        .map(|mount| {
            let cluster_id = mount
                .cluster
                .as_ref()
                .and_then(|c| c.id.clone())
                .ok_or_else(|| {
                    RscError::NotFound(format!("Live mount {} has no cluster", mount.id))
                })?;
            Ok((mount, cluster_id))
        })
        .collect()
}
