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

use rsc_oracle::mount::MountRequest;
use rsc_oracle::oracle::Oracle;
use rsc_oracle::RscError;
use tracing::info;

use super::Opts;
use crate::async_request::follow;
use crate::cfg::runtime::RuntimeContext;
use crate::database::{locate, mount_target, recovery_point};

pub async fn backup_mount(ctx: &RuntimeContext<'_>, opts: &Opts) -> color_eyre::Result<()> {
    let target_name = opts.target_name().ok_or_else(|| {
        RscError::InvalidInput(
            "A target host is required, pass -t or --host".to_string(),
        )
    })?;

    let located = locate(ctx.session, &opts.database).await?;
    let target = mount_target(ctx.session, &located, target_name, opts.rac).await?;
    let millis = recovery_point(ctx.session, &located, opts.restore_time.as_deref()).await?;

    let request = MountRequest::files_only(
        &located.object.object_id,
        &target.id,
        millis,
        &opts.mount_path,
    )?;
    info!(
        "Mounting backup files of {} on {} at {}",
        opts.database.database_name, target.name, opts.mount_path
    );
    let accepted = Oracle::new(ctx.session).live_mount(&request).await?;
    follow(ctx, accepted, &located.object.cluster_id, &opts.wait).await?;

    Ok(())
}
