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

use rsc_oracle::mount::{AcoConfig, MountRequest};
use rsc_oracle::oracle::Oracle;
use rsc_oracle::RscResult;
use tracing::info;

use super::Opts;
use crate::async_request::follow;
use crate::cfg::runtime::RuntimeContext;
use crate::database::{locate, mount_target, recovery_point};

pub async fn db_mount(ctx: &RuntimeContext<'_>, opts: &Opts) -> color_eyre::Result<()> {
    // Read the ACO file first so a bad file fails before any remote call.
    let aco = load_aco(opts)?;

    let located = locate(ctx.session, &opts.database).await?;
    let target = mount_target(ctx.session, &located, &opts.target, opts.rac).await?;
    let millis = recovery_point(ctx.session, &located, opts.restore_time.as_deref()).await?;

    let request = MountRequest::clone_database(
        &located.object.object_id,
        &target.id,
        millis,
        opts.pfile.as_deref(),
        aco,
        opts.oracle_home.as_deref(),
        located.object.is_data_guard_member,
    )?;
    info!(
        "Cloning {} onto {}",
        opts.database.database_name,
        target.rac_name.as_deref().unwrap_or(target.name.as_str())
    );
    let accepted = Oracle::new(ctx.session).live_mount(&request).await?;
    follow(ctx, accepted, &located.object.cluster_id, &opts.wait).await?;

    Ok(())
}

fn load_aco(opts: &Opts) -> RscResult<Option<AcoConfig>> {
    opts.aco_file
        .as_deref()
        .map(AcoConfig::from_path)
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;

    use super::*;

    #[test]
    fn aco_file_is_loaded_when_given() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ORACLE_HOME=/u01/app/oracle").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let opts =
            Opts::try_parse_from(["db-mount", "-d", "HRPROD", "-t", "db02", "--aco-file", &path])
                .unwrap();
        let aco = load_aco(&opts).unwrap().unwrap();
        assert_eq!(aco.get("ORACLE_HOME"), Some("/u01/app/oracle"));
    }

    #[test]
    fn missing_aco_file_is_an_error() {
        let opts = Opts::try_parse_from([
            "db-mount",
            "-d",
            "HRPROD",
            "-t",
            "db02",
            "--aco-file",
            "/nonexistent/aco.conf",
        ])
        .unwrap();
        assert!(load_aco(&opts).is_err());
    }
}
