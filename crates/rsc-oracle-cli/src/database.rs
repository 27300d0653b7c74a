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

use clap::Args;
use rsc_oracle::oracle::{Oracle, latest_recovery_point};
use rsc_oracle::time::epoch_millis;
use rsc_oracle::{
    DatabaseReference, GraphQl, ResolvedObject, ResolvedTarget, Resolver, RscError, RscResult,
    TargetKind,
};
use tracing::debug;

// DatabaseArgs names a single database the way every
// database-scoped subcommand accepts it.
#[derive(Args, Clone, Debug)]
pub struct DatabaseArgs {
    #[clap(short = 'd', long = "database", help = "Database name or Data Guard group name")]
    pub database_name: String,

    #[clap(long, help = "Host or RAC the database runs on, when the name is not unique")]
    pub host: Option<String>,

    #[clap(short = 'c', long = "cluster", help = "CDM cluster that protects the database")]
    pub cluster_name: Option<String>,
}

impl DatabaseArgs {
    pub fn reference(&self) -> DatabaseReference {
        DatabaseReference::new(self.database_name.clone())
            .with_host(self.host.clone())
            .with_cluster(self.cluster_name.clone())
    }
}

// LocatedDatabase is a resolved database together with the time zone
// of the cluster protecting it.
#[derive(Clone, Debug)]
pub struct LocatedDatabase {
    pub object: ResolvedObject,
    pub timezone: String,
}

// locate resolves `args` to exactly one object and fills in the
// cluster time zone when the resolution did not carry one.
pub async fn locate<G: GraphQl + ?Sized>(
    client: &G,
    args: &DatabaseArgs,
) -> RscResult<LocatedDatabase> {
    let object = Resolver::new(client).resolve_database(&args.reference()).await?;
    let timezone = match &object.timezone {
        Some(tz) => tz.clone(),
        None => {
            debug!("No time zone on {}, asking the cluster", object.object_id);
            Oracle::new(client)
                .cluster_timezone(&object.cluster_id)
                .await?
        }
    };
    Ok(LocatedDatabase { object, timezone })
}

// recovery_point converts `restore_time` to epoch milliseconds in the
// cluster zone. Without one it picks the end of the latest recovery range.
pub async fn recovery_point<G: GraphQl + ?Sized>(
    client: &G,
    located: &LocatedDatabase,
    restore_time: Option<&str>,
) -> RscResult<i64> {
    if let Some(time) = restore_time {
        return epoch_millis(time, &located.timezone);
    }
    let ranges = Oracle::new(client)
        .recovery_ranges(&located.object.object_id)
        .await?;
    let latest = latest_recovery_point(&ranges).ok_or_else(|| {
        RscError::NotFound(format!(
            "No recovery ranges found for {}",
            located.object.object_id
        ))
    })?;
    debug!("Using latest recovery point {}", latest.end_time);
    epoch_millis(&latest.end_time, &located.timezone)
}

// mount_target resolves the host, or the RAC when `rac` is set, on the
// cluster protecting the source database.
pub async fn mount_target<G: GraphQl + ?Sized>(
    client: &G,
    located: &LocatedDatabase,
    name: &str,
    rac: bool,
) -> RscResult<ResolvedTarget> {
    let kind = if rac { TargetKind::Rac } else { TargetKind::Host };
    Resolver::new(client)
        .resolve_target(name, &located.object.cluster_id, kind)
        .await
}
