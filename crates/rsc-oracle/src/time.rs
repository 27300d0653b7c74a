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

//! Conversions between RSC timestamps and a cluster's local time.
//!
//! A timestamp ending in `Z` is UTC. Any other timestamp without an offset
//! is local time in the cluster's zone.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use chrono_tz::Tz;

use crate::{RscError, RscResult};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

pub fn parse_timezone(timezone: &str) -> RscResult<Tz> {
    timezone
        .parse::<Tz>()
        .map_err(|e| RscError::InvalidInput(format!("Unknown time zone {timezone}: {e}")))
}

fn parse_naive(value: &str) -> RscResult<NaiveDateTime> {
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .ok_or_else(|| {
            RscError::InvalidInput(format!(
                "Time {value} is not in ISO 8601 format, for example 2019-01-01T20:30:15"
            ))
        })
}

/// Parses `iso` into an instant, reading offset-less local times in `tz`.
pub fn parse_instant(iso: &str, tz: Tz) -> RscResult<DateTime<Utc>> {
    let iso = iso.trim();
    if let Some(utc) = iso.strip_suffix('Z') {
        return Ok(Utc.from_utc_datetime(&parse_naive(utc)?));
    }
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(iso) {
        return Ok(with_offset.with_timezone(&Utc));
    }
    let naive = parse_naive(iso)?;
    // An ambiguous wall time during a DST fall-back reads as standard time.
    tz.from_local_datetime(&naive)
        .latest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| RscError::InvalidInput(format!("Time {iso} does not exist in {tz}")))
}

/// Renders `iso` as an ISO 8601 string in the cluster's zone.
pub fn cluster_time(iso: &str, timezone: &str) -> RscResult<String> {
    let tz = parse_timezone(timezone)?;
    Ok(parse_instant(iso, tz)?
        .with_timezone(&tz)
        .to_rfc3339_opts(SecondsFormat::AutoSi, false))
}

/// Renders `iso` as `YYYY-MM-DD HH:MM:SS ZONE` in the cluster's zone.
pub fn cluster_time_display(iso: &str, timezone: &str) -> RscResult<String> {
    let tz = parse_timezone(timezone)?;
    Ok(parse_instant(iso, tz)?
        .with_timezone(&tz)
        .format(DISPLAY_FORMAT)
        .to_string())
}

/// Epoch milliseconds of `iso`, truncated to whole seconds.
pub fn epoch_millis(iso: &str, timezone: &str) -> RscResult<i64> {
    let tz = parse_timezone(timezone)?;
    Ok(parse_instant(iso, tz)?.timestamp() * 1000)
}
