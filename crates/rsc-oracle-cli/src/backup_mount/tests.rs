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

// The intent of the tests.rs file is to test the integrity of the
// command, including things like basic structure parsing, enum
// translations, and any external input validators that are
// configured. Specific "categories" are:
//
// Command Structure - Baseline debug_assert() of the entire command.
// Argument Parsing  - Ensure required/optional arg combinations parse correctly.

use clap::{CommandFactory, Parser};

use super::args::*;
use crate::async_request::DEFAULT_TIMEOUT_MINUTES;

// verify_cmd_structure runs the underlying clap debug_assert()
#[test]
fn verify_cmd_structure() {
    Opts::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing
//
// This section contains tests specific to argument parsing,
// including testing required arguments, as well as optional
// flag-specific checking.

// parse_minimal ensures backup-mount parses with -d and -p, using
// the default timeout and waiting for the request.
#[test]
fn parse_minimal() {
    let opts = Opts::try_parse_from(["backup-mount", "-d", "HRPROD", "-p", "/mnt/rubrik"])
        .expect("should parse backup-mount");

    assert_eq!(opts.mount_path, "/mnt/rubrik");
    assert_eq!(opts.wait.timeout, DEFAULT_TIMEOUT_MINUTES);
    assert!(!opts.wait.no_wait);
    assert!(!opts.rac);
    assert!(opts.target_name().is_none());
}

// parse_target_defaults_to_host ensures --host stands in for -t.
#[test]
fn parse_target_defaults_to_host() {
    let opts = Opts::try_parse_from([
        "backup-mount",
        "-d",
        "HRPROD",
        "--host",
        "db01",
        "-p",
        "/mnt/rubrik",
    ])
    .expect("should parse backup-mount with --host");

    assert_eq!(opts.target_name(), Some("db01"));
}

// parse_all_flags ensures every optional flag parses.
#[test]
fn parse_all_flags() {
    let opts = Opts::try_parse_from([
        "backup-mount",
        "-d",
        "HRPROD",
        "--host",
        "db01",
        "-p",
        "/mnt/rubrik",
        "-t",
        "rac01",
        "--rac",
        "-r",
        "2026-01-15T12:30:00",
        "--timeout",
        "30",
        "--no-wait",
    ])
    .expect("should parse backup-mount with all flags");

    assert_eq!(opts.target_name(), Some("rac01"));
    assert!(opts.rac);
    assert_eq!(opts.restore_time.as_deref(), Some("2026-01-15T12:30:00"));
    assert_eq!(opts.wait.timeout, 30);
    assert!(opts.wait.no_wait);
}

// parse_missing_path_fails ensures -p is required.
#[test]
fn parse_missing_path_fails() {
    let result = Opts::try_parse_from(["backup-mount", "-d", "HRPROD"]);

    assert!(result.is_err(), "should fail without -p");
}
