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
use rsc_oracle::oracle::LiveMountFilter;

use super::args::*;

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

// parse_by_id ensures unmount parses with --id alone.
#[test]
fn parse_by_id() {
    let opts = Opts::try_parse_from(["unmount", "--id", "m-1", "--force"])
        .expect("should parse unmount --id");

    assert_eq!(opts.selector(), MountSelector::Id("m-1".to_string()));
    assert!(opts.force);
}

// parse_by_database_and_host ensures unmount parses with -d and -m.
#[test]
fn parse_by_database_and_host() {
    let opts = Opts::try_parse_from(["unmount", "-d", "HRPROD", "-m", "db02", "--no-wait"])
        .expect("should parse unmount -d -m");

    assert_eq!(
        opts.selector(),
        MountSelector::Matching(LiveMountFilter {
            source_database: Some("HRPROD".to_string()),
            mounted_on: Some("db02".to_string()),
        })
    );
    assert!(opts.wait.no_wait);
}

// parse_requires_a_selector ensures one of --id or -d is given.
#[test]
fn parse_requires_a_selector() {
    let result = Opts::try_parse_from(["unmount", "--force"]);

    assert!(result.is_err(), "should fail without --id or -d");
}

// parse_database_requires_host ensures -d needs -m.
#[test]
fn parse_database_requires_host() {
    let result = Opts::try_parse_from(["unmount", "-d", "HRPROD"]);

    assert!(result.is_err(), "should fail with -d but no -m");
}

// parse_id_conflicts_with_database ensures --id and -d are exclusive.
#[test]
fn parse_id_conflicts_with_database() {
    let result = Opts::try_parse_from(["unmount", "--id", "m-1", "-d", "HRPROD", "-m", "db02"]);

    assert!(result.is_err(), "should fail with both --id and -d");
}
