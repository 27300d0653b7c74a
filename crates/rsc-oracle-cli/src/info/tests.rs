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

// parse_database_only ensures info parses with just -d.
#[test]
fn parse_database_only() {
    let opts = Opts::try_parse_from(["info", "-d", "HRPROD"]).expect("should parse info");

    assert_eq!(opts.database.database_name, "HRPROD");
    assert!(opts.database.host.is_none());
    assert!(opts.database.cluster_name.is_none());
}

// parse_host_and_cluster ensures info parses --host and -c.
#[test]
fn parse_host_and_cluster() {
    let opts = Opts::try_parse_from(["info", "-d", "HRPROD", "--host", "db01", "-c", "cdm01"])
        .expect("should parse info with host and cluster");

    let reference = opts.database.reference();
    assert_eq!(reference.host.as_deref(), Some("db01"));
    assert_eq!(reference.cluster.as_deref(), Some("cdm01"));
}

// parse_missing_database_fails ensures -d is required.
#[test]
fn parse_missing_database_fails() {
    let result = Opts::try_parse_from(["info", "--host", "db01"]);

    assert!(result.is_err(), "should fail without -d");
}
