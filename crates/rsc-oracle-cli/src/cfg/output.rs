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

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    #[value(name = "ascii-table")]
    AsciiTable,
    #[value(name = "json")]
    Json,
    #[value(name = "yaml")]
    Yaml,
}

// print_structured prints `value` for the JSON and YAML formats and
// returns false for AsciiTable, leaving the table to the caller.
pub fn print_structured<T: Serialize>(format: OutputFormat, value: &T) -> color_eyre::Result<bool> {
    match format {
        OutputFormat::AsciiTable => return Ok(false),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(value)?),
    }
    Ok(true)
}
