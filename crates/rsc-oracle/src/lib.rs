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

//! Client library for the Rubrik Security Cloud GraphQL API, scoped to
//! Oracle database backup objects.
//!
//! The entry point is [`RscSession`]: open one from [`Credentials`], bind a
//! [`Resolver`] to it to turn human-supplied names into object ids, issue
//! domain operations from [`oracle`], and hand any returned async request to
//! a [`Poller`]. Close the session exactly once when done.

pub mod credentials;
pub mod graphql;
pub mod model;
pub mod mount;
pub mod oracle;
pub mod poller;
pub mod queries;
pub mod report;
pub mod resolver;
pub mod session;
pub mod time;

use std::path::PathBuf;

pub use credentials::Credentials;
pub use graphql::GraphQl;
pub use model::{AsyncRequest, AsyncRequestStatus};
pub use poller::Poller;
pub use resolver::{
    DatabaseReference, ResolvedCluster, ResolvedObject, ResolvedTarget, Resolver, TargetKind,
};
pub use session::{RscSession, SessionOptions};

pub type RscResult<T> = Result<T, RscError>;

/// RscError enumerates every failure a caller of this crate can observe.
/// Each variant carries a human-readable message; the CLI prints it and
/// exits non-zero.
#[derive(thiserror::Error, Debug)]
pub enum RscError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Ambiguous: {0}")]
    Ambiguous(String),

    #[error(
        "Timeout: async request {request_id} has been {status} for longer than the timeout period of {minutes} minutes. The request will remain active (current status: {status})."
    )]
    Timeout {
        request_id: String,
        status: AsyncRequestStatus,
        minutes: u64,
    },

    #[error("Async request {request_id} ended with status {status}: {message}")]
    OperationFailed {
        request_id: String,
        status: AsyncRequestStatus,
        message: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// ApiError covers failures of an authenticated call: transport, HTTP
/// status, GraphQL-level errors and undecodable responses.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Network error talking to RSC at {url}. {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("HTTP {status_code} at {url}: {response_body}")]
    HttpStatus {
        url: String,
        status_code: reqwest::StatusCode,
        response_body: String,
    },

    #[error("GraphQL errors returned by {url}: {}", .messages.join("; "))]
    GraphQl { url: String, messages: Vec<String> },

    #[error("GraphQL response from {url} has no data")]
    NoData { url: String },

    #[error("Could not deserialize response from {url}. Body: {body}. {source}")]
    JsonDeserialize {
        url: String,
        body: String,
        source: serde_json::Error,
    },

    #[error("Could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl RscError {
    /// True for the resolution errors that mean the caller supplied a
    /// name that does not map to exactly one object.
    pub fn is_resolution_error(&self) -> bool {
        matches!(self, RscError::NotFound(_) | RscError::Ambiguous(_))
    }
}
