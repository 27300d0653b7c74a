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

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client as HttpClient, ClientBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use tryhard::RetryPolicy;

use crate::graphql::{GraphQl, GraphQlRequest, GraphQlResponse, truncate};
use crate::{ApiError, Credentials, RscError, RscResult};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(180);
pub const TRANSPORT_RETRIES: u32 = 3;
const TRANSPORT_RETRY_INTERVAL: Duration = Duration::from_secs(1);

const CONTENT_TYPE_JSON: &str = "application/json;charset=UTF-8";
const ACCEPT_JSON: &str = "application/json, text/plain";

/// Reason text for a non-200 answer from the token endpoint.
pub fn http_error_reason(status: StatusCode) -> Option<&'static str> {
    match status.as_u16() {
        204 => Some("No Content"),
        400 => Some("Bad request: An error occurred while fetching the data"),
        401 => Some("Authentication error: Please provide valid credentials"),
        403 => Some("Forbidden: Please provide valid credentials"),
        404 => Some("Resource not found"),
        409 => Some("Conflict"),
        500 => Some("The server encountered an error"),
        _ => None,
    }
}

#[derive(Clone, Debug)]
pub struct SessionOptions {
    /// Skip TLS certificate verification.
    pub insecure: bool,
    pub timeout: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            insecure: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Endpoints derived from the access token URI of the service account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub token: String,
    pub graphql: String,
    pub session: String,
}

impl Endpoints {
    pub fn from_token_uri(access_token_uri: &str) -> Endpoints {
        Endpoints {
            token: access_token_uri.to_string(),
            graphql: access_token_uri.replace("client_token", "graphql"),
            session: access_token_uri.replace("client_token", "session"),
        }
    }
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    name: Option<&'a str>,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// RscSession is an authenticated service-account session. It is the only
/// thing in this crate that talks to the network.
///
/// The bearer token is obtained once in [`RscSession::open`] and never
/// refreshed. [`RscSession::close`] consumes the session, so a session is
/// released at most once.
#[derive(Debug)]
pub struct RscSession {
    endpoints: Endpoints,
    client: HttpClient,
    bearer_token: String,
}

impl RscSession {
    pub async fn open(credentials: &Credentials, options: &SessionOptions) -> RscResult<Self> {
        let endpoints = Endpoints::from_token_uri(&credentials.access_token_uri);
        debug!("Using insecure connection: {}", options.insecure);

        let client = ClientBuilder::new()
            .danger_accept_invalid_certs(options.insecure)
            .timeout(options.timeout)
            .build()
            .map_err(ApiError::Client)?;

        debug!("Access token uri: {}", endpoints.token);
        let response = client
            .post(&endpoints.token)
            .header(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON))
            .header(ACCEPT, HeaderValue::from_static(ACCEPT_JSON))
            .json(&TokenRequest {
                client_id: &credentials.client_id,
                client_secret: &credentials.client_secret,
                name: credentials.name.as_deref(),
            })
            .send()
            .await
            .map_err(|e| RscError::Auth(format!("Could not reach {}: {e}", endpoints.token)))?;

        let status = response.status();
        if status != StatusCode::OK {
            let reason = http_error_reason(status).unwrap_or("Unexpected response");
            warn!("{reason}");
            return Err(RscError::Auth(format!(
                "Token endpoint returned HTTP {status}: {reason}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RscError::Auth(format!("Could not read token response: {e}")))?;
        let token = serde_json::from_str::<TokenResponse>(&body)
            .ok()
            .and_then(|t| t.access_token)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| RscError::Auth("Unable to obtain access token from RSC.".to_string()))?;

        debug!("Service Account session created and Access Token has been obtained...");
        Ok(RscSession {
            endpoints,
            client,
            bearer_token: token,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn auth_headers(&self) -> RscResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_JSON));
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.bearer_token))
            .map_err(|_| RscError::Auth("Access token is not a valid header value".to_string()))?;
        headers.insert(AUTHORIZATION, bearer);
        Ok(headers)
    }

    /// Releases the session on the remote side. Failures are logged and
    /// otherwise ignored; this runs during cleanup after other errors.
    pub async fn close(self) {
        debug!("End session uri: {}", self.endpoints.session);
        let headers = match self.auth_headers() {
            Ok(h) => h,
            Err(e) => {
                warn!("Unable to delete session: {e}");
                return;
            }
        };
        match self
            .client
            .delete(&self.endpoints.session)
            .headers(headers)
            .send()
            .await
        {
            Ok(response) if response.status() == StatusCode::NO_CONTENT => {
                debug!("Session deleted and token has been released...");
            }
            Ok(response) => {
                warn!(
                    "Unable to delete session: HTTP {} from {}",
                    response.status(),
                    self.endpoints.session
                );
            }
            Err(e) => warn!("Unable to delete session: {e}"),
        }
    }

    async fn post_graphql(
        &self,
        headers: &HeaderMap,
        body: &GraphQlRequest<'_>,
    ) -> Result<(StatusCode, String), ApiError> {
        let url = &self.endpoints.graphql;
        let response = self
            .client
            .post(url)
            .headers(headers.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network {
                url: url.clone(),
                source: e,
            })?;
        let status = response.status();
        let text = response.text().await.map_err(|e| ApiError::Network {
            url: url.clone(),
            source: e,
        })?;
        Ok((status, text))
    }
}

/// Connection-level failures: refused, reset or closed before a reply,
/// and timeouts. Request building, redirect and body decode errors are
/// not retried.
fn is_transient(error: &ApiError) -> bool {
    match error {
        ApiError::Network { source, .. } => {
            !(source.is_builder() || source.is_redirect() || source.is_decode())
        }
        _ => false,
    }
}

#[async_trait]
impl GraphQl for RscSession {
    async fn execute(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> RscResult<serde_json::Value> {
        let url = self.endpoints.graphql.clone();
        let headers = self.auth_headers()?;
        let body = GraphQlRequest { query, variables };
        debug!("TX {}", truncate(query.trim(), 120));

        let (status, text) = tryhard::retry_fn(|| self.post_graphql(&headers, &body))
            .retries(TRANSPORT_RETRIES)
            .custom_backoff(|attempt, error: &ApiError| {
                if is_transient(error) {
                    debug!("Transport error on attempt {attempt}, retrying: {error}");
                    RetryPolicy::Delay(TRANSPORT_RETRY_INTERVAL)
                } else {
                    RetryPolicy::Break
                }
            })
            .await?;
        debug!("RX {status} {}", truncate(&text, 1500));

        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                url,
                status_code: status,
                response_body: text,
            }
            .into());
        }

        let response: GraphQlResponse =
            serde_json::from_str(&text).map_err(|e| ApiError::JsonDeserialize {
                url: url.clone(),
                body: truncate(&text, 1500).to_string(),
                source: e,
            })?;

        if !response.errors.is_empty() {
            return Err(ApiError::GraphQl {
                url,
                messages: response.errors.into_iter().map(|e| e.message).collect(),
            }
            .into());
        }

        response
            .data
            .ok_or_else(|| ApiError::NoData { url }.into())
    }

    fn endpoint(&self) -> &str {
        &self.endpoints.graphql
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_derived_from_token_uri() {
        let endpoints =
            Endpoints::from_token_uri("https://acme.my.rubrik.com/api/client_token");
        assert_eq!(endpoints.graphql, "https://acme.my.rubrik.com/api/graphql");
        assert_eq!(endpoints.session, "https://acme.my.rubrik.com/api/session");
        assert_eq!(
            endpoints.token,
            "https://acme.my.rubrik.com/api/client_token"
        );
    }

    #[test]
    fn http_error_table() {
        assert_eq!(http_error_reason(StatusCode::NO_CONTENT), Some("No Content"));
        assert!(
            http_error_reason(StatusCode::UNAUTHORIZED)
                .unwrap()
                .starts_with("Authentication error")
        );
        assert!(
            http_error_reason(StatusCode::FORBIDDEN)
                .unwrap()
                .starts_with("Forbidden")
        );
        assert_eq!(http_error_reason(StatusCode::CONFLICT), Some("Conflict"));
        assert_eq!(http_error_reason(StatusCode::IM_A_TEAPOT), None);
    }
}
