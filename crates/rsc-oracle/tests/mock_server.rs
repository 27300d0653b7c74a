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

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use rsc_oracle::Credentials;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

pub const TOKEN_PATH: &str = "/api/client_token";
pub const GRAPHQL_PATH: &str = "/api/graphql";
pub const SESSION_PATH: &str = "/api/session";

pub const ACCESS_TOKEN: &str = "tok-123";

pub async fn create_mock_http_server() -> mockito::ServerGuard {
    // Request a new server from the pool
    mockito::Server::new_async().await
}

pub fn credentials(server: &mockito::ServerGuard) -> Credentials {
    Credentials {
        client_id: "client|abc".to_string(),
        client_secret: "s3cret".to_string(),
        name: Some("svc-oracle".to_string()),
        access_token_uri: format!("{}{}", server.url(), TOKEN_PATH),
    }
}

/// Token endpoint answering `status` with `body`.
pub async fn add_token_mock(
    server: &mut mockito::ServerGuard,
    status_code: usize,
    body: &str,
) -> mockito::Mock {
    server
        .mock("POST", TOKEN_PATH)
        .with_status(status_code)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

pub async fn add_token_ok(server: &mut mockito::ServerGuard) -> mockito::Mock {
    add_token_mock(
        server,
        200,
        &format!(r#"{{"access_token":"{ACCESS_TOKEN}","token_type":"Bearer"}}"#),
    )
    .await
}

/// GraphQL endpoint answering any document that mentions `operation`.
pub async fn add_graphql_mock(
    server: &mut mockito::ServerGuard,
    operation: &str,
    status_code: usize,
    body: &str,
) -> mockito::Mock {
    server
        .mock("POST", GRAPHQL_PATH)
        .match_header("authorization", format!("Bearer {ACCESS_TOKEN}").as_str())
        .match_body(mockito::Matcher::Regex(operation.to_string()))
        .with_status(status_code)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

/// How the raw server treats GraphQL connections.
#[derive(Clone, Copy, Debug)]
pub enum GraphQlFault {
    /// Read the request, then close the connection without replying.
    Drop,
    /// Read the request, then never reply.
    Stall,
}

/// A bare TCP server that issues a token on the token path and applies
/// `fault` to every other request. Returns the credentials pointing at it
/// and a counter of GraphQL attempts.
pub async fn create_faulty_server(fault: GraphQlFault) -> (Credentials, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    let attempts = Arc::new(AtomicUsize::new(0));

    let counter = attempts.clone();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let counter = counter.clone();
            tokio::spawn(async move {
                let Some(request) = read_request(&mut socket).await else {
                    return;
                };
                if request.starts_with(&format!("POST {TOKEN_PATH}")) {
                    let body = format!(r#"{{"access_token":"{ACCESS_TOKEN}"}}"#);
                    let response = format!(
                        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\nconnection: close\r\ncontent-length: {}\r\n\r\n{body}",
                        body.len()
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                    return;
                }
                counter.fetch_add(1, Ordering::SeqCst);
                if let GraphQlFault::Stall = fault {
                    tokio::time::sleep(Duration::from_secs(60)).await;
                }
            });
        }
    });

    let credentials = Credentials {
        client_id: "client|abc".to_string(),
        client_secret: "s3cret".to_string(),
        name: None,
        access_token_uri: format!("{url}{TOKEN_PATH}"),
    };
    (credentials, attempts)
}

/// Reads one HTTP/1.1 request, head and content-length body.
async fn read_request(socket: &mut TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf).to_string();
        let Some(head_end) = text.find("\r\n\r\n") else {
            continue;
        };
        let body_len = text[..head_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        if buf.len() >= head_end + 4 + body_len {
            return Some(text);
        }
    }
}
