// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::sync::{Arc, Mutex};

use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use metropol::{Client, Config, RequestSigner};
use metropol_core::time::parse_rfc3339;
use metropol_core::{Context, Error, HttpSend, Result};

pub const PUBLIC_KEY: &str = "test_public_key";
pub const PRIVATE_KEY: &str = "test_private_key";

/// Signing time pinned by [`client`]: `2014-07-08T17:58:39.987843Z`.
pub const PINNED_TIMESTAMP: &str = "201478175839987843";

/// A request as seen by the transport.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub uri: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> &str {
        self.headers
            .get(name)
            .unwrap_or_else(|| panic!("header {name} must be set"))
            .to_str()
            .expect("header must be ascii")
    }

    pub fn body_str(&self) -> &str {
        std::str::from_utf8(&self.body).expect("body must be utf-8")
    }
}

#[derive(Debug, Clone)]
enum Reply {
    Respond(StatusCode, Bytes),
    ConnectionRefused,
}

/// MockHttpSend records every request and answers with a canned reply.
#[derive(Debug, Clone)]
pub struct MockHttpSend {
    reply: Reply,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpSend {
    pub fn respond(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            reply: Reply::Respond(status, body.into()),
            requests: Arc::default(),
        }
    }

    pub fn ok(body: &'static str) -> Self {
        Self::respond(StatusCode::OK, body)
    }

    pub fn connection_refused() -> Self {
        Self {
            reply: Reply::ConnectionRefused,
            requests: Arc::default(),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("at least one request must be sent")
    }
}

#[async_trait::async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let (parts, body) = req.into_parts();
        self.requests.lock().unwrap().push(RecordedRequest {
            method: parts.method,
            uri: parts.uri.to_string(),
            headers: parts.headers,
            body,
        });

        match &self.reply {
            Reply::Respond(status, body) => Ok(http::Response::builder()
                .status(*status)
                .header("content-type", "application/json")
                .body(body.clone())?),
            Reply::ConnectionRefused => Err(Error::transport("connect to server failed")
                .with_source(std::io::Error::from(std::io::ErrorKind::ConnectionRefused))),
        }
    }
}

pub fn config() -> Config {
    Config::new()
        .with_public_key(PUBLIC_KEY)
        .with_private_key(PRIVATE_KEY)
}

/// Client over `http` with the signing time pinned to [`PINNED_TIMESTAMP`].
pub fn client(http: &MockHttpSend) -> Client {
    let _ = env_logger::builder().is_test(true).try_init();

    let time = parse_rfc3339("2014-07-08T17:58:39.987843Z").expect("time must be valid");
    Client::new(Context::new().with_http_send(http.clone()), config())
        .with_signer(RequestSigner::new().with_time(time))
}
