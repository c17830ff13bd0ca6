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

//! Reqwest based [`HttpSend`] for the metropol client.
//!
//! ```no_run
//! use metropol_core::Context;
//! use metropol_http_send_reqwest::ReqwestHttpSend;
//!
//! let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
//! ```

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use log::debug;
use metropol_core::{Error, HttpSend, Result};
use reqwest::{Client, Request};

/// Hard deadline applied to every request unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// ReqwestHttpSend sends requests with a shared [`reqwest::Client`].
///
/// Redirects are followed by reqwest's default policy. Every response is
/// returned as is, whatever its status code.
#[derive(Debug)]
pub struct ReqwestHttpSend {
    client: Client,
    timeout: Duration,
}

impl Default for ReqwestHttpSend {
    fn default() -> Self {
        Self::new(Client::default())
    }
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the per request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let mut req = Request::try_from(req)
            .map_err(|e| Error::request_invalid("convert request failed").with_source(e))?;
        *req.timeout_mut() = Some(self.timeout);

        debug!("sending {} {}", req.method(), req.url());
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::transport(send_error_message(&e)).with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::transport("read response body failed").with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}

fn send_error_message(err: &reqwest::Error) -> &'static str {
    if err.is_timeout() {
        "request timed out"
    } else if err.is_connect() {
        "connect to server failed"
    } else {
        "send request failed"
    }
}
