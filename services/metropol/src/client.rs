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

use std::fmt::Display;

use bytes::Bytes;
use http::{Method, Request, Uri};
use log::{info, warn};
use metropol_core::{Context, Error, Result};
use serde::Serialize;
use serde_json::Value;

use crate::{Config, Credential, ReportRequest, RequestSigner};

/// Client for the metropol credit reference bureau api.
///
/// A client owns its configuration; reconfiguring means deriving a new client
/// with [`Client::with_config`], which keeps sharing the http transport of the
/// [`Context`]. Clients are cheap to clone and safe to use from many tasks,
/// every request is signed on its own.
///
/// ```no_run
/// use metropol::{Client, Config};
/// use metropol_core::{Context, OsEnv};
/// use metropol_http_send_reqwest::ReqwestHttpSend;
///
/// # async fn example() -> metropol_core::Result<()> {
/// let ctx = Context::new()
///     .with_http_send(ReqwestHttpSend::default())
///     .with_env(OsEnv);
/// let client = Client::new(ctx.clone(), Config::new().from_env(&ctx));
///
/// let report = client.credit_info(880000088, 5000).await?;
/// println!("{report}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    config: Config,
    credential: Credential,
    signer: RequestSigner,
}

impl Client {
    /// Create a new client.
    ///
    /// Missing keys are not an error: requests are signed with empty keys
    /// and a warning is logged.
    pub fn new(ctx: Context, config: Config) -> Self {
        let credential = Credential::from_config(&config);
        if credential.is_empty() {
            warn!("metropol api keys are incomplete, requests are signed with empty keys");
        }
        Self {
            ctx,
            config,
            credential,
            signer: RequestSigner::new(),
        }
    }

    /// Derive a client using another config and the same transport.
    pub fn with_config(&self, config: Config) -> Self {
        Self {
            signer: self.signer,
            ..Self::new(self.ctx.clone(), config)
        }
    }

    /// Replace the request signer.
    pub fn with_signer(mut self, signer: RequestSigner) -> Self {
        self.signer = signer;
        self
    }

    /// Config used by this client.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve the full url of a resource path under the configured endpoint.
    pub fn url(&self, resource_path: &str) -> Result<String> {
        resolve_url(
            &self.config.base_url,
            self.config.port,
            self.config.version.as_deref(),
            resource_path,
        )
    }

    /// Verify an identity number.
    pub async fn identity_verification(&self, identity_number: impl Display) -> Result<Value> {
        self.report(&ReportRequest::identity_verification(identity_number)).await
    }

    /// Check the delinquency status of an identity for a loan of `loan_amount`.
    ///
    /// `loan_amount` is in whole currency units.
    pub async fn delinquency_status(
        &self,
        identity_number: impl Display,
        loan_amount: u64,
    ) -> Result<Value> {
        self.report(&ReportRequest::delinquency_status(identity_number, loan_amount))
            .await
    }

    /// Fetch the credit information report of an identity for a loan of `loan_amount`.
    ///
    /// `loan_amount` is in whole currency units.
    pub async fn credit_info(
        &self,
        identity_number: impl Display,
        loan_amount: u64,
    ) -> Result<Value> {
        self.report(&ReportRequest::credit_info(identity_number, loan_amount)).await
    }

    /// Fetch the consumer score of an identity.
    pub async fn consumer_score(&self, identity_number: impl Display) -> Result<Value> {
        self.report(&ReportRequest::consumer_score(identity_number)).await
    }

    /// Send a report request to the path serving its report type.
    pub async fn report(&self, req: &ReportRequest) -> Result<Value> {
        self.post(req.path(), req).await
    }

    /// Post a signed json payload to `resource_path` and decode the json answer.
    ///
    /// The payload is serialized once; the very same bytes are hashed and
    /// sent. The decoded body is returned whatever the http status, error
    /// statuses carry their own json description.
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        resource_path: &str,
        payload: &T,
    ) -> Result<Value> {
        let url = self.url(resource_path)?;
        let uri: Uri = url.parse()?;

        let body = Bytes::from(serde_json::to_vec(payload).map_err(|e| {
            Error::request_invalid("serialize request payload failed").with_source(e)
        })?);

        info!("metropol api url: {url}");
        info!("metropol api payload: {}", String::from_utf8_lossy(&body));

        let headers = self.signer.build_headers(&body, &self.credential)?;

        let mut req = Request::new(body);
        *req.method_mut() = Method::POST;
        *req.uri_mut() = uri;
        *req.headers_mut() = headers;

        let resp = self.ctx.http_send_as_string(req).await?;
        let status = resp.status();
        let content = resp.into_body();
        if !status.is_success() {
            warn!("metropol api responded with status {status}");
        }
        info!("metropol api response: {content}");

        serde_json::from_str(&content).map_err(|e| {
            Error::decode(format!("response with status {status} is not valid json")).with_source(e)
        })
    }
}

/// Resolve the url of a resource.
///
/// ```text
/// base_url ":" port ["/" version] resource_path
/// ```
///
/// Nothing is encoded or normalized, parts are used as given.
pub fn resolve_url(
    base_url: &str,
    port: u16,
    version: Option<&str>,
    resource_path: &str,
) -> Result<String> {
    if base_url.trim().is_empty() {
        return Err(Error::config_invalid("base url is empty"));
    }

    let mut url = format!("{base_url}:{port}");
    if let Some(version) = version {
        url.push('/');
        url.push_str(version);
    }
    url.push_str(resource_path);

    Ok(url)
}
