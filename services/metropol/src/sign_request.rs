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

//! Metropol request signing.

use chrono::{Datelike, Timelike};
use http::header::{HeaderName, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue};
use log::debug;
use metropol_core::hash::hex_sha256_concat;
use metropol_core::time::{now, DateTime};
use metropol_core::utils::Redact;
use metropol_core::Result;

use crate::constants::*;
use crate::Credential;

/// RequestSigner derives the authentication headers of a metropol request.
///
/// Every request carries
///
/// - `X-METROPOL-REST-API-KEY`: the public key
/// - `X-METROPOL-REST-API-TIMESTAMP`: the signing time, see [`format_timestamp`]
/// - `X-METROPOL-REST-API-HASH`: `hex(sha256(private_key + payload + public_key + timestamp))`
///
/// The timestamp is part of the hash, so headers must be built again for
/// every request, including a resend of the same payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSigner {
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a signer that uses the current time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Timestamp for a request signed right now.
    pub fn compute_timestamp(&self) -> String {
        format_timestamp(self.time.unwrap_or_else(now))
    }

    /// Build the headers for one request over the exact payload bytes sent.
    pub fn build_headers(&self, payload: &[u8], cred: &Credential) -> Result<HeaderMap> {
        let timestamp = self.compute_timestamp();
        let hash = compute_hash(payload, &timestamp, cred);
        debug!(
            "signing {} payload bytes with key {}",
            payload.len(),
            Redact::from(&cred.public_key)
        );

        let mut headers = HeaderMap::with_capacity(4);
        headers.insert(
            HeaderName::from_static(X_METROPOL_REST_API_KEY),
            HeaderValue::from_str(&cred.public_key)?,
        );
        headers.insert(HeaderName::from_static(X_METROPOL_REST_API_HASH), {
            let mut value = HeaderValue::from_str(&hash)?;
            value.set_sensitive(true);

            value
        });
        headers.insert(
            HeaderName::from_static(X_METROPOL_REST_API_TIMESTAMP),
            HeaderValue::from_str(&timestamp)?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(headers)
    }
}

/// Format the signing time as required by the api.
///
/// The UTC year, month, day, hour, minute, second and microsecond are
/// written as plain decimals with no padding and no separators, for example
/// `2014-07-08T17:58:39.987843Z` becomes `201478175839987843`.
pub fn format_timestamp(time: DateTime) -> String {
    format!(
        "{}{}{}{}{}{}{}",
        time.year(),
        time.month(),
        time.day(),
        time.hour(),
        time.minute(),
        time.second(),
        time.timestamp_subsec_micros()
    )
}

/// Compute the request hash.
///
/// ```text
/// hex(sha256(private_key + payload + public_key + timestamp))
/// ```
///
/// Empty keys are hashed as they are.
pub fn compute_hash(payload: &[u8], timestamp: &str, cred: &Credential) -> String {
    hex_sha256_concat(&[
        cred.private_key.as_bytes(),
        payload,
        cred.public_key.as_bytes(),
        timestamp.as_bytes(),
    ])
}
