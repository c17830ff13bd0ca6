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

use anyhow::Result;
use metropol::{compute_hash, Client, Credential};
use metropol_core::Context;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::mock::*;

#[tokio::test]
async fn test_hashed_bytes_are_the_sent_bytes() -> Result<()> {
    let http = MockHttpSend::ok(r#"{"has_error":false}"#);
    client(&http).credit_info(123456, 5000).await?;

    let req = http.last_request();
    let cred = Credential::new(PUBLIC_KEY, PRIVATE_KEY);
    assert_eq!(
        req.header("X-METROPOL-REST-API-HASH"),
        compute_hash(&req.body, req.header("X-METROPOL-REST-API-TIMESTAMP"), &cred)
    );
    assert_eq!(
        req.body_str(),
        r#"{"report_type":8,"identity_number":"123456","identity_type":"001","loan_amount":5000,"report_reason":1}"#
    );
    Ok(())
}

#[tokio::test]
async fn test_signed_headers() -> Result<()> {
    let http = MockHttpSend::ok("{}");
    client(&http).identity_verification(123456).await?;

    let req = http.last_request();
    assert_eq!(req.header("X-METROPOL-REST-API-KEY"), PUBLIC_KEY);
    assert_eq!(req.header("X-METROPOL-REST-API-TIMESTAMP"), PINNED_TIMESTAMP);
    assert_eq!(req.header("Content-Type"), "application/json");

    let expected = metropol_core::hash::hex_sha256(
        format!(
            "{PRIVATE_KEY}{}{PUBLIC_KEY}{PINNED_TIMESTAMP}",
            r#"{"report_type":1,"identity_number":"123456","identity_type":"001"}"#
        )
        .as_bytes(),
    );
    assert_eq!(req.header("X-METROPOL-REST-API-HASH"), expected);

    // Names are stored, and sent, in lower case.
    let mut names: Vec<&str> = req.headers.keys().map(|k| k.as_str()).collect();
    names.sort_unstable();
    assert_eq!(
        names,
        vec![
            "content-type",
            "x-metropol-rest-api-hash",
            "x-metropol-rest-api-key",
            "x-metropol-rest-api-timestamp",
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_every_request_is_signed_again() -> Result<()> {
    let http = MockHttpSend::ok("{}");
    let client = Client::new(Context::new().with_http_send(http.clone()), config());

    client.consumer_score(1).await?;
    client.consumer_score(2).await?;

    let requests = http.requests();
    assert_eq!(requests.len(), 2);
    let cred = Credential::new(PUBLIC_KEY, PRIVATE_KEY);
    for req in &requests {
        let timestamp = req.header("X-METROPOL-REST-API-TIMESTAMP");
        assert!(timestamp.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(
            req.header("X-METROPOL-REST-API-HASH"),
            compute_hash(&req.body, timestamp, &cred)
        );
    }
    assert_ne!(
        requests[0].header("X-METROPOL-REST-API-HASH"),
        requests[1].header("X-METROPOL-REST-API-HASH")
    );
    Ok(())
}

#[tokio::test]
async fn test_generic_post_is_signed_like_reports() -> Result<()> {
    let http = MockHttpSend::ok("[]");
    let payload = json!({"report_type": 3, "identity_number": "42", "identity_type": "001"});
    client(&http).post("/score/consumer", &payload).await?;

    let req = http.last_request();
    assert_eq!(
        req.header("X-METROPOL-REST-API-HASH"),
        compute_hash(
            &req.body,
            PINNED_TIMESTAMP,
            &Credential::new(PUBLIC_KEY, PRIVATE_KEY)
        )
    );
    assert_eq!(serde_json::from_slice::<serde_json::Value>(&req.body)?, payload);
    Ok(())
}

#[tokio::test]
async fn test_missing_credential_still_signs() -> Result<()> {
    let http = MockHttpSend::ok("{}");
    let client = client(&http).with_config(metropol::Config::new());
    client.identity_verification("1").await?;

    let req = http.last_request();
    assert_eq!(req.header("X-METROPOL-REST-API-KEY"), "");
    assert_eq!(
        req.header("X-METROPOL-REST-API-HASH"),
        compute_hash(&req.body, PINNED_TIMESTAMP, &Credential::default())
    );
    Ok(())
}
