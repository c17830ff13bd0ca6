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

use std::env;

use anyhow::Result;
use log::{debug, warn};
use metropol::{Client, Config};
use metropol_core::{Context, OsEnv};
use metropol_http_send_reqwest::ReqwestHttpSend;

/// Build a client against the real api.
///
/// Runs only with `METROPOL_TEST=on`; keys, endpoint and the identity number
/// to query come from `METROPOL_*` env values (a `.env` file works too).
fn init_live_client() -> Option<(Client, String)> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("METROPOL_TEST").ok().as_deref() != Some("on") {
        return None;
    }

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::new().from_env(&ctx);
    let identity_number =
        env::var("METROPOL_TEST_IDENTITY_NUMBER").expect("env METROPOL_TEST_IDENTITY_NUMBER must set");

    Some((Client::new(ctx, config), identity_number))
}

#[tokio::test]
async fn test_live_identity_verification() -> Result<()> {
    let Some((client, identity_number)) = init_live_client() else {
        warn!("METROPOL_TEST is not set, skipped");
        return Ok(());
    };

    let value = client.identity_verification(&identity_number).await?;
    debug!("identity verification: {value}");
    assert!(value.is_object(), "response must be a json object: {value}");
    Ok(())
}

#[tokio::test]
async fn test_live_consumer_score() -> Result<()> {
    let Some((client, identity_number)) = init_live_client() else {
        warn!("METROPOL_TEST is not set, skipped");
        return Ok(());
    };

    let value = client.consumer_score(&identity_number).await?;
    debug!("consumer score: {value}");
    assert!(value.is_object(), "response must be a json object: {value}");
    Ok(())
}
