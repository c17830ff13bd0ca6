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

use std::time::Duration;

use anyhow::Result;
use bytes::Bytes;
use metropol_core::Context;
use metropol_http_send_reqwest::ReqwestHttpSend;
use reqwest::Client;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Share one tuned client across every request.
    let client = Client::builder()
        .pool_max_idle_per_host(4)
        .user_agent("metropol-example/0.1")
        .build()?;

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::new(client).with_timeout(Duration::from_secs(30)));

    let req = http::Request::post("https://httpbin.org/post")
        .header("Content-Type", "application/json")
        .body(Bytes::from(r#"{"report_type":1,"identity_number":"880000088","identity_type":"001"}"#))?;

    match ctx.http_send_as_string(req).await {
        Ok(resp) => {
            println!("Response status: {}", resp.status());
            println!("{}", resp.body());
        }
        Err(e) => eprintln!("Request failed: {e}"),
    }

    Ok(())
}
