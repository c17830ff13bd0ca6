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

//! Fetch a report from the metropol api.
//!
//! ```shell
//! METROPOL_PUBLIC_KEY=... METROPOL_PRIVATE_KEY=... METROPOL_PORT=5555 \
//!     RUST_LOG=info cargo run --example report -- credit_info 880000088 5000
//! ```

use anyhow::{bail, Context as _, Result};
use metropol::{Client, Config, ReportRequest};
use metropol_core::{Context, OsEnv};
use metropol_http_send_reqwest::ReqwestHttpSend;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let _ = dotenv::dotenv();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (kind, identity_number) = match args.as_slice() {
        [kind, identity_number, ..] => (kind.as_str(), identity_number.as_str()),
        _ => bail!("usage: report <identity_verification|delinquency_status|credit_info|consumer_score> <identity number> [loan amount]"),
    };
    let loan_amount = || -> Result<u64> {
        args.get(2)
            .context("loan amount is required for this report")?
            .parse()
            .context("loan amount must be a positive integer")
    };

    let req = match kind {
        "identity_verification" => ReportRequest::identity_verification(identity_number),
        "delinquency_status" => ReportRequest::delinquency_status(identity_number, loan_amount()?),
        "credit_info" => ReportRequest::credit_info(identity_number, loan_amount()?),
        "consumer_score" => ReportRequest::consumer_score(identity_number),
        other => bail!("unknown report {other}"),
    };

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::new().from_env(&ctx);
    let client = Client::new(ctx, config);

    let value = client.report(&req).await?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
