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

//! Client for the Metropol credit reference bureau REST api.
//!
//! Every call is a signed json `POST`. The payload is serialized once and
//! the same bytes are both hashed and sent:
//!
//! ```text
//! X-METROPOL-REST-API-KEY:       public_key
//! X-METROPOL-REST-API-TIMESTAMP: UTC year month day hour minute second microsecond, unpadded
//! X-METROPOL-REST-API-HASH:      hex(sha256(private_key + payload + public_key + timestamp))
//! ```
//!
//! Header names are sent lowercase (`x-metropol-rest-api-key`, ...) since
//! `http` normalizes them; HTTP treats header names case-insensitively.
//!
//! ## Example
//!
//! ```no_run
//! use metropol::{Client, Config};
//! use metropol_core::Context;
//! use metropol_http_send_reqwest::ReqwestHttpSend;
//!
//! # async fn example() -> metropol_core::Result<()> {
//! let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
//! let client = Client::new(
//!     ctx,
//!     Config::new()
//!         .with_public_key("public key")
//!         .with_private_key("private key")
//!         .with_port(5555),
//! );
//!
//! let identity = client.identity_verification(880000088).await?;
//! println!("{identity}");
//! # Ok(())
//! # }
//! ```

pub mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::{compute_hash, format_timestamp, RequestSigner};

mod report;
pub use report::{ReportRequest, ReportType};

mod client;
pub use client::{resolve_url, Client};
