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

//! Constants used by the metropol client.

// Env values used by the metropol client.
pub const METROPOL_PUBLIC_KEY: &str = "METROPOL_PUBLIC_KEY";
pub const METROPOL_PRIVATE_KEY: &str = "METROPOL_PRIVATE_KEY";
pub const METROPOL_BASE_URL: &str = "METROPOL_BASE_URL";
pub const METROPOL_PORT: &str = "METROPOL_PORT";
pub const METROPOL_VERSION: &str = "METROPOL_VERSION";

// Default endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.metropol.co.ke";
pub const DEFAULT_PORT: u16 = 443;

// Headers used by metropol request signing.
//
// Documented as `X-METROPOL-REST-API-*`; header names are case-insensitive
// and `http` keeps them lowercase.
pub const X_METROPOL_REST_API_KEY: &str = "x-metropol-rest-api-key";
pub const X_METROPOL_REST_API_HASH: &str = "x-metropol-rest-api-hash";
pub const X_METROPOL_REST_API_TIMESTAMP: &str = "x-metropol-rest-api-timestamp";

// Resource paths.
pub const IDENTITY_VERIFY_PATH: &str = "/identity/verify";
/// The live service spells this path without the first `n`.
pub const DELINQUENCY_STATUS_PATH: &str = "/deliquency/status";
pub const CREDIT_INFO_PATH: &str = "/report/credit_info";
pub const CONSUMER_SCORE_PATH: &str = "/score/consumer";

// Payload constants.
pub const IDENTITY_TYPE: &str = "001";
pub const REPORT_REASON: u8 = 1;
