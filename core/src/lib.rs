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

//! Core components for talking to the Metropol CRB API.
//!
//! This crate provides the foundational types shared by the metropol client
//! and its pluggable transports.
//!
//! ## Overview
//!
//! - **Context**: A container that holds implementations for HTTP sending and environment access
//! - **Error**: The single error type, classified by [`ErrorKind`]
//!
//! ## Example
//!
//! ```no_run
//! use bytes::Bytes;
//! use metropol_core::{Context, HttpSend, Result};
//!
//! #[derive(Debug)]
//! struct MyHttpSend;
//!
//! #[async_trait::async_trait]
//! impl HttpSend for MyHttpSend {
//!     async fn http_send(&self, _req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
//!         // Hand the request to your http client of choice here.
//!         Ok(http::Response::new(Bytes::from_static(b"{}")))
//!     }
//! }
//!
//! let ctx = Context::new().with_http_send(MyHttpSend);
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};
